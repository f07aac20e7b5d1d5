use serde::Serialize;
use std::sync::{Arc, RwLock};

use crate::domain::id::{HolderName, RestaurantName};
use crate::domain::reservation::Reservation;
use crate::domain::table::{Table, TableId, TableStatus};
use crate::error::{Error, Result};

/// A restaurant owning an ordered collection of tables.
///
/// The table order is fixed at construction and represents the house
/// numbering; it is never re-sorted by capacity. All tables sit behind one
/// lock, so the best-fit scan and the occupancy flip of `reserve_table`
/// happen as a single step per restaurant. Availability queries only take
/// the read lock and are advisory: a caller must treat the result of the
/// reserve call itself as authoritative.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub name: RestaurantName,
    tables: Arc<RwLock<Vec<Table>>>,
}

impl Restaurant {
    /// Builds a restaurant from its configured table capacities. Table ids
    /// are assigned from declaration order, starting at 1.
    ///
    /// Fails with `InvalidTableCapacity` on any capacity below 1; a
    /// structurally broken config is rejected here instead of surfacing
    /// confusing allocation behavior later.
    pub fn new(name: RestaurantName, capacities: &[i64]) -> Result<Self> {
        let mut tables = Vec::with_capacity(capacities.len());

        for (index, &capacity) in capacities.iter().enumerate() {
            let table_id = (index as TableId) + 1;

            if capacity < 1 {
                return Err(Error::InvalidTableCapacity { restaurant: name.clone(), table_id, capacity });
            }

            tables.push(Table::new(table_id, capacity));
        }

        Ok(Self { name, tables: Arc::new(RwLock::new(tables)) })
    }

    /// Advisory probe: true iff at least one owned table fits the party.
    pub fn has_available_tables(&self, party_size: i64) -> bool {
        let guard = self.tables.read().expect("RwLock poisoned");
        return guard.iter().any(|table| table.fits(party_size));
    }

    /// Every table that fits the party, smallest capacity first with ties
    /// by ascending table id. This is exactly the order `reserve_table`
    /// picks from, so the head of the listing is the allocation candidate.
    pub fn available_tables_info(&self, party_size: i64) -> Vec<TableStatus> {
        let guard = self.tables.read().expect("RwLock poisoned");

        let mut fitting: Vec<TableStatus> = guard.iter().filter(|table| table.fits(party_size)).map(TableStatus::from).collect();
        fitting.sort_by_key(|status| (status.capacity, status.id));

        return fitting;
    }

    /// Selects and occupies the best-fit table for the party.
    ///
    /// Best-fit means the free table with the smallest sufficient capacity;
    /// ties are broken by the lowest table id. The scan and the occupancy
    /// flip run under one write lock, so two concurrent calls can never win
    /// the same table.
    ///
    /// # Returns
    /// Returns the committed Reservation, or `InvalidPartySize`,
    /// `EmptyHolderName`, `NoAvailableTable`.
    pub fn reserve_table(&self, party_size: i64, holder_name: HolderName) -> Result<Reservation> {
        if party_size < 1 {
            return Err(Error::InvalidPartySize(party_size));
        }
        if holder_name.as_str().is_empty() {
            return Err(Error::EmptyHolderName);
        }

        let mut guard = self.tables.write().expect("RwLock poisoned");

        let best_fit = guard.iter_mut().filter(|table| table.fits(party_size)).min_by_key(|table| (table.capacity, table.id));

        let Some(table) = best_fit else {
            log::debug!("'{}': no free table fits a party of {}.", self.name, party_size);
            return Err(Error::NoAvailableTable { restaurant: self.name.clone(), party_size });
        };

        table.occupy()?;
        let reservation = Reservation::new(holder_name, party_size, table.id, self.name.clone());

        log::info!("Reserved table {} (seats {}) at '{}' for a party of {}.", table.id, table.capacity, self.name, party_size);

        return Ok(reservation);
    }

    /// Frees a single table. This is the strict surface: releasing a table
    /// that is not occupied (or that does not exist) fails with
    /// `NotOccupied` instead of passing silently.
    pub fn release_table(&self, table_id: TableId) -> Result<()> {
        let mut guard = self.tables.write().expect("RwLock poisoned");

        let Some(table) = guard.iter_mut().find(|table| table.id == table_id) else {
            log::warn!("'{}': release requested for unknown table {}.", self.name, table_id);
            return Err(Error::NotOccupied(table_id));
        };

        if !table.release() {
            return Err(Error::NotOccupied(table_id));
        }

        log::info!("Released table {} at '{}'.", table_id, self.name);
        Ok(())
    }

    /// Snapshot of every table in house numbering order, computed at call
    /// time.
    pub fn describe(&self) -> RestaurantSnapshot {
        let guard = self.tables.read().expect("RwLock poisoned");

        RestaurantSnapshot { name: self.name.clone(), tables: guard.iter().map(TableStatus::from).collect() }
    }

    pub fn table_count(&self) -> usize {
        let guard = self.tables.read().expect("RwLock poisoned");
        guard.len()
    }
}

/// Structured table-state snapshot of one restaurant, the replacement for
/// string rendering inside the engine. Serializable for whatever the
/// presentation layer wants to do with it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSnapshot {
    pub name: RestaurantName,
    pub tables: Vec<TableStatus>,
}
