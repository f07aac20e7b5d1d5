use serde::Serialize;

use crate::error::{Error, Result};

/// Unique within one restaurant, assigned from house numbering order.
pub type TableId = u32;

/// A single seating unit with a fixed capacity and a binary occupancy
/// state. `Free -> Reserved` via `occupy`, `Reserved -> Free` via
/// `release`; there are no other states.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: TableId,
    pub capacity: i64,
    occupied: bool,
}

impl Table {
    pub fn new(id: TableId, capacity: i64) -> Self {
        Self { id, capacity, occupied: false }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// True iff the table is free and can seat the whole party.
    pub fn fits(&self, party_size: i64) -> bool {
        return !self.occupied && self.capacity >= party_size;
    }

    pub fn occupy(&mut self) -> Result<()> {
        if self.occupied {
            return Err(Error::AlreadyOccupied(self.id));
        }

        self.occupied = true;
        Ok(())
    }

    /// Frees the table. Releasing a free table is a no-op.
    ///
    /// # Returns
    /// Returns true if the table was occupied before the call.
    pub fn release(&mut self) -> bool {
        let was_occupied = self.occupied;
        self.occupied = false;

        return was_occupied;
    }
}

/// Point-in-time view of a single table, safe to hand to a presentation
/// layer. Always computed from live state, never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStatus {
    pub id: TableId,
    pub capacity: i64,
    pub occupied: bool,
}

impl From<&Table> for TableStatus {
    fn from(table: &Table) -> Self {
        Self { id: table.id, capacity: table.capacity, occupied: table.occupied }
    }
}
