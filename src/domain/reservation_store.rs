use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::id::RestaurantName;
use crate::domain::reservation::Reservation;
use crate::domain::table::TableId;

new_key_type! {
    pub struct ReservationId;
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Live reservation storage.
    slots: SlotMap<ReservationId, Reservation>,

    /// Index from an occupied seat (restaurant name, table id) back to its
    /// live reservation.
    table_index: HashMap<(RestaurantName, TableId), ReservationId>,
}

#[derive(Debug, Clone)]
pub struct ReservationStore {
    /// Both maps are protected with a single lock.
    inner: Arc<RwLock<StoreInner>>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(StoreInner::default())) }
    }

    /// Adds a committed Reservation to the store.
    ///
    /// # Returns
    /// Returns the ReservationId (internal key for the store).
    pub fn add(&self, reservation: Reservation) -> ReservationId {
        let mut guard = self.inner.write().expect("RwLock poisoned");
        let seat = (reservation.restaurant_name.clone(), reservation.table_id);
        let key = guard.slots.insert(reservation);

        guard.table_index.insert(seat, key);

        return key;
    }

    /// Get a Reservation record with its internal id (ReservationId).
    ///
    /// # Returns
    /// Returns Some(Reservation) if the id refers to a live reservation,
    /// else None.
    pub fn get(&self, key: ReservationId) -> Option<Reservation> {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.slots.get(key).cloned()
    }

    /// Get the live Reservation holding a specific table, if any.
    pub fn get_by_table(&self, restaurant_name: &RestaurantName, table_id: TableId) -> Option<Reservation> {
        let guard = self.inner.read().expect("RwLock poisoned");
        let key = guard.table_index.get(&(restaurant_name.clone(), table_id))?;
        guard.slots.get(*key).cloned()
    }

    /// Removes a reservation from the store. Whoever gets the record back
    /// owns the follow-up work of freeing the table; a second removal of
    /// the same id returns None.
    pub fn remove(&self, key: ReservationId) -> Option<Reservation> {
        let mut guard = self.inner.write().expect("RwLock poisoned");
        let record = guard.slots.remove(key)?;

        guard.table_index.remove(&(record.restaurant_name.clone(), record.table_id));

        Some(record)
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}
