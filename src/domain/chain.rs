use std::collections::HashMap;

use crate::api::chain_dto::ChainDto;
use crate::domain::id::{HolderName, RestaurantName};
use crate::domain::reservation::Reservation;
use crate::domain::reservation_store::{ReservationId, ReservationStore};
use crate::domain::restaurant::{Restaurant, RestaurantSnapshot};
use crate::domain::table::{TableId, TableStatus};
use crate::error::{Error, Result};

/// The owning collection of named restaurants.
///
/// A chain is populated once (from a `ChainDto` or via `add_restaurant`)
/// and then shared immutably between any number of booking sessions; all
/// mutation after construction goes through the per-restaurant locks and
/// the reservation store, so `&self` is enough for the whole booking
/// surface and cross-restaurant traffic proceeds concurrently.
#[derive(Debug)]
pub struct Chain {
    pub name: String,

    /// Restaurants in insertion order. The cross-restaurant search visits
    /// them in exactly this order.
    restaurants: Vec<Restaurant>,

    /// Index from restaurant name into `restaurants`. Case-sensitive.
    name_index: HashMap<RestaurantName, usize>,

    /// Live reservations across the whole chain.
    reservations: ReservationStore,
}

impl Chain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), restaurants: Vec::new(), name_index: HashMap::new(), reservations: ReservationStore::new() }
    }

    /// Builds the whole chain from its parsed configuration. Restaurant
    /// order in the DTO becomes the insertion order of the chain.
    pub fn from_dto(dto: ChainDto) -> Result<Self> {
        let mut chain = Chain::new(dto.name);

        for restaurant_dto in dto.restaurants {
            let restaurant = Restaurant::new(RestaurantName::new(restaurant_dto.name), &restaurant_dto.table_capacities)?;
            chain.add_restaurant(restaurant)?;
        }

        Ok(chain)
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant) -> Result<()> {
        if self.name_index.contains_key(&restaurant.name) {
            return Err(Error::DuplicateRestaurantName(restaurant.name.clone()));
        }

        self.name_index.insert(restaurant.name.clone(), self.restaurants.len());
        self.restaurants.push(restaurant);

        Ok(())
    }

    pub fn get_restaurant(&self, name: &RestaurantName) -> Result<&Restaurant> {
        let index = self.name_index.get(name).ok_or_else(|| Error::RestaurantNotFound(name.clone()))?;

        Ok(&self.restaurants[*index])
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    //--------------------------------
    // --- Presentation surface ---
    //--------------------------------

    pub fn list_restaurant_names(&self) -> Vec<RestaurantName> {
        self.restaurants.iter().map(|restaurant| restaurant.name.clone()).collect()
    }

    pub fn describe_restaurant(&self, name: &RestaurantName) -> Result<RestaurantSnapshot> {
        Ok(self.get_restaurant(name)?.describe())
    }

    /// Advisory availability check; see `Restaurant::has_available_tables`.
    pub fn check_availability(&self, name: &RestaurantName, party_size: i64) -> Result<bool> {
        Ok(self.get_restaurant(name)?.has_available_tables(party_size))
    }

    /// Fitting tables of one restaurant, in allocation-preference order.
    pub fn available_tables_info(&self, name: &RestaurantName, party_size: i64) -> Result<Vec<TableStatus>> {
        Ok(self.get_restaurant(name)?.available_tables_info(party_size))
    }

    //--------------------------------
    // --- Reservation lifecycle ---
    //--------------------------------

    /// Resolves the named restaurant and delegates the best-fit allocation
    /// to it; on success the record is committed to the reservation store.
    ///
    /// # Returns
    /// Returns the store id and the committed record, or
    /// `RestaurantNotFound` / the delegate's `InvalidPartySize`,
    /// `EmptyHolderName`, `NoAvailableTable`.
    pub fn reserve_restaurant(&self, party_size: i64, restaurant_name: &RestaurantName, holder_name: HolderName) -> Result<(ReservationId, Reservation)> {
        let restaurant = self.get_restaurant(restaurant_name)?;

        let reservation = restaurant.reserve_table(party_size, holder_name)?;
        let reservation_id = self.reservations.add(reservation.clone());

        Ok((reservation_id, reservation))
    }

    pub fn get_reservation(&self, reservation_id: ReservationId) -> Option<Reservation> {
        self.reservations.get(reservation_id)
    }

    /// The live reservation holding a specific table, if any. Together with
    /// `describe_restaurant` this exposes the occupancy invariant: a table
    /// is occupied iff exactly one live record references it.
    pub fn reservation_for_table(&self, restaurant_name: &RestaurantName, table_id: TableId) -> Option<Reservation> {
        self.reservations.get_by_table(restaurant_name, table_id)
    }

    pub fn live_reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Releases a committed reservation and frees its table.
    ///
    /// Removing the record from the store is the commit point: of two
    /// racing releases for the same id only one gets the record back and
    /// frees the table, the other fails with `ReservationNotFound`.
    pub fn release(&self, reservation_id: ReservationId) -> Result<()> {
        let Some(record) = self.reservations.remove(reservation_id) else {
            return Err(Error::ReservationNotFound);
        };

        let restaurant = self.get_restaurant(&record.restaurant_name)?;
        restaurant.release_table(record.table_id)?;

        log::info!("Released reservation for '{}' (party of {}) at '{}'.", record.holder_name, record.party_size, record.restaurant_name);

        Ok(())
    }

    //--------------------------------
    // --- Cross-restaurant search ---
    //--------------------------------

    /// Scans the chain in insertion order, skipping the restaurant named
    /// `exclude`, and returns the first one with a fitting free table.
    ///
    /// The candidate is advisory: by the time the caller reserves there,
    /// another session may have taken the last fitting table, which then
    /// surfaces as an ordinary `NoAvailableTable`. The excluded restaurant
    /// is never returned, even if it regains capacity mid-scan.
    pub fn search_restaurant(&self, party_size: i64, exclude: &RestaurantName) -> Result<&Restaurant> {
        for restaurant in &self.restaurants {
            if restaurant.name == *exclude {
                continue;
            }

            if restaurant.has_available_tables(party_size) {
                log::info!("Found alternative '{}' for a party of {} (excluded '{}').", restaurant.name, party_size, exclude);
                return Ok(restaurant);
            }
        }

        log::warn!("No restaurant in chain '{}' can seat a party of {} (excluded '{}').", self.name, party_size, exclude);
        Err(Error::NoAlternativeFound(party_size))
    }

    /// Name-level wrapper around `search_restaurant` for callers that only
    /// show the alternative to the user.
    pub fn find_alternative(&self, exclude: &RestaurantName, party_size: i64) -> Result<RestaurantName> {
        Ok(self.search_restaurant(party_size, exclude)?.name.clone())
    }
}
