use uuid::Uuid;

use crate::domain::id::{HolderName, RestaurantName};
use crate::domain::table::TableId;

/// The committed outcome of a successful allocation: who sits, how many,
/// and on which table of which restaurant.
///
/// A record exists exactly as long as its table stays occupied. It is
/// created inside the reserve step and destroyed by `Chain::release`;
/// there is no separate pending or cancelled state.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub holder_name: HolderName,
    pub party_size: i64,
    pub table_id: TableId,
    pub restaurant_name: RestaurantName,

    /// User-facing confirmation code, generated at commit time.
    pub confirmation: Uuid,
}

impl Reservation {
    pub fn new(holder_name: HolderName, party_size: i64, table_id: TableId, restaurant_name: RestaurantName) -> Self {
        Self { holder_name, party_size, table_id, restaurant_name, confirmation: Uuid::new_v4() }
    }
}
