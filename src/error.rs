use thiserror::Error;

use crate::domain::id::RestaurantName;
use crate::domain::table::TableId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Chain config file not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse chain config JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Party size must be at least 1, got {0}")]
    InvalidPartySize(i64),

    #[error("Reservation holder name must not be empty")]
    EmptyHolderName,

    #[error("Restaurant '{0}' is not part of the chain")]
    RestaurantNotFound(RestaurantName),

    #[error("Restaurant '{0}' is already part of the chain")]
    DuplicateRestaurantName(RestaurantName),

    #[error("No free table in '{restaurant}' can seat a party of {party_size}")]
    NoAvailableTable { restaurant: RestaurantName, party_size: i64 },

    #[error("Table {0} is already occupied")]
    AlreadyOccupied(TableId),

    #[error("Table {0} is not occupied")]
    NotOccupied(TableId),

    #[error("No other restaurant in the chain can seat a party of {0}")]
    NoAlternativeFound(i64),

    #[error("Reservation is not live (unknown or already released)")]
    ReservationNotFound,

    #[error("Table {table_id} in restaurant '{restaurant}' has invalid capacity {capacity}")]
    InvalidTableCapacity { restaurant: RestaurantName, table_id: TableId, capacity: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
