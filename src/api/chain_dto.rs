use serde::{Deserialize, Serialize};

/// On-disk description of a whole chain. This is the only way a chain is
/// populated; there is no hardcoded restaurant setup anywhere in the crate.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChainDto {
    pub name: String,

    pub restaurants: Vec<RestaurantDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub name: String,

    /// One entry per table, in house numbering order. Table ids are
    /// assigned from this order, starting at 1.
    pub table_capacities: Vec<i64>,
}
