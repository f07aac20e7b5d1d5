use crate::api::chain_dto::ChainDto;
use crate::domain::chain::Chain;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds a `Chain` from a JSON configuration file.
///
/// Initializes the global logger, parses the config into DTOs and converts
/// them into the domain model, running all construction-time validation
/// (duplicate restaurant names, invalid table capacities).
pub fn build_chain(file_path: &str) -> Result<Chain> {
    logger::init();
    log::info!("Logger initialized. Starting Chain construction.");

    let chain_dto: ChainDto = parse_json_file::<ChainDto>(file_path)?;
    log::info!("Chain config '{}' parsed successfully.", file_path);

    let chain = Chain::from_dto(chain_dto)?;
    log::info!("Chain '{}' constructed with {} restaurants.", chain.name, chain.restaurant_count());

    Ok(chain)
}
