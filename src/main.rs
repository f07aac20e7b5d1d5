use clap::Parser;

use chain_booking::build_chain;

/// Loads a chain configuration and prints a seating summary.
#[derive(Parser, Debug)]
#[command(name = "chain_booking", about = "Restaurant chain booking engine demo")]
struct Args {
    /// Path to the chain configuration JSON.
    #[arg(default_value = "src/data/gourmet_dining.json")]
    config: String,
}

fn main() {
    let args = Args::parse();

    match build_chain(&args.config) {
        Ok(chain) => {
            log::info!("Loaded chain '{}' from '{}'.", chain.name, args.config);

            for name in chain.list_restaurant_names() {
                if let Ok(snapshot) = chain.describe_restaurant(&name) {
                    let free = snapshot.tables.iter().filter(|table| !table.occupied).count();
                    log::info!("{}: {} tables, {} free.", name, snapshot.tables.len(), free);
                }
            }
        }
        Err(e) => {
            log::error!("Error while loading the chain config: {}", e);
        }
    }
}
