use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::info;

use songdle_data::config::HarvestConfig;
use songdle_data::harvest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    // An optional first argument replaces the output path
    let mut config = HarvestConfig::default();
    if let Some(path) = get_arg(1) {
        config.output_path = PathBuf::from(path);
    }

    info!("Los40 chart harvest, {} - {}", config.first_year, config.last_year);
    harvest::run(&config).await?;
    info!("Harvest complete");

    Ok(())
}

/// Get the nth command line argument, if given
fn get_arg(index: usize) -> Option<String> {
    env::args().nth(index)
}
