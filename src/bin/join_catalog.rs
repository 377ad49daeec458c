use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::info;

use songdle_data::catalog;
use songdle_data::config::CatalogConfig;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    // Optional arguments: catalog directory, then output path
    let mut config = match get_arg(1) {
        Some(dir) => CatalogConfig::in_dir(dir),
        None => CatalogConfig::default(),
    };
    if let Some(path) = get_arg(2) {
        config.output_path = PathBuf::from(path);
    }

    info!("Joining song catalog...");
    let total = catalog::run(&config)?;
    info!("Done, {total} songs written to {}", config.output_path.display());

    Ok(())
}

/// Get the nth command line argument, if given
fn get_arg(index: usize) -> Option<String> {
    env::args().nth(index)
}
