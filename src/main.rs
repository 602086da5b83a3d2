use std::env;
use std::path::Path;

use log::{error, info};

use kitchen_buddy::{ingest, AppConfig, Error, RecipeStore};

fn main() -> Result<(), Error> {
    env_logger::init();

    let config = AppConfig::load()?;

    // Optional positional argument overrides the configured favorites file
    let args: Vec<String> = env::args().collect();
    let recipes_file = args.get(1).cloned().unwrap_or(config.recipes_file);

    let mut store = RecipeStore::open(&config.database.path)?;

    match ingest::load_from_path(&mut store, Path::new(&recipes_file)) {
        Ok(count) => info!("Startup: loaded {count} recipes from {recipes_file}"),
        Err(Error::RecipeFileNotFound(path)) => {
            info!(
                "No {} file found, skipping initial recipe loading.",
                path.display()
            )
        }
        // Startup continues degraded; the store itself is usable.
        Err(e) => error!("Failed to load recipes from {recipes_file}: {e}"),
    }

    println!("{} recipes stored.", store.recipe_count()?);
    Ok(())
}
