use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting or storing recipes
#[derive(Error, Debug)]
pub enum Error {
    /// The favorites file does not exist; callers may skip initial loading
    #[error("Recipe file not found: {0}")]
    RecipeFileNotFound(PathBuf),

    /// Failed to read or write a recipe file
    #[error("Recipe file error: {0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No recipe row with the given id
    #[error("Recipe {0} not found")]
    RecipeNotFound(i64),

    /// No ingredient row with the given id
    #[error("Ingredient {0} not found")]
    IngredientNotFound(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
