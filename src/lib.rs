//! Personal recipe keeper.
//!
//! Parses free-text recipe blocks (typed, uploaded, or OCR-extracted) into
//! structured drafts, persists them in SQLite, and filters stored recipes
//! by what the pantry can actually cover.

pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod pantry;
pub mod parser;
pub mod store;

pub use config::AppConfig;
pub use error::Error;
pub use model::{
    Ingredient, IngredientUpdate, Recipe, RecipeDraft, RecipeFilter, RecipeImage, RecipeUpdate,
};
pub use pantry::Pantry;
pub use parser::{parse_block, split_blocks};
pub use store::RecipeStore;
