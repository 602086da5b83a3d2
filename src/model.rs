use serde::{Deserialize, Serialize};

/// Raw output of parsing one recipe text block.
///
/// Every field is optional: `None` means the block never mentioned the
/// field, while `Some("")` means it was written as `Key:` with nothing
/// after the colon. The distinction matters at insert time, when absent
/// fields receive defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub taste: Option<String>,
    pub reviews: Option<String>,
    pub cuisine: Option<String>,
    pub prep_time: Option<String>,
    pub additional_tags: Option<String>,
}

/// A recipe row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: i64,
    pub recipe_title: String,
    /// Semicolon-separated list, e.g. "Flour; Sugar; Eggs"
    pub ingredients_required: String,
    pub instructions: String,
    pub taste_profile: String,
    pub reviews: String,
    pub cuisine_type: String,
    /// Minutes; NULL when the source text had no parseable number
    pub preparation_time: Option<i64>,
    pub additional_tags: String,
}

/// Field-level recipe update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub recipe_title: Option<String>,
    pub ingredients_required: Option<String>,
    pub instructions: Option<String>,
    pub taste_profile: Option<String>,
    pub reviews: Option<String>,
    pub cuisine_type: Option<String>,
    pub preparation_time: Option<i64>,
    pub additional_tags: Option<String>,
}

/// A pantry ingredient row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub quantity: Option<f64>,
    /// e.g. "cups", "grams", "kg"
    pub unit: Option<String>,
}

/// Update for an ingredient's quantity or unit. `None` leaves the column
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct IngredientUpdate {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Associates an image file with a recipe by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeImage {
    pub image_id: i64,
    pub recipe_id: i64,
    pub image_path: String,
}

/// Optional filters for recipe queries. All default to "no constraint".
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub taste_profile: Option<String>,
    pub cuisine_type: Option<String>,
    pub max_prep_time: Option<i64>,
    /// Substring match across title, instructions and required ingredients
    pub search: Option<String>,
}
