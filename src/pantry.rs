//! Rule-based "can I cook this" filtering against the pantry.
//!
//! This produces the candidate set an external chatbot layer builds its
//! answer from; prompt construction happens elsewhere.

use std::collections::HashMap;

use log::debug;

use crate::model::{Ingredient, Recipe};

/// Case-insensitive index of the ingredients at home, summing quantities
/// across duplicate names.
#[derive(Debug, Default)]
pub struct Pantry {
    quantities: HashMap<String, f64>,
}

impl Pantry {
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        let mut quantities: HashMap<String, f64> = HashMap::new();
        for ing in ingredients {
            let name = ing.ingredient_name.trim().to_lowercase();
            *quantities.entry(name).or_insert(0.0) += ing.quantity.unwrap_or(0.0);
        }
        Self { quantities }
    }

    /// True when every required ingredient name is in the pantry.
    ///
    /// `ingredients_required` is a semicolon-separated list; matching is by
    /// name only, quantities and units are not checked. A recipe with a
    /// blank requirement list is trivially cookable.
    pub fn can_make(&self, recipe: &Recipe) -> bool {
        recipe
            .ingredients_required
            .split(';')
            .map(|req| req.trim().to_lowercase())
            .filter(|req| !req.is_empty())
            .all(|req| self.quantities.contains_key(&req))
    }

    /// The subset of `recipes` that can be made right now, in input order.
    pub fn feasible<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        let feasible: Vec<&Recipe> = recipes.iter().filter(|r| self.can_make(r)).collect();
        debug!("{} of {} recipes are feasible", feasible.len(), recipes.len());
        feasible
    }
}

/// Scan a user message for a taste preference keyword.
pub fn taste_preference(message: &str) -> Option<&'static str> {
    let message = message.to_lowercase();
    if message.contains("sweet") {
        Some("sweet")
    } else if message.contains("savory") {
        Some("savory")
    } else if message.contains("spicy") {
        Some("spicy")
    } else {
        None
    }
}
