//! SQLite persistence for recipes, pantry ingredients and image links.
//!
//! All access goes through an explicitly constructed [`RecipeStore`] that
//! owns the connection; there is no ambient global state. The schema is
//! created idempotently on open.

use std::path::Path;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::error::Error;
use crate::model::{
    Ingredient, IngredientUpdate, Recipe, RecipeDraft, RecipeFilter, RecipeImage, RecipeUpdate,
};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    recipe_id INTEGER PRIMARY KEY,
    recipe_title TEXT NOT NULL,
    ingredients_required TEXT,
    instructions TEXT,
    taste_profile TEXT,
    reviews TEXT,
    cuisine_type TEXT,
    preparation_time INTEGER,
    additional_tags TEXT
);
CREATE TABLE IF NOT EXISTS ingredients (
    ingredient_id INTEGER PRIMARY KEY,
    ingredient_name TEXT NOT NULL,
    quantity REAL,
    unit TEXT
);
CREATE TABLE IF NOT EXISTS recipe_images (
    image_id INTEGER PRIMARY KEY,
    recipe_id INTEGER NOT NULL,
    image_path TEXT NOT NULL
);
"#;

const RECIPE_COLUMNS: &str = "recipe_id, recipe_title, ingredients_required, instructions, \
     taste_profile, reviews, cuisine_type, preparation_time, additional_tags";

/// Handle to the recipe database.
pub struct RecipeStore {
    conn: Connection,
}

impl RecipeStore {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::with_connection(Connection::open(path)?)
    }

    /// In-memory database, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a single parsed draft, applying the insert-time defaults.
    /// Returns the assigned recipe id.
    pub fn insert_recipe(&self, draft: &RecipeDraft) -> Result<i64, Error> {
        Ok(insert_draft(&self.conn, draft)?)
    }

    /// Insert a batch of parsed drafts inside one transaction.
    ///
    /// Either every draft commits or none do. An empty batch is a no-op
    /// that reports zero.
    pub fn insert_batch(&mut self, drafts: &[RecipeDraft]) -> Result<usize, Error> {
        if drafts.is_empty() {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        for draft in drafts {
            insert_draft(&tx, draft)?;
        }
        tx.commit()?;
        debug!("Committed batch of {} recipes", drafts.len());
        Ok(drafts.len())
    }

    /// Fetch one recipe by id.
    pub fn recipe(&self, recipe_id: i64) -> Result<Recipe, Error> {
        self.conn
            .query_row(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE recipe_id = ?1"),
                params![recipe_id],
                row_to_recipe,
            )
            .optional()?
            .ok_or(Error::RecipeNotFound(recipe_id))
    }

    /// List recipes matching the given filters, in insertion order.
    pub fn recipes(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, Error> {
        let mut sql = format!("SELECT {RECIPE_COLUMNS} FROM recipes");
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(taste) = &filter.taste_profile {
            clauses.push("taste_profile = ?");
            args.push(Box::new(taste.clone()));
        }
        if let Some(cuisine) = &filter.cuisine_type {
            clauses.push("cuisine_type = ?");
            args.push(Box::new(cuisine.clone()));
        }
        if let Some(max) = filter.max_prep_time {
            clauses.push("preparation_time <= ?");
            args.push(Box::new(max));
        }
        if let Some(term) = &filter.search {
            clauses.push(
                "(recipe_title LIKE ? OR instructions LIKE ? OR ingredients_required LIKE ?)",
            );
            let pattern = format!("%{term}%");
            args.push(Box::new(pattern.clone()));
            args.push(Box::new(pattern.clone()));
            args.push(Box::new(pattern));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY recipe_id");

        let mut stmt = self.conn.prepare(&sql)?;
        let arg_refs: Vec<&dyn ToSql> = args.iter().map(|a| a.as_ref()).collect();
        let rows = stmt.query_map(arg_refs.as_slice(), row_to_recipe)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Update individual recipe fields. `None` fields keep their current
    /// value.
    pub fn update_recipe(&self, recipe_id: i64, update: &RecipeUpdate) -> Result<(), Error> {
        let changed = self.conn.execute(
            "UPDATE recipes SET
                recipe_title = COALESCE(?1, recipe_title),
                ingredients_required = COALESCE(?2, ingredients_required),
                instructions = COALESCE(?3, instructions),
                taste_profile = COALESCE(?4, taste_profile),
                reviews = COALESCE(?5, reviews),
                cuisine_type = COALESCE(?6, cuisine_type),
                preparation_time = COALESCE(?7, preparation_time),
                additional_tags = COALESCE(?8, additional_tags)
             WHERE recipe_id = ?9",
            params![
                update.recipe_title,
                update.ingredients_required,
                update.instructions,
                update.taste_profile,
                update.reviews,
                update.cuisine_type,
                update.preparation_time,
                update.additional_tags,
                recipe_id,
            ],
        )?;
        if changed == 0 {
            return Err(Error::RecipeNotFound(recipe_id));
        }
        Ok(())
    }

    /// Delete a recipe and any image links pointing at it. Both deletes
    /// commit together, so links never outlive their recipe.
    pub fn delete_recipe(&mut self, recipe_id: i64) -> Result<(), Error> {
        let tx = self.conn.transaction()?;
        let deleted =
            tx.execute("DELETE FROM recipes WHERE recipe_id = ?1", params![recipe_id])?;
        if deleted == 0 {
            return Err(Error::RecipeNotFound(recipe_id));
        }
        tx.execute(
            "DELETE FROM recipe_images WHERE recipe_id = ?1",
            params![recipe_id],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Total number of stored recipes.
    pub fn recipe_count(&self) -> Result<i64, Error> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?)
    }

    /// Add a pantry ingredient, returning its id.
    pub fn add_ingredient(
        &self,
        name: &str,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> Result<i64, Error> {
        self.conn.execute(
            "INSERT INTO ingredients (ingredient_name, quantity, unit) VALUES (?1, ?2, ?3)",
            params![name, quantity, unit],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All pantry ingredients, in insertion order.
    pub fn ingredients(&self) -> Result<Vec<Ingredient>, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT ingredient_id, ingredient_name, quantity, unit
             FROM ingredients ORDER BY ingredient_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Ingredient {
                ingredient_id: row.get(0)?,
                ingredient_name: row.get(1)?,
                quantity: row.get(2)?,
                unit: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Update an ingredient's quantity or unit; `None` keeps the current
    /// value.
    pub fn update_ingredient(
        &self,
        ingredient_id: i64,
        update: &IngredientUpdate,
    ) -> Result<(), Error> {
        let changed = self.conn.execute(
            "UPDATE ingredients SET
                quantity = COALESCE(?1, quantity),
                unit = COALESCE(?2, unit)
             WHERE ingredient_id = ?3",
            params![update.quantity, update.unit, ingredient_id],
        )?;
        if changed == 0 {
            return Err(Error::IngredientNotFound(ingredient_id));
        }
        Ok(())
    }

    /// Remove an ingredient from the pantry.
    pub fn delete_ingredient(&self, ingredient_id: i64) -> Result<(), Error> {
        let deleted = self.conn.execute(
            "DELETE FROM ingredients WHERE ingredient_id = ?1",
            params![ingredient_id],
        )?;
        if deleted == 0 {
            return Err(Error::IngredientNotFound(ingredient_id));
        }
        Ok(())
    }

    /// Link an image file to an existing recipe.
    pub fn attach_image(&self, recipe_id: i64, image_path: &str) -> Result<i64, Error> {
        // Existence check; image links must not dangle from the start.
        self.recipe(recipe_id)?;
        self.conn.execute(
            "INSERT INTO recipe_images (recipe_id, image_path) VALUES (?1, ?2)",
            params![recipe_id, image_path],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All images linked to a recipe.
    pub fn images(&self, recipe_id: i64) -> Result<Vec<RecipeImage>, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT image_id, recipe_id, image_path
             FROM recipe_images WHERE recipe_id = ?1 ORDER BY image_id",
        )?;
        let rows = stmt.query_map(params![recipe_id], |row| {
            Ok(RecipeImage {
                image_id: row.get(0)?,
                recipe_id: row.get(1)?,
                image_path: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// Insert one draft with insert-time defaults applied: a missing or empty
/// title becomes "Untitled", missing text fields become empty strings, and
/// the prep time is stored as NULL unless it parses as an integer.
fn insert_draft(conn: &Connection, draft: &RecipeDraft) -> Result<i64, rusqlite::Error> {
    let title = draft
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled");
    let prep_time: Option<i64> = draft
        .prep_time
        .as_deref()
        .and_then(|s| s.trim().parse().ok());

    conn.execute(
        "INSERT INTO recipes (recipe_title, ingredients_required, instructions,
            taste_profile, reviews, cuisine_type, preparation_time, additional_tags)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            title,
            draft.ingredients.as_deref().unwrap_or(""),
            draft.instructions.as_deref().unwrap_or(""),
            draft.taste.as_deref().unwrap_or(""),
            draft.reviews.as_deref().unwrap_or(""),
            draft.cuisine.as_deref().unwrap_or(""),
            prep_time,
            draft.additional_tags.as_deref().unwrap_or(""),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn row_to_recipe(row: &Row) -> Result<Recipe, rusqlite::Error> {
    Ok(Recipe {
        recipe_id: row.get(0)?,
        recipe_title: row.get(1)?,
        ingredients_required: row.get(2)?,
        instructions: row.get(3)?,
        taste_profile: row.get(4)?,
        reviews: row.get(5)?,
        cuisine_type: row.get(6)?,
        preparation_time: row.get(7)?,
        additional_tags: row.get(8)?,
    })
}
