//! Reads recipe text into the store: the startup load of the favorites
//! file, and single-block ingestion for typed or OCR-extracted text.
//!
//! The parser does not care where the text came from; OCR engines and
//! upload endpoints are external collaborators that hand over plain text.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::model::RecipeDraft;
use crate::parser::{self, BLOCK_DELIMITER};
use crate::store::RecipeStore;

/// Read and parse a favorites file that may contain multiple recipes
/// separated by `---`.
///
/// A missing file is reported as [`Error::RecipeFileNotFound`], distinct
/// from other read failures, so callers can treat it as "nothing to load".
pub fn parse_recipe_file(path: &Path) -> Result<Vec<RecipeDraft>, Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::RecipeFileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    let drafts = parser::split_blocks(&content);
    debug!("Parsed {} recipe blocks from {}", drafts.len(), path.display());
    Ok(drafts)
}

/// Parse the file at `path` and insert everything as one batch.
/// Returns the number of recipes inserted.
pub fn load_from_path(store: &mut RecipeStore, path: &Path) -> Result<usize, Error> {
    let drafts = parse_recipe_file(path)?;
    let inserted = store.insert_batch(&drafts)?;
    info!("Inserted {} recipes from {}", inserted, path.display());
    Ok(inserted)
}

/// Append one raw recipe snippet to the favorites file, separated from
/// previous entries by a `---` line. Creates the file if needed.
pub fn append_block(path: &Path, raw_text: &str) -> Result<(), Error> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n{}\n{}\n", BLOCK_DELIMITER, raw_text.trim())?;
    Ok(())
}

/// Parse a single raw text block (typed input or OCR output) and insert
/// it, returning the new recipe id.
pub fn ingest_block(store: &RecipeStore, raw_text: &str) -> Result<i64, Error> {
    let draft = parser::parse_block(raw_text);
    let id = store.insert_recipe(&draft)?;
    debug!("Ingested recipe block as id {id}");
    Ok(id)
}
