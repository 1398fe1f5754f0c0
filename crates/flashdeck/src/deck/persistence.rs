//! Persistence for decks - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{FlashdeckError, Result};

use super::Deck;

impl Deck {
    /// Save the deck to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use flashdeck::Deck;
    /// # fn example(deck: &Deck) -> flashdeck::Result<()> {
    /// deck.save("biology.deck.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    FlashdeckError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            FlashdeckError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            FlashdeckError::Persistence(format!("Failed to serialize deck: {}", e))
        })?;

        Ok(())
    }

    /// Load a deck from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            FlashdeckError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let deck: Deck = serde_json::from_reader(reader).map_err(|e| {
            FlashdeckError::Persistence(format!(
                "Failed to parse deck '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(deck)
    }
}

/// Default deck file path for a notes file.
///
/// # Example
///
/// ```
/// use flashdeck::deck_path;
///
/// let path = deck_path("notes/biology.md");
/// assert_eq!(path.to_string_lossy(), "notes/biology.deck.json");
/// ```
pub fn deck_path(notes_path: impl AsRef<Path>) -> PathBuf {
    let notes_path = notes_path.as_ref();
    let stem = notes_path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = notes_path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.deck.json", stem))
}
