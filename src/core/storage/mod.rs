//! Card store backed by a single JSON file.
//!
//! The store owns the card list. It loads once on start and writes the whole
//! list back after every mutation. The file holds a flat JSON array of card
//! records with their ranges nested inside; there is no schema version.
//!
//! The mapping engine never touches the store. Callers hand cards to the
//! engine by value (or behind an `Arc`).

pub mod error;
pub mod migration;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::cards::Card;

pub use error::{StorageError, StorageResult};
pub use migration::backfill_descriptions;

#[derive(Debug)]
pub struct CardStore {
    path: PathBuf,
    cards: Vec<Card>,
}

impl CardStore {
    /// Open the store at `path` and load its cards.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let mut store = Self {
            path: path.into(),
            cards: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload from disk, replacing the in-memory list. A missing file is an
    /// empty collection.
    pub fn load(&mut self) -> StorageResult<()> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No cards file at {} — starting empty", self.path.display());
                self.cards.clear();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut cards: Vec<Card> = serde_json::from_str(&contents)?;
        let migrated = backfill_descriptions(&mut cards);
        self.cards = cards;

        info!(
            "Loaded {} card(s) from {}",
            self.cards.len(),
            self.path.display()
        );
        if migrated > 0 {
            info!("Generated descriptions for {migrated} legacy card(s)");
            self.save()?;
        }
        Ok(())
    }

    /// Write the whole list. The file is replaced atomically.
    pub fn save(&self) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.cards)?;
        tmp.flush()?;
        tmp.persist(&self.path)?;

        debug!("Saved {} card(s) to {}", self.cards.len(), self.path.display());
        Ok(())
    }

    pub fn replace_all(&mut self, cards: Vec<Card>) -> StorageResult<()> {
        self.cards = cards;
        self.save()
    }

    /// Replace the card with the same id, or append a new one.
    pub fn upsert(&mut self, card: Card) -> StorageResult<()> {
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
        self.save()
    }

    /// Remove a card. Returns `false` (and writes nothing) if it was absent.
    pub fn delete(&mut self, id: &str) -> StorageResult<bool> {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
