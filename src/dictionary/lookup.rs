use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use super::entry::WordEntry;
use super::loader::parse_entries;
use crate::error::{DictionaryError, Result};

/// Every entry loaded at startup, read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<WordEntry>,
}

impl Dictionary {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Load a dictionary file.
    ///
    /// Fails with `LoadError` if the file cannot be opened and with
    /// `EmptyDictionary` if it holds no complete record. Both leave the
    /// caller free to carry on with `Dictionary::default()`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading dictionary from {}", path.display());

        let file = File::open(path).map_err(|e| {
            warn!("Cannot open dictionary {}: {}", path.display(), e);
            DictionaryError::LoadError(e)
        })?;

        let dictionary = Self::from_reader(BufReader::new(file));
        if dictionary.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        info!("Loaded {} words from dictionary", dictionary.len());

        Ok(dictionary)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::new(parse_entries(reader))
    }

    /// First entry whose name matches `query`, ignoring case
    pub fn search(&self, query: &str) -> Option<&WordEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == query)
    }

    /// Uniformly chosen entry
    pub fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&WordEntry> {
        if self.entries.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        let index = rng.gen_range(0..self.entries.len());
        Ok(&self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }
}
