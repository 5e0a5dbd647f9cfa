//! Flat-file persistence.
//!
//! The whole dataset is one JSON document, loaded and rewritten in full on
//! every request. One `save` call replaces the file contents; there is no
//! locking, so overlapping writers race and the last write wins.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::tournaments::Tournament;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}

impl Document {
    pub fn tournament_mut(&mut self, id: &str) -> Option<&mut Tournament> {
        self.tournaments.iter_mut().find(|t| t.id == id)
    }
}

#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// A missing, empty, or `null` backing file reads as the empty document.
    pub fn load(&self) -> io::Result<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Document::default());
            }
            Err(e) => return Err(e),
        };

        if raw.trim().is_empty() {
            return Ok(Document::default());
        }

        let doc = serde_json::from_str::<Option<Document>>(&raw)
            .map_err(io::Error::other)?;
        Ok(doc.unwrap_or_default())
    }

    pub fn save(&self, doc: &Document) -> io::Result<()> {
        let mut raw = serde_json::to_string_pretty(doc).map_err(io::Error::other)?;
        raw.push('\n');
        fs::write(&self.path, raw)
    }
}
