use super::AliasStorage;
use crate::error::{Result, WrkError};
use crate::history::{AliasFrame, AliasHistory};

/// In-memory storage for tests. Does NOT persist data.
///
/// Keeps the serialized form so loads go through the same JSON path as the
/// file store, and counts writes so callers can assert a store was untouched.
#[derive(Default)]
pub struct InMemoryStore {
    data: Option<String>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `history`.
    pub fn with_history(history: &AliasHistory) -> Self {
        Self {
            data: serde_json::to_string(history).ok(),
            ..Self::default()
        }
    }

    /// Store holding arbitrary raw content, e.g. a corrupt file.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            data: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Every `save` fails with an IO error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl AliasStorage for InMemoryStore {
    fn load(&self) -> Result<Vec<AliasFrame>> {
        match &self.data {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, history: &AliasHistory) -> Result<()> {
        if self.fail_saves {
            return Err(WrkError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.data = Some(serde_json::to_string(history)?);
        self.saves += 1;
        Ok(())
    }
}
