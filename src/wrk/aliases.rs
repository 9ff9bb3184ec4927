//! # Alias Store
//!
//! Ties an [`AliasHistory`] to its storage for the length of one command run:
//!
//! 1. [`AliasStore::load`] reads the history once. A missing file is an empty
//!    history; an unreadable one is also treated as empty, with a warning kept
//!    in [`AliasStore::load_warning`] for the CLI to show.
//! 2. [`AliasStore::resolve`] turns command arguments into ids using the head
//!    frame.
//! 3. [`AliasStore::commit`] pushes the aliases a command produced and writes
//!    the file, or does nothing at all if there were none.
//! 4. [`AliasStore::unwind`] drops head frames and always writes.

use crate::error::Result;
use crate::history::{AliasFrame, AliasHistory};
use crate::model::{KindSet, ResolvedId};
use crate::store::AliasStorage;

pub struct AliasStore<S: AliasStorage> {
    storage: S,
    history: AliasHistory,
    load_warning: Option<String>,
}

impl<S: AliasStorage> AliasStore<S> {
    pub fn load(storage: S) -> Self {
        let (history, load_warning) = match storage.load() {
            Ok(frames) => (AliasHistory::from_frames(frames), None),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable wrk-ids");
                (
                    AliasHistory::new(),
                    Some(format!("Ignoring unreadable wrk-ids ({}).", e)),
                )
            }
        };
        tracing::debug!(frames = history.len(), "loaded wrk-ids");
        Self {
            storage,
            history,
            load_warning,
        }
    }

    pub fn history(&self) -> &AliasHistory {
        &self.history
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn resolve(&self, token: &str, accepted: KindSet) -> Result<ResolvedId> {
        self.history.resolve(token, accepted)
    }

    /// Pushes `frame` as the newest generation and persists. Empty frames are
    /// dropped without writing. Returns whether anything was written.
    pub fn commit(&mut self, frame: AliasFrame) -> Result<bool> {
        if !self.history.push(frame) {
            return Ok(false);
        }
        self.storage.save(&self.history)?;
        Ok(true)
    }

    /// Drops up to `times` head frames and persists the result, even when
    /// nothing was dropped. Returns how many frames were removed.
    pub fn unwind(&mut self, times: usize) -> Result<usize> {
        let removed = self.history.pop(times);
        tracing::debug!(requested = times, removed, "unwinding wrk-ids");
        self.storage.save(&self.history)?;
        Ok(removed)
    }
}
