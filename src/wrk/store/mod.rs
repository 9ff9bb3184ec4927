//! # Storage Layer
//!
//! The alias history lives in a single file per user. [`AliasStorage`] hides
//! where and how, so the alias logic above it can be tested without touching
//! the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file (`~/.wrk/wrk-ids`)
//! - [`memory::InMemoryStore`]: test storage that counts writes
//!
//! ## Contract
//!
//! - `load` on a store that was never written returns no frames, not an error.
//! - `load` on unreadable data returns an error; deciding that this is
//!   survivable is the caller's job (see [`crate::aliases::AliasStore`]).
//! - `save` overwrites the whole history.

use crate::error::Result;
use crate::history::{AliasFrame, AliasHistory};

pub mod fs;
pub mod memory;

pub trait AliasStorage {
    /// Reads the persisted frames, head first.
    fn load(&self) -> Result<Vec<AliasFrame>>;

    /// Replaces the persisted history.
    fn save(&mut self, history: &AliasHistory) -> Result<()>;
}
