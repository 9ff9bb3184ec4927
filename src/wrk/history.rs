//! # Alias History
//!
//! Every command that discovers Trello objects hands back a *frame*: the set of
//! aliases it just minted. Frames stack up most-recent-first, and only the head
//! frame is consulted when resolving user input, so `wrk1` always means "the
//! first thing the last listing showed".
//!
//! Older frames are kept so that [`AliasHistory::pop`] can step back to an
//! earlier listing. The stack is bounded to [`MAX_FRAMES`]; pushing onto a full
//! stack evicts the oldest frame.
//!
//! On disk the history is a JSON array of flat objects:
//!
//! ```text
//! [
//!   { "wrk1": "c:5f2b...", "wrk2": "c:5f2c..." },
//!   { "wrk1": "b:4e11..." }
//! ]
//! ```

use crate::error::{Result, WrkError};
use crate::model::{KindSet, ResolvedId, WrkId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

pub const MAX_FRAMES: usize = 50;

/// One generation of aliases, token to prefixed id.
///
/// Values are kept as stored text and only parsed when looked up, so one
/// unreadable entry cannot take the rest of the history down with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasFrame(BTreeMap<String, String>);

impl AliasFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value behind `token`, readable or not.
    pub fn raw(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token and stored value pairs, in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>> FromIterator<(K, WrkId)> for AliasFrame {
    fn from_iter<T: IntoIterator<Item = (K, WrkId)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.prefixed()))
                .collect(),
        )
    }
}

/// Bounded stack of frames, head first.
///
/// Only `Serialize` is derived; loading goes through [`AliasHistory::from_frames`]
/// so the bound holds for whatever is on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasHistory {
    frames: VecDeque<AliasFrame>,
}

impl AliasHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from head-first frames, dropping anything past the bound.
    pub fn from_frames(frames: impl IntoIterator<Item = AliasFrame>) -> Self {
        let mut frames: VecDeque<AliasFrame> = frames.into_iter().collect();
        frames.truncate(MAX_FRAMES);
        Self { frames }
    }

    pub fn head(&self) -> Option<&AliasFrame> {
        self.frames.front()
    }

    pub fn frames(&self) -> impl Iterator<Item = &AliasFrame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes `frame` as the new head, evicting the oldest frame when full.
    /// Empty frames are ignored; returns whether the history changed.
    pub fn push(&mut self, frame: AliasFrame) -> bool {
        if frame.is_empty() {
            return false;
        }
        if self.frames.len() >= MAX_FRAMES {
            self.frames.pop_back();
        }
        self.frames.push_front(frame);
        true
    }

    /// Removes up to `times` frames from the head; returns how many went.
    pub fn pop(&mut self, times: usize) -> usize {
        let removed = times.min(self.frames.len());
        self.frames.drain(..removed);
        removed
    }

    /// Resolves user input against the head frame.
    ///
    /// Tokens that are not aliases pass through as raw ids. An alias of a kind
    /// outside `accepted` is a [`WrkError::TypeMismatch`]; an alias whose stored
    /// value cannot be read is a [`WrkError::UnreadableWrkId`].
    pub fn resolve(&self, token: &str, accepted: KindSet) -> Result<ResolvedId> {
        let Some(stored) = self.head().and_then(|frame| frame.raw(token)) else {
            return Ok(ResolvedId::raw(token));
        };
        let Ok(target) = stored.parse::<WrkId>() else {
            return Err(WrkError::UnreadableWrkId {
                token: token.to_string(),
                value: stored.to_string(),
                expected: accepted,
            });
        };
        if !accepted.contains(target.kind) {
            return Err(WrkError::TypeMismatch {
                token: token.to_string(),
                found: target.kind,
                expected: accepted,
            });
        }
        Ok(target.into())
    }
}
