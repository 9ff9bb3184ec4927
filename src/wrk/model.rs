//! # Core Types
//!
//! Trello identifiers are long opaque hex strings. wrk lets users refer to them
//! through short aliases ("wrk-ids"), and every alias remembers which kind of
//! object it points at so a card alias can never be handed to a board command.
//!
//! - [`EntityKind`]: the closed set of object kinds, each with a two-character
//!   on-disk prefix (`o:`, `b:`, `l:`, `c:`, `m:`).
//! - [`WrkId`]: an alias target, kind plus raw id. Written to and parsed
//!   from the prefixed string (`"c:5f2b..."`) kept in the alias file.
//! - [`ResolvedId`]: the outcome of resolving user input. `kind` is `None`
//!   when the input was not an alias and is taken to be a raw Trello id.
//! - [`KindSet`]: which kinds a command argument accepts.
//!
//! The remote entity records at the bottom mirror the subset of Trello's JSON
//! that wrk displays.

use crate::error::WrkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Org,
    Board,
    List,
    Card,
    Member,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Org,
        EntityKind::Board,
        EntityKind::List,
        EntityKind::Card,
        EntityKind::Member,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Org => "o:",
            EntityKind::Board => "b:",
            EntityKind::List => "l:",
            EntityKind::Card => "c:",
            EntityKind::Member => "m:",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }

    /// Plural name used in diagnostics ("cards", "members", ...)
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Org => "orgs",
            EntityKind::Board => "boards",
            EntityKind::List => "lists",
            EntityKind::Card => "cards",
            EntityKind::Member => "members",
        }
    }

    /// Collection segment in Trello API paths.
    pub fn api_segment(&self) -> &'static str {
        match self {
            EntityKind::Org => "organizations",
            other => other.plural(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// An alias target: a Trello id tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrkId {
    pub kind: EntityKind,
    pub id: String,
}

impl WrkId {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn prefixed(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.id)
    }
}

impl FromStr for WrkId {
    type Err = WrkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s
            .get(..2)
            .and_then(EntityKind::from_prefix)
            .ok_or_else(|| WrkError::InvalidWrkId(s.to_string()))?;
        Ok(Self::new(kind, &s[2..]))
    }
}

impl fmt::Display for WrkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.id)
    }
}

/// A command argument after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedId {
    /// Raw Trello id, safe to put in a request path.
    pub id: String,
    /// `None` when the argument was not a known alias.
    pub kind: Option<EntityKind>,
}

impl ResolvedId {
    pub fn raw(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: None,
        }
    }

    pub fn prefixed(&self) -> String {
        match self.kind {
            Some(kind) => format!("{}{}", kind.prefix(), self.id),
            None => self.id.clone(),
        }
    }

    /// The resolved kind, or `fallback` for raw ids.
    pub fn kind_or(&self, fallback: EntityKind) -> EntityKind {
        self.kind.unwrap_or(fallback)
    }
}

impl From<WrkId> for ResolvedId {
    fn from(value: WrkId) -> Self {
        Self {
            id: value.id,
            kind: Some(value.kind),
        }
    }
}

/// The kinds a command argument will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet(&'static [EntityKind]);

impl KindSet {
    pub const ORGS: KindSet = KindSet(&[EntityKind::Org]);
    pub const BOARDS: KindSet = KindSet(&[EntityKind::Board]);
    pub const LISTS: KindSet = KindSet(&[EntityKind::List]);
    pub const CARDS: KindSet = KindSet(&[EntityKind::Card]);
    pub const MEMBERS: KindSet = KindSet(&[EntityKind::Member]);
    pub const BOARDS_LISTS: KindSet = KindSet(&[EntityKind::Board, EntityKind::List]);
    pub const BOARDS_LISTS_CARDS: KindSet =
        KindSet(&[EntityKind::Board, EntityKind::List, EntityKind::Card]);
    pub const ORGS_BOARDS_CARDS: KindSet =
        KindSet(&[EntityKind::Org, EntityKind::Board, EntityKind::Card]);

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &'static [EntityKind] {
        self.0
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|k| k.plural()).collect();
        write!(f, "[ {} ]", names.join(", "))
    }
}

// --- Remote records ---

/// Anything wrk lists and remembers an alias for.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
}

impl Entity for Organization {
    const KIND: EntityKind = EntityKind::Org;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl Entity for Board {
    const KIND: EntityKind = EntityKind::Board;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for List {
    const KIND: EntityKind = EntityKind::List;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Card {
    const KIND: EntityKind = EntityKind::Card;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Member {
    const KIND: EntityKind = EntityKind::Member;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        if self.full_name.is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_ids() {
        let id: WrkId = "c:abc123".parse().unwrap();
        assert_eq!(id, WrkId::new(EntityKind::Card, "abc123"));
        assert_eq!(id.prefixed(), "c:abc123");
    }

    #[test]
    fn rejects_unknown_or_short_prefixes() {
        assert!("x:abc".parse::<WrkId>().is_err());
        assert!("c".parse::<WrkId>().is_err());
        assert!("".parse::<WrkId>().is_err());
        // multibyte input must not panic on the prefix split
        assert!("é:abc".parse::<WrkId>().is_err());
    }

    #[test]
    fn prefix_alone_is_a_valid_id() {
        let id: WrkId = "c:".parse().unwrap();
        assert_eq!(id.kind, EntityKind::Card);
        assert_eq!(id.id, "");
        assert_eq!(id.prefixed(), "c:");
    }

    #[test]
    fn display_matches_stored_form() {
        let id = WrkId::new(EntityKind::Member, "999");
        assert_eq!(id.to_string(), "m:999");
        assert_eq!(id.to_string().parse::<WrkId>().unwrap(), id);
    }

    #[test]
    fn raw_resolved_id_keeps_input_verbatim() {
        let raw = ResolvedId::raw("4f0e9a");
        assert_eq!(raw.prefixed(), "4f0e9a");
        assert_eq!(raw.kind_or(EntityKind::Board), EntityKind::Board);
    }

    #[test]
    fn kind_set_display() {
        assert_eq!(KindSet::CARDS.to_string(), "[ cards ]");
        assert_eq!(KindSet::BOARDS_LISTS.to_string(), "[ boards, lists ]");
        assert!(KindSet::ORGS_BOARDS_CARDS.contains(EntityKind::Org));
        assert!(!KindSet::ORGS_BOARDS_CARDS.contains(EntityKind::List));
    }

    #[test]
    fn member_label_prefers_full_name() {
        let m: Member =
            serde_json::from_str(r#"{"id":"1","username":"bob","fullName":"Bob Smith"}"#).unwrap();
        assert_eq!(m.label(), "Bob Smith");
    }
}
