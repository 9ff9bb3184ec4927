use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::{Result, WrkError, MAX_TEXT_LEN};
use crate::model::{Entity, WrkId};

/// A free-text value a command sends to Trello, named for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    pub name: &'static str,
    pub plural: &'static str,
}

pub const COMMENT: TextField = TextField {
    name: "Comment",
    plural: "comments",
};
pub const DESCRIPTION: TextField = TextField {
    name: "Description",
    plural: "descriptions",
};
pub const BOARD_NAME: TextField = TextField {
    name: "Board name",
    plural: "board names",
};
pub const LIST_NAME: TextField = TextField {
    name: "List name",
    plural: "list names",
};
pub const CARD_NAME: TextField = TextField {
    name: "Card name",
    plural: "card names",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedText {
    pub value: String,
    /// Set when the value was shortened to fit.
    pub warning: Option<CmdMessage>,
}

/// Checks text before it is sent anywhere.
///
/// Empty text is rejected. Text over [`MAX_TEXT_LEN`] characters is rejected
/// when `strict`, otherwise cut down with a warning.
pub fn validate_text(value: &str, field: TextField, strict: bool) -> Result<CheckedText> {
    if value.is_empty() {
        return Err(WrkError::EmptyText { field: field.name });
    }
    if value.chars().count() <= MAX_TEXT_LEN {
        return Ok(CheckedText {
            value: value.to_string(),
            warning: None,
        });
    }
    if strict {
        return Err(WrkError::TextTooLong {
            plural: field.plural,
        });
    }
    Ok(CheckedText {
        value: value.chars().take(MAX_TEXT_LEN).collect(),
        warning: Some(CmdMessage::warning(format!(
            "Trello {} must be less than 16,384 characters, shortening.",
            field.plural
        ))),
    })
}

/// Joins the free-text tail of an argument list.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}

/// Mints `wrk1`, `wrk2`, ... for entities in display order.
pub fn listings<E: Entity>(entities: &[E]) -> Vec<Listing> {
    entities
        .iter()
        .enumerate()
        .map(|(i, e)| Listing {
            token: format!("wrk{}", i + 1),
            target: WrkId::new(E::KIND, e.id()),
            label: e.label().to_string(),
        })
        .collect()
}

/// Result of a listing command: the rows plus the frame that remembers them.
pub fn listed_result<E: Entity>(entities: &[E]) -> CmdResult {
    if entities.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::info(format!("No {} found.", E::KIND.plural())));
    }
    CmdResult::default().with_listed(listings(entities))
}
