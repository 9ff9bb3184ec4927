use super::{CmdMessage, CmdResult, Listing};
use crate::history::AliasHistory;
use crate::model::WrkId;

pub const USAGE: &str = "wrk ids\n    Show the wrk-ids from the last listing.";

/// Shows the head frame without touching the network or the history.
pub fn run(history: &AliasHistory) -> CmdResult {
    let Some(head) = history.head().filter(|frame| !frame.is_empty()) else {
        return CmdResult::default().with_message(CmdMessage::info("No wrk-ids remembered."));
    };
    let mut result = CmdResult::default();
    let mut listed = Vec::new();
    for (token, stored) in head.iter() {
        match stored.parse::<WrkId>() {
            Ok(target) => listed.push(Listing {
                token: token.to_string(),
                label: target.kind.to_string(),
                target,
            }),
            Err(_) => result.add_message(CmdMessage::warning(format!(
                "Skipping {} with unreadable value {}.",
                token, stored
            ))),
        }
    }
    // wrk2 before wrk10
    listed.sort_by(|a, b| {
        (a.token.len(), a.token.as_str()).cmp(&(b.token.len(), b.token.as_str()))
    });
    result.listed = listed;
    result
}
