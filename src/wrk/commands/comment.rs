use super::helpers::{join_words, validate_text, CheckedText, COMMENT};
use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{KindSet, ResolvedId};
use crate::remote::{Method, RemoteClient};

/// Adds a comment to a card.
pub struct Comment {
    card: ResolvedId,
    text: CheckedText,
}

impl IdCommand for Comment {
    const NAME: &'static str = "comment";
    const USAGE: &'static str = "wrk comment <card> <text...>\n    Comment on a card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        let Some((card, words)) = args.split_first() else {
            return Ok(None);
        };
        let card = history.resolve(card, KindSet::CARDS)?;
        let text = validate_text(&join_words(words), COMMENT, false)?;
        Ok(Some(Comment { card, text }))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if let Some(warning) = &self.text.warning {
            result.add_message(warning.clone());
        }
        result.add_message(CmdMessage::info(format!(
            "Commenting on card {}:",
            self.card.id
        )));
        client.call(
            Method::Post,
            &format!("cards/{}/actions/comments", self.card.id),
            &[("text", self.text.value.as_str())],
        )?;
        result.add_message(CmdMessage::success("  Commented!"));
        Ok(result)
    }
}
