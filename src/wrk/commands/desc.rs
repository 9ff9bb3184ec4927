use super::helpers::{join_words, validate_text, CheckedText, DESCRIPTION};
use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{KindSet, ResolvedId};
use crate::remote::{Method, RemoteClient};

/// Replaces a card's description.
pub struct Desc {
    card: ResolvedId,
    text: CheckedText,
}

impl IdCommand for Desc {
    const NAME: &'static str = "desc";
    const USAGE: &'static str = "wrk desc <card> <text...>\n    Set the description of a card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        let Some((card, words)) = args.split_first() else {
            return Ok(None);
        };
        let card = history.resolve(card, KindSet::CARDS)?;
        let text = validate_text(&join_words(words), DESCRIPTION, false)?;
        Ok(Some(Desc { card, text }))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if let Some(warning) = &self.text.warning {
            result.add_message(warning.clone());
        }
        result.add_message(CmdMessage::info(format!(
            "Describing card {}:",
            self.card.id
        )));
        client.call(
            Method::Put,
            &format!("cards/{}/desc", self.card.id),
            &[("value", self.text.value.as_str())],
        )?;
        result.add_message(CmdMessage::success("  Described!"));
        Ok(result)
    }
}
