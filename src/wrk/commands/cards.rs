use super::helpers::listed_result;
use super::{CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{Card, EntityKind, KindSet, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};

/// Lists open cards: the member's own, or those on a board or list.
pub struct Cards {
    source: Option<ResolvedId>,
}

impl IdCommand for Cards {
    const NAME: &'static str = "cards";
    const USAGE: &'static str = "wrk cards\n    List cards assigned to you.\n\
wrk cards in <board|list>\n    List the cards of a board or list.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        let source = match args {
            [] => None,
            [kw, source] if kw == "in" => Some(history.resolve(source, KindSet::BOARDS_LISTS)?),
            _ => return Ok(None),
        };
        Ok(Some(Cards { source }))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let path = match &self.source {
            Some(source) => format!(
                "{}/{}/cards",
                source.kind_or(EntityKind::Board).api_segment(),
                source.id
            ),
            None => "members/me/cards".to_string(),
        };
        let cards: Vec<Card> = fetch(
            client,
            Method::Get,
            &path,
            &[("filter", "open"), ("fields", "name,desc,closed,url")],
        )?;
        Ok(listed_result(&cards))
    }
}
