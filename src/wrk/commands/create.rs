use super::helpers::{
    join_words, listed_result, validate_text, CheckedText, BOARD_NAME, CARD_NAME, LIST_NAME,
};
use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{Board, Card, Entity, KindSet, List, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};
use serde::de::DeserializeOwned;

enum Target {
    Board,
    List { board: ResolvedId },
    Card { list: ResolvedId },
}

/// Creates a board, a list on a board, or a card on a list, and remembers the
/// new object as `wrk1`.
pub struct Create {
    target: Target,
    name: CheckedText,
}

impl IdCommand for Create {
    const NAME: &'static str = "create";
    const USAGE: &'static str = "wrk create board <name...>\n    Create a board.\n\
wrk create list in <board> <name...>\n    Create a list on a board.\n\
wrk create card in <list> <name...>\n    Create a card on a list.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        let (target, words, field) = match args {
            [kind, words @ ..] if kind == "board" => (Target::Board, words, BOARD_NAME),
            [kind, kw, board, words @ ..] if kind == "list" && kw == "in" => (
                Target::List {
                    board: history.resolve(board, KindSet::BOARDS)?,
                },
                words,
                LIST_NAME,
            ),
            [kind, kw, list, words @ ..] if kind == "card" && kw == "in" => (
                Target::Card {
                    list: history.resolve(list, KindSet::LISTS)?,
                },
                words,
                CARD_NAME,
            ),
            _ => return Ok(None),
        };
        let name = validate_text(&join_words(words), field, true)?;
        Ok(Some(Create { target, name }))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let name = self.name.value.as_str();
        match &self.target {
            Target::Board => created::<Board, _>(client, "boards", &[("name", name)]),
            Target::List { board } => created::<List, _>(
                client,
                "lists",
                &[("name", name), ("idBoard", board.id.as_str())],
            ),
            Target::Card { list } => created::<Card, _>(
                client,
                "cards",
                &[("name", name), ("idList", list.id.as_str())],
            ),
        }
    }
}

fn created<E, C>(client: &C, path: &str, params: &[(&str, &str)]) -> Result<CmdResult>
where
    E: Entity + DeserializeOwned,
    C: RemoteClient + ?Sized,
{
    let entity: E = fetch(client, Method::Post, path, params)?;
    let noun = E::KIND.plural().trim_end_matches('s');
    Ok(listed_result(&[entity]).with_message(CmdMessage::success(format!("Created {}.", noun))))
}
