use super::helpers::listed_result;
use super::{CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{KindSet, List, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};

/// Lists the open lists of a board.
pub struct Lists {
    board: ResolvedId,
}

impl IdCommand for Lists {
    const NAME: &'static str = "lists";
    const USAGE: &'static str = "wrk lists in <board>\n    List the lists of a board.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        match args {
            [kw, board] if kw == "in" => Ok(Some(Lists {
                board: history.resolve(board, KindSet::BOARDS)?,
            })),
            _ => Ok(None),
        }
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let lists: Vec<List> = fetch(
            client,
            Method::Get,
            &format!("boards/{}/lists", self.board.id),
            &[("filter", "open")],
        )?;
        Ok(listed_result(&lists))
    }
}
