use super::helpers::listed_result;
use super::{CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{Board, KindSet, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};

/// Lists open boards, either the member's own or an organization's.
pub struct Boards {
    org: Option<ResolvedId>,
}

impl IdCommand for Boards {
    const NAME: &'static str = "boards";
    const USAGE: &'static str = "wrk boards\n    List your boards.\n\
wrk boards in <org>\n    List the boards of an organization.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        let org = match args {
            [] => None,
            [kw, org] if kw == "in" => Some(history.resolve(org, KindSet::ORGS)?),
            _ => return Ok(None),
        };
        Ok(Some(Boards { org }))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let path = match &self.org {
            Some(org) => format!("organizations/{}/boards", org.id),
            None => "members/me/boards".to_string(),
        };
        let boards: Vec<Board> = fetch(
            client,
            Method::Get,
            &path,
            &[("filter", "open"), ("fields", "name,closed,url")],
        )?;
        Ok(listed_result(&boards))
    }
}
