use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{KindSet, ResolvedId};
use crate::remote::{Method, RemoteClient};
use serde_json::Value;

/// Removes a member (yourself by default) from a card.
pub struct Unassign {
    card: ResolvedId,
    member: Option<ResolvedId>,
}

impl IdCommand for Unassign {
    const NAME: &'static str = "unassign";
    const USAGE: &'static str = "wrk unassign <card>\n    Remove yourself from a card.\n\
wrk unassign <member> from <card>\n    Remove a member from a card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        match args {
            [card] => Ok(Some(Unassign {
                card: history.resolve(card, KindSet::CARDS)?,
                member: None,
            })),
            [member, kw, card] if kw == "from" => {
                let card = history.resolve(card, KindSet::CARDS)?;
                let member = history.resolve(member, KindSet::MEMBERS)?;
                Ok(Some(Unassign {
                    card,
                    member: Some(member),
                }))
            }
            _ => Ok(None),
        }
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let member_id = match &self.member {
            Some(member) => {
                result.add_message(CmdMessage::info(format!(
                    "Un-assigning user {} from card {}:",
                    member.id, self.card.id
                )));
                member.id.clone()
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "Un-assigning user from card {}:",
                    self.card.id
                )));
                client.my_member_id()?
            }
        };

        let path = format!("cards/{}/members/{}", self.card.id, member_id);
        match client.call(Method::Delete, &path, &[])? {
            Value::Null => result.add_message(CmdMessage::error("  Not added or invalid user.")),
            _ => result.add_message(CmdMessage::success("  Un-assigned!")),
        }
        Ok(result)
    }
}
