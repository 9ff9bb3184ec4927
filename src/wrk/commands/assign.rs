use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{KindSet, Member, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};

/// Adds a member (yourself by default) to a card.
pub struct Assign {
    card: ResolvedId,
    member: Option<ResolvedId>,
}

impl IdCommand for Assign {
    const NAME: &'static str = "assign";
    const USAGE: &'static str = "wrk assign <card>\n    Assign yourself to a card.\n\
wrk assign <member> to <card>\n    Assign a member to a card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        match args {
            [card] => Ok(Some(Assign {
                card: history.resolve(card, KindSet::CARDS)?,
                member: None,
            })),
            [member, kw, card] if kw == "to" => {
                let card = history.resolve(card, KindSet::CARDS)?;
                let member = history.resolve(member, KindSet::MEMBERS)?;
                Ok(Some(Assign {
                    card,
                    member: Some(member),
                }))
            }
            _ => Ok(None),
        }
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let member_id = match &self.member {
            Some(member) => member.id.clone(),
            None => client.my_member_id()?,
        };
        let mut result = CmdResult::default().with_message(CmdMessage::info(format!(
            "Assigning user {} to card {}:",
            member_id, self.card.id
        )));

        let members: Vec<Member> = fetch(
            client,
            Method::Post,
            &format!("cards/{}/members", self.card.id),
            &[("value", member_id.as_str())],
        )?;
        if members.iter().any(|m| m.id == member_id) {
            result.add_message(CmdMessage::success("  Assigned!"));
        } else {
            result.add_message(CmdMessage::error("  Not added or invalid user."));
        }
        Ok(result)
    }
}
