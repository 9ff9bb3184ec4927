use super::helpers::listed_result;
use super::{CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{EntityKind, KindSet, Member, ResolvedId};
use crate::remote::{fetch, Method, RemoteClient};

/// Lists the members of an organization, board or card.
pub struct Members {
    source: ResolvedId,
}

impl IdCommand for Members {
    const NAME: &'static str = "members";
    const USAGE: &'static str =
        "wrk members in <org|board|card>\n    List the members of an organization, board or card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        match args {
            [kw, source] if kw == "in" => Ok(Some(Members {
                source: history.resolve(source, KindSet::ORGS_BOARDS_CARDS)?,
            })),
            _ => Ok(None),
        }
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let path = format!(
            "{}/{}/members",
            self.source.kind_or(EntityKind::Board).api_segment(),
            self.source.id
        );
        let members: Vec<Member> = fetch(
            client,
            Method::Get,
            &path,
            &[("fields", "username,fullName")],
        )?;
        Ok(listed_result(&members))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::AliasFrame;
    use crate::model::WrkId;
    use crate::remote::mock::RecordingClient;
    use serde_json::json;

    #[test]
    fn members_of_org_alias() {
        let frame: AliasFrame = [("acme", WrkId::new(EntityKind::Org, "o1"))]
            .into_iter()
            .collect();
        let args = vec!["in".to_string(), "acme".to_string()];
        let cmd = Members::parse(&args, &AliasHistory::from_frames([frame]))
            .unwrap()
            .unwrap();
        let client = RecordingClient::new().respond(
            Method::Get,
            "organizations/o1/members",
            json!([{"id": "m1", "username": "ann", "fullName": ""}]),
        );

        let result = cmd.execute(&client).unwrap();

        assert_eq!(result.listed[0].label, "ann");
        assert_eq!(result.wrk_ids.raw("wrk1"), Some("m:m1"));
    }

    #[test]
    fn list_alias_is_rejected() {
        let frame: AliasFrame = [("wrk1", WrkId::new(EntityKind::List, "l1"))]
            .into_iter()
            .collect();
        let args = vec!["in".to_string(), "wrk1".to_string()];
        let err = Members::parse(&args, &AliasHistory::from_frames([frame]))
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "The wrk-id [ wrk1 ] is for lists but the command is for [ orgs, boards, cards ]."
        );
    }
}
