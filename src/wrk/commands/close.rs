use super::{CmdMessage, CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::{EntityKind, KindSet, ResolvedId};
use crate::remote::{Method, RemoteClient};

/// Archives a board, list or card.
pub struct Close {
    target: ResolvedId,
}

impl IdCommand for Close {
    const NAME: &'static str = "close";
    const USAGE: &'static str = "wrk close <board|list|card>\n    Close (archive) a board, list or card.";

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>> {
        match args {
            [target] => Ok(Some(Close {
                target: history.resolve(target, KindSet::BOARDS_LISTS_CARDS)?,
            })),
            _ => Ok(None),
        }
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let kind = self.target.kind_or(EntityKind::Card);
        let path = format!("{}/{}/closed", kind.api_segment(), self.target.id);
        client.call(Method::Put, &path, &[("value", "true")])?;
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Closed {}.",
            self.target.prefixed()
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::AliasFrame;
    use crate::model::WrkId;
    use crate::remote::mock::RecordingClient;

    #[test]
    fn closes_list_alias() {
        let frame: AliasFrame = [("wrk1", WrkId::new(EntityKind::List, "l1"))]
            .into_iter()
            .collect();
        let cmd = Close::parse(&["wrk1".to_string()], &AliasHistory::from_frames([frame]))
            .unwrap()
            .unwrap();
        let client = RecordingClient::new();

        let result = cmd.execute(&client).unwrap();

        let call = client.only_call();
        assert_eq!(call.path, "lists/l1/closed");
        assert_eq!(call.param("value"), Some("true"));
        assert_eq!(result.messages[0].content, "Closed l:l1.");
    }

    #[test]
    fn raw_id_closes_card() {
        let cmd = Close::parse(&["c9".to_string()], &AliasHistory::new())
            .unwrap()
            .unwrap();
        let client = RecordingClient::new();
        cmd.execute(&client).unwrap();
        assert_eq!(client.only_call().path, "cards/c9/closed");
    }

    #[test]
    fn member_alias_cannot_be_closed() {
        let frame: AliasFrame = [("bob", WrkId::new(EntityKind::Member, "m1"))]
            .into_iter()
            .collect();
        let parsed = Close::parse(&["bob".to_string()], &AliasHistory::from_frames([frame]));
        assert!(parsed.is_err());
    }
}
