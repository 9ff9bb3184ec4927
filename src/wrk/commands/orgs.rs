use super::helpers::listed_result;
use super::{CmdResult, IdCommand};
use crate::error::Result;
use crate::history::AliasHistory;
use crate::model::Organization;
use crate::remote::{fetch, Method, RemoteClient};

/// Lists the organizations the current member belongs to.
pub struct Orgs;

impl IdCommand for Orgs {
    const NAME: &'static str = "orgs";
    const USAGE: &'static str = "wrk orgs\n    List your organizations.";

    fn parse(args: &[String], _history: &AliasHistory) -> Result<Option<Self>> {
        Ok(args.is_empty().then_some(Orgs))
    }

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult> {
        let orgs: Vec<Organization> = fetch(
            client,
            Method::Get,
            "members/me/organizations",
            &[("fields", "name,displayName")],
        )?;
        Ok(listed_result(&orgs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::mock::RecordingClient;
    use serde_json::json;

    #[test]
    fn rejects_arguments() {
        let parsed = Orgs::parse(&["x".to_string()], &AliasHistory::new()).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn lists_orgs_with_display_names() {
        let client = RecordingClient::new().respond(
            Method::Get,
            "members/me/organizations",
            json!([{"id": "o1", "name": "acme", "displayName": "Acme Inc"}]),
        );
        let result = Orgs.execute(&client).unwrap();

        assert_eq!(result.listed[0].label, "Acme Inc");
        assert_eq!(result.wrk_ids.raw("wrk1"), Some("o:o1"));
    }

    #[test]
    fn empty_listing_mints_nothing() {
        let client = RecordingClient::new();
        let result = Orgs.execute(&client).unwrap();
        assert!(result.wrk_ids.is_empty());
        assert_eq!(result.messages[0].content, "No orgs found.");
    }
}
