use super::{CmdMessage, CmdResult};
use crate::aliases::AliasStore;
use crate::error::{Result, WrkError};
use crate::store::AliasStorage;

pub const NAME: &str = "pop";
pub const USAGE: &str = "wrk pop [n]\n    Forget the last n sets of wrk-ids (default 1).";

/// Steps the alias history back by `n` frames.
///
/// A failed write is reported on the result like any other alias write.
pub fn run<S: AliasStorage>(aliases: &mut AliasStore<S>, args: &[String]) -> Result<CmdResult> {
    let times = match args {
        [] => 1,
        [n] => n.parse::<usize>().map_err(|_| invalid(args))?,
        _ => return Err(invalid(args)),
    };
    let removed = times.min(aliases.history().len());
    let saved = aliases.unwind(times);
    let remaining = aliases.history().len();

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Popped {} wrk-id set{}, {} remaining.",
        removed,
        if removed == 1 { "" } else { "s" },
        remaining
    )));
    if let Err(e) = saved {
        tracing::warn!(error = %e, "could not save wrk-ids");
        result.add_message(CmdMessage::error(format!("Could not save wrk-ids: {}", e)));
    }
    Ok(result)
}

fn invalid(args: &[String]) -> WrkError {
    WrkError::InvalidArgs {
        command: NAME,
        args: args.join(" "),
        usage: USAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{AliasFrame, AliasHistory};
    use crate::model::{EntityKind, WrkId};
    use crate::store::memory::InMemoryStore;

    fn store_with(frames: usize) -> AliasStore<InMemoryStore> {
        let history = AliasHistory::from_frames((0..frames).map(|n| {
            [("wrk1", WrkId::new(EntityKind::Board, format!("b{n}")))]
                .into_iter()
                .collect::<AliasFrame>()
        }));
        AliasStore::load(InMemoryStore::with_history(&history))
    }

    #[test]
    fn pops_one_by_default() {
        let mut aliases = store_with(3);
        let result = run(&mut aliases, &[]).unwrap();
        assert_eq!(aliases.history().len(), 2);
        assert_eq!(result.messages[0].content, "Popped 1 wrk-id set, 2 remaining.");
    }

    #[test]
    fn pops_no_more_than_exists() {
        let mut aliases = store_with(2);
        let result = run(&mut aliases, &["5".to_string()]).unwrap();
        assert!(aliases.history().is_empty());
        assert_eq!(result.messages[0].content, "Popped 2 wrk-id sets, 0 remaining.");
        assert_eq!(aliases.storage().save_count(), 1);
    }

    #[test]
    fn bad_count_is_invalid_and_writes_nothing() {
        let mut aliases = store_with(2);
        let err = run(&mut aliases, &["many".to_string()]).unwrap_err();
        assert!(matches!(err, WrkError::InvalidArgs { command: "pop", .. }));
        assert_eq!(aliases.storage().save_count(), 0);
    }

    #[test]
    fn failed_write_is_reported_not_fatal() {
        let history = AliasHistory::from_frames([[("wrk1", WrkId::new(EntityKind::List, "l1"))]
            .into_iter()
            .collect::<AliasFrame>()]);
        let mut aliases =
            AliasStore::load(InMemoryStore::with_history(&history).failing_saves());

        let result = run(&mut aliases, &[]).unwrap();

        assert_eq!(result.messages[0].content, "Popped 1 wrk-id set, 0 remaining.");
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, crate::commands::MessageLevel::Error);
        assert!(last.content.starts_with("Could not save wrk-ids"));
        assert_eq!(aliases.storage().save_count(), 0);
    }
}
