//! # Command Layer
//!
//! Each entity command lives in its own module and implements [`IdCommand`]:
//!
//! - `parse` checks the argument shape and resolves wrk-ids against the head
//!   frame. `Ok(None)` means the shape is wrong; errors are type mismatches or
//!   rejected text.
//! - `execute` performs exactly one remote operation and returns a
//!   [`CmdResult`] whose `wrk_ids` frame holds any aliases it minted.
//!
//! [`run`] is the shared driver. It never lets a command reach the network with
//! bad arguments, and it commits the minted aliases once the remote work is
//! done. Commands do no terminal I/O and never exit the process.

use crate::aliases::AliasStore;
use crate::error::{Result, WrkError};
use crate::history::{AliasFrame, AliasHistory};
use crate::model::WrkId;
use crate::remote::RemoteClient;
use crate::store::AliasStorage;

pub mod assign;
pub mod boards;
pub mod cards;
pub mod close;
pub mod comment;
pub mod create;
pub mod desc;
pub mod helpers;
pub mod ids;
pub mod lists;
pub mod members;
pub mod orgs;
pub mod pop;
pub mod unassign;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a listing: the alias minted for an object and what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub token: String,
    pub target: WrkId,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Listing>,
    pub wrk_ids: AliasFrame,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<Listing>) -> Self {
        self.wrk_ids = listed
            .iter()
            .map(|l| (l.token.clone(), l.target.clone()))
            .collect();
        self.listed = listed;
        self
    }
}

pub trait IdCommand: Sized {
    const NAME: &'static str;
    const USAGE: &'static str;

    fn parse(args: &[String], history: &AliasHistory) -> Result<Option<Self>>;

    fn execute<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<CmdResult>;
}

/// Validate, execute, then remember whatever the command minted.
///
/// A failed alias write does not fail the command: the remote change already
/// happened, so it is reported alongside the command's own messages.
pub fn run<Cmd, S, C>(aliases: &mut AliasStore<S>, client: &C, args: &[String]) -> Result<CmdResult>
where
    Cmd: IdCommand,
    S: AliasStorage,
    C: RemoteClient + ?Sized,
{
    let Some(command) = Cmd::parse(args, aliases.history())? else {
        tracing::debug!(command = Cmd::NAME, ?args, "rejected argument shape");
        return Err(WrkError::InvalidArgs {
            command: Cmd::NAME,
            args: args.join(" "),
            usage: Cmd::USAGE,
        });
    };

    let mut result = command.execute(client)?;

    if let Err(e) = aliases.commit(result.wrk_ids.clone()) {
        tracing::warn!(error = %e, "could not save wrk-ids");
        result.add_message(CmdMessage::error(format!("Could not save wrk-ids: {}", e)));
    }
    Ok(result)
}
