//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UIs.
//! [`WrkApi`] owns the alias store and the remote client for one invocation
//! and hands each call to the matching command through [`commands::run`],
//! which is where validation and alias commits happen.
//!
//! It is generic over both collaborators:
//! - Production: `WrkApi<FileStore, HttpClient>`
//! - Testing: `WrkApi<InMemoryStore, RecordingClient>`
//!
//! Nothing here prints or exits; results and errors go back to the caller.

use crate::aliases::AliasStore;
use crate::commands;
use crate::error::Result;
use crate::history::AliasHistory;
use crate::remote::RemoteClient;
use crate::store::AliasStorage;

pub struct WrkApi<S: AliasStorage, C: RemoteClient> {
    aliases: AliasStore<S>,
    client: C,
}

impl<S: AliasStorage, C: RemoteClient> WrkApi<S, C> {
    pub fn new(storage: S, client: C) -> Self {
        Self {
            aliases: AliasStore::load(storage),
            client,
        }
    }

    /// Set when the alias file existed but could not be read.
    pub fn load_warning(&self) -> Option<&str> {
        self.aliases.load_warning()
    }

    pub fn history(&self) -> &AliasHistory {
        self.aliases.history()
    }

    pub fn storage(&self) -> &S {
        self.aliases.storage()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn orgs(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::orgs::Orgs, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn boards(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::boards::Boards, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn lists(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::lists::Lists, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn cards(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::cards::Cards, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn members(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::members::Members, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn assign(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::assign::Assign, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn unassign(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::unassign::Unassign, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn comment(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::comment::Comment, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn desc(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::desc::Desc, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn create(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::create::Create, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn close(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::run::<commands::close::Close, _, _>(&mut self.aliases, &self.client, args)
    }

    pub fn pop(&mut self, args: &[String]) -> Result<CmdResult> {
        commands::pop::run(&mut self.aliases, args)
    }

    pub fn ids(&self) -> CmdResult {
        commands::ids::run(self.aliases.history())
    }
}

pub use crate::commands::{CmdMessage, CmdResult, Listing, MessageLevel};
