//! # wrk Architecture
//!
//! wrk is a command-line Trello client built around one idea: you should never
//! have to retype a 24-character Trello id. Every listing mints short aliases
//! (`wrk1`, `wrk2`, ...) for what it showed, and the next command can use them:
//!
//! ```text
//! $ wrk boards            # wrk1 = Roadmap, wrk2 = Ops
//! $ wrk lists in wrk1     # wrk1 = Todo, wrk2 = Doing, ...
//! $ wrk cards in wrk2
//! $ wrk assign wrk3
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, cli/)                               │
//! │  - Parses arguments, prints, owns the process exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - One method per command, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Argument shapes, alias resolution, one remote call each  │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                                │
//!                 ▼                                ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Aliases (aliases.rs,         │ │  Remote (remote/)         │
//! │  history.rs, store/)          │ │  - RemoteClient trait     │
//! │  - bounded frame history      │ │  - HttpClient, mock       │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Typed aliases
//!
//! An alias remembers what kind of object it names. Commands state which
//! kinds each argument accepts, so `wrk assign wrk1` fails up front when
//! `wrk1` is a board, before anything is sent to Trello. Input that is not a
//! known alias is passed through as a raw Trello id.
//!
//! ## No I/O assumptions below the CLI
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Type mismatches, usage errors and empty input come
//! back as [`error::WrkError`] values; the CLI decides how to show them and
//! which status to exit with.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: one module per command plus the shared driver
//! - [`aliases`]: load / resolve / commit / unwind for one run
//! - [`history`]: alias frames and the bounded history stack
//! - [`store`]: where the history is persisted
//! - [`remote`]: the Trello client abstraction
//! - [`model`]: entity kinds, typed ids, remote records
//! - [`config`]: credentials and paths
//! - [`error`]: error types

pub mod aliases;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod remote;
pub mod store;
