use crate::model::{EntityKind, KindSet};
use thiserror::Error;

/// Longest free-text value the remote API accepts.
pub const MAX_TEXT_LEN: usize = 16_384;

/// Exit status when a wrk-id names the wrong kind of object.
pub const EXIT_MISMATCH: i32 = 1;
/// Exit status for transport, remote, config and persistence failures.
pub const EXIT_FAILURE: i32 = 2;

#[derive(Error, Debug)]
pub enum WrkError {
    #[error("Invalid arguments to command {command}: {args}")]
    InvalidArgs {
        command: &'static str,
        args: String,
        usage: &'static str,
    },

    #[error("The wrk-id [ {token} ] is for {found} but the command is for {expected}.")]
    TypeMismatch {
        token: String,
        found: EntityKind,
        expected: KindSet,
    },

    #[error("The wrk-id [ {token} ] is for <unknown> ({value}) but the command is for {expected}.")]
    UnreadableWrkId {
        token: String,
        value: String,
        expected: KindSet,
    },

    #[error("{field} was empty, doing nothing.")]
    EmptyText { field: &'static str },

    #[error("Trello {plural} must be less than 16,384 characters, doing nothing.")]
    TextTooLong { plural: &'static str },

    #[error("Invalid wrk-id value: {0}")]
    InvalidWrkId(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Trello responded with {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl WrkError {
    /// Process status the CLI exits with for this error.
    ///
    /// Usage problems and empty input are deliberate no-ops and exit cleanly.
    /// A wrk-id of the wrong kind has its own status, apart from failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            WrkError::InvalidArgs { .. }
            | WrkError::EmptyText { .. }
            | WrkError::TextTooLong { .. } => 0,
            WrkError::TypeMismatch { .. } | WrkError::UnreadableWrkId { .. } => EXIT_MISMATCH,
            WrkError::InvalidWrkId(_)
            | WrkError::Http(_)
            | WrkError::Remote { .. }
            | WrkError::Io(_)
            | WrkError::Serialization(_)
            | WrkError::Config(_) => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, WrkError>;
