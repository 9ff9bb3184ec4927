use clap::{Parser, Subcommand};

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("WRK_GIT_HASH");
    const IS_RELEASE: &str = env!("WRK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "wrk", bin_name = "wrk", version = get_version())]
#[command(about = "Trello from the command line, with short wrk-id aliases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Positional words handed to the command as-is; each command checks its own shape.
#[derive(clap::Args, Debug)]
pub struct Words {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your organizations
    #[command(display_order = 1)]
    Orgs(Words),

    /// List boards: `boards` or `boards in <org>`
    #[command(display_order = 2)]
    Boards(Words),

    /// List the lists of a board: `lists in <board>`
    #[command(display_order = 3)]
    Lists(Words),

    /// List cards: `cards` or `cards in <board|list>`
    #[command(display_order = 4)]
    Cards(Words),

    /// List members: `members in <org|board|card>`
    #[command(display_order = 5)]
    Members(Words),

    /// Assign to a card: `assign <card>` or `assign <member> to <card>`
    #[command(display_order = 10)]
    Assign(Words),

    /// Unassign from a card: `unassign <card>` or `unassign <member> from <card>`
    #[command(display_order = 11)]
    Unassign(Words),

    /// Comment on a card: `comment <card> <text...>`
    #[command(display_order = 12)]
    Comment(Words),

    /// Set a card description: `desc <card> <text...>`
    #[command(display_order = 13)]
    Desc(Words),

    /// Create a board, list or card
    #[command(alias = "new", display_order = 14)]
    Create(Words),

    /// Close a board, list or card: `close <board|list|card>`
    #[command(display_order = 15)]
    Close(Words),

    /// Show the current wrk-ids
    #[command(display_order = 20)]
    Ids(Words),

    /// Forget the last n sets of wrk-ids: `pop [n]`
    #[command(display_order = 21)]
    Pop(Words),
}
