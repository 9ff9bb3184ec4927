//! Terminal front end: builds the API from the user's wrk home, runs one
//! command, prints the outcome and picks the exit status.

mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use print::{print_error, print_listing, print_messages, print_warning};
use tracing_subscriber::EnvFilter;
use wrk::api::{CmdResult, WrkApi};
use wrk::commands::ids;
use wrk::config::{wrk_home, WrkConfig};
use wrk::error::{Result, WrkError};
use wrk::remote::http::HttpClient;
use wrk::store::fs::FileStore;

/// Runs the CLI and returns the process exit status.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(cli.command) {
        Ok(result) => {
            print_listing(&result.listed);
            print_messages(&result.messages);
            0
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            print_error(&e);
            e.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "wrk=debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Commands that only read or rewind the alias history.
fn is_offline(command: &Commands) -> bool {
    matches!(command, Commands::Pop(_) | Commands::Ids(_))
}

fn execute(command: Commands) -> Result<CmdResult> {
    let home = wrk_home()?;
    // Offline commands never touch the client, so a broken config.json
    // must not stop them.
    let config = if is_offline(&command) {
        WrkConfig::default()
    } else {
        WrkConfig::load(&home)?.with_env_overrides()
    };
    let client = HttpClient::new(&config)?;
    let mut api = WrkApi::new(FileStore::new(&home), client);

    if let Some(warning) = api.load_warning() {
        print_warning(warning);
    }

    match command {
        Commands::Orgs(w) => api.orgs(&w.args),
        Commands::Boards(w) => api.boards(&w.args),
        Commands::Lists(w) => api.lists(&w.args),
        Commands::Cards(w) => api.cards(&w.args),
        Commands::Members(w) => api.members(&w.args),
        Commands::Assign(w) => api.assign(&w.args),
        Commands::Unassign(w) => api.unassign(&w.args),
        Commands::Comment(w) => api.comment(&w.args),
        Commands::Desc(w) => api.desc(&w.args),
        Commands::Create(w) => api.create(&w.args),
        Commands::Close(w) => api.close(&w.args),
        Commands::Pop(w) => api.pop(&w.args),
        Commands::Ids(w) if w.args.is_empty() => Ok(api.ids()),
        Commands::Ids(w) => Err(WrkError::InvalidArgs {
            command: "ids",
            args: w.args.join(" "),
            usage: ids::USAGE,
        }),
    }
}
