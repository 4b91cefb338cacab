// Entrypoint for the CLI application.
// - Keeps `main` small: parse the argument, wire the host capabilities
//   together and run one sync.
// - Every outcome of the flow itself lands on the status line; the exit
//   code tells scripts whether the upload was accepted.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use botvs_push::api::ApiClient;
use botvs_push::sync::sync_active_script;
use botvs_push::ui::{self, FileWorkspace, TermStatus};

#[derive(Parser, Debug)]
#[command(name = "botvs-push", version)]
#[command(about = "Push the open botvs strategy script to the platform")]
struct Cli {
    /// Script file to push. Prompted for when omitted on a terminal.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let api = ApiClient::from_env()?;
    let path = ui::resolve_script_path(cli.script)?;
    let workspace = FileWorkspace::new(path);

    let mut status = TermStatus::new();
    status.busy("syncing script ...");
    let accepted = sync_active_script(&workspace, &api, &mut status);
    status.close();
    Ok(accepted)
}
