//! Distributor Portal CLI

use std::process::ExitCode;

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    portal_app::config::load_dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        return ExitCode::from(error.exit_status());
    }

    ExitCode::SUCCESS
}
