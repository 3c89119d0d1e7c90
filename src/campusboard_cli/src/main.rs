mod cli;
mod commands;
mod telemetry;

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    cli::Cli,
    commands::{App, load_settings, run},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_level())?;

    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, "Loaded configuration");

    let app = App::from_settings(settings)?;
    run(&app, cli.command).await
}
