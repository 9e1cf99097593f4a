mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::cli::{Arguments, CliCommand, HELP};
use crate::config::Config;
use crate::game::Game;
use crate::logging::LogSettings;
use anyhow::Context;
use log::info;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match CliCommand::from_parser(lexopt::Parser::from_env()) {
        Ok(CliCommand::Run(args)) => report(run(args)),
        Ok(CliCommand::Help) => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rocksnake: {e}");
            eprintln!("Run `rocksnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(settings) = LogSettings::resolve(args.log_file, args.log_level, &config.logging) {
        settings
            .install()
            .with_context(|| format!("failed to set up logging to {}", settings.file.display()))?;
    }
    info!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let terminal = ratatui::init();
    let r = App::new(Game::new(rand::rng())).run(terminal);
    ratatui::restore();
    r.map_err(Into::into)
}

fn report(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rocksnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
