//! gosmith CLI - scaffolding for Go modules and workspaces

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gosmith::GosmithError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        let cause = e
            .chain()
            .find_map(|cause| cause.downcast_ref::<GosmithError>());
        if let Some(help) = cause.and_then(GosmithError::suggestion) {
            eprintln!("\n{}", help);
        } else if cause.is_some_and(GosmithError::is_external_tool) {
            eprintln!("\nhint: run `gosmith doctor` to check the configured tools");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("gosmith=debug")
    } else {
        EnvFilter::new("gosmith=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Work(args) => commands::work::execute(args, config),
        Commands::App(args) => commands::new::execute_app(args, config),
        Commands::Lib(args) => commands::new::execute_lib(args, config),
        Commands::Doctor(args) => commands::doctor::execute(args, config, cli.verbose),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
