//! `gosmith work` command

use std::path::Path;

use anyhow::Result;

use super::{status, target_dir};
use crate::cli::WorkArgs;
use gosmith::core::workspace::AssembleOutcome;
use gosmith::ops::{generate_workspace, WorkOptions};
use gosmith::util::config::load_config;
use gosmith::util::SystemRunner;

pub fn execute(args: WorkArgs, config_path: Option<&Path>) -> Result<()> {
    let path = target_dir(args.path)?;
    let config = load_config(&path, config_path)?;

    let opts = WorkOptions {
        path,
        no_git: args.no_git,
        no_code: args.no_code,
    };

    let report = generate_workspace(&opts, &config, &mut SystemRunner)?;

    match &report.outcome {
        AssembleOutcome::Assembled {
            modules,
            descriptor,
            ..
        } => status(
            "Created",
            format!("`{}` with {} module(s)", descriptor.display(), modules),
        ),
        AssembleOutcome::NothingToAssemble => status(
            "Skipped",
            "no subfolders with go.mod found, no go.work created",
        ),
    }

    if let Some(count) = report.submodules {
        status(
            "Committed",
            format!("initial commit with {} submodule(s)", count),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::WorkArgs;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse_work_args(args: &[&str]) -> WorkArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            work: WorkArgs,
        }
        TestCli::parse_from(args).work
    }

    #[test]
    fn test_work_args_defaults() {
        let args = parse_work_args(&["test"]);

        assert!(args.path.is_none());
        assert!(!args.no_git);
        assert!(!args.no_code);
    }

    #[test]
    fn test_work_args_all_flags() {
        let args = parse_work_args(&["test", "--path", "/ws", "--no-git", "--no-code"]);

        assert_eq!(args.path, Some(PathBuf::from("/ws")));
        assert!(args.no_git);
        assert!(args.no_code);
    }
}
