//! Git repository initialization for generated folders.

use std::path::Path;

use anyhow::{Context, Result};

use crate::util::process::{CommandRunner, ProcessBuilder};

/// Run `git init` in `dir`.
pub fn init_repository(git: &str, dir: &Path, runner: &mut dyn CommandRunner) -> Result<()> {
    tracing::info!("Initializing Git repository...");
    runner
        .run(&ProcessBuilder::new(git).arg("init").cwd(dir))
        .context("error initializing Git repository")
}

/// Stage everything in `dir` and create a commit with `message`.
pub fn commit_all(
    git: &str,
    dir: &Path,
    message: &str,
    runner: &mut dyn CommandRunner,
) -> Result<()> {
    runner
        .run(&ProcessBuilder::new(git).args(["add", "."]).cwd(dir))
        .context("error adding files to git")?;

    runner
        .run(
            &ProcessBuilder::new(git)
                .args(["commit", "-m"])
                .arg(message)
                .cwd(dir),
        )
        .context("error committing files to git")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockExecutor, MockOutcome};

    #[test]
    fn test_commit_all_adds_then_commits() {
        let mut exec = MockExecutor::new();

        commit_all("git", Path::new("/ws"), "init", &mut exec).unwrap();

        assert_eq!(exec.commands(), ["git add .", "git commit -m init"]);
        assert!(exec
            .calls()
            .iter()
            .all(|c| c.cwd.as_deref() == Some(Path::new("/ws"))));
    }

    #[test]
    fn test_commit_all_stops_when_add_fails() {
        let mut exec = MockExecutor::new();
        exec.expect("git add .", MockOutcome::Failure(128));

        let err = commit_all("git", Path::new("/ws"), "init", &mut exec).unwrap_err();

        assert_eq!(exec.commands(), ["git add ."]);
        assert!(format!("{:#}", err).contains("error adding files to git"));
    }

    #[test]
    fn test_init_repository_uses_configured_git() {
        let mut exec = MockExecutor::new();

        init_repository("/usr/local/bin/git", Path::new("/ws"), &mut exec).unwrap();

        assert_eq!(exec.commands(), ["/usr/local/bin/git init"]);
    }
}
