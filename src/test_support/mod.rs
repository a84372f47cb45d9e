//! Test utilities and mocks for gosmith unit tests.
//!
//! Provides a recording [`MockExecutor`] that stands in for `go`, `git` and
//! the editor script, plus fixtures for building directory trees.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{MockExecutor, MockOutcome, TreeFixture};
//!
//! let tree = TreeFixture::new().module("app1").module("ext/lib1").create();
//! let mut exec = MockExecutor::new();
//! exec.expect_prefix("go work init", MockOutcome::Success);
//! ```

pub mod fixtures;

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::{bail, Result};

use crate::util::errors::GosmithError;
use crate::util::process::{CommandRunner, ProcessBuilder};

pub use fixtures::*;

/// What a mocked command does when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Exit with status 0.
    Success,
    /// Exit with the given non-zero status.
    Failure(i32),
    /// Fail to spawn, as if the program was missing.
    SpawnError,
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command starts with prefix.
    StartsWith(String),
    /// Match if command ends with suffix.
    EndsWith(String),
    /// Match if command contains substring.
    Contains(String),
    /// Match any command.
    Any,
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::StartsWith(s) => cmd.starts_with(s),
            CommandPattern::EndsWith(s) => cmd.ends_with(s),
            CommandPattern::Contains(s) => cmd.contains(s),
            CommandPattern::Any => true,
        }
    }
}

/// A command the executor saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Full command line, program first.
    pub command: String,
    /// Working directory the command ran in.
    pub cwd: Option<PathBuf>,
}

type Hook = Box<dyn FnMut(&ProcessBuilder) -> Result<()>>;

/// Mock process executor for testing command execution.
///
/// Expectations are checked in the order they were added; the first one
/// matching the command decides the outcome. Unmatched commands succeed.
#[derive(Default)]
pub struct MockExecutor {
    expectations: Vec<(CommandPattern, MockOutcome)>,
    hooks: Vec<(CommandPattern, Hook)>,
    calls: Vec<RecordedCall>,
}

impl fmt::Debug for MockExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockExecutor")
            .field("expectations", &self.expectations)
            .field("hooks", &self.hooks.len())
            .field("calls", &self.calls)
            .finish()
    }
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&mut self, cmd: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations
            .push((CommandPattern::Exact(cmd.to_string()), outcome));
        self
    }

    /// Add an expectation for a command starting with a prefix.
    pub fn expect_prefix(&mut self, prefix: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations
            .push((CommandPattern::StartsWith(prefix.to_string()), outcome));
        self
    }

    /// Add an expectation for a command ending with a suffix.
    pub fn expect_suffix(&mut self, suffix: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations
            .push((CommandPattern::EndsWith(suffix.to_string()), outcome));
        self
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&mut self, substring: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations
            .push((CommandPattern::Contains(substring.to_string()), outcome));
        self
    }

    /// Run `hook` before every matching command, e.g. to simulate the
    /// files a tool would write or to inspect state at call time.
    pub fn on_run(
        &mut self,
        pattern: CommandPattern,
        hook: impl FnMut(&ProcessBuilder) -> Result<()> + 'static,
    ) -> &mut Self {
        self.hooks.push((pattern, Box::new(hook)));
        self
    }

    /// Get all commands that were called.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Get the command lines that were called.
    pub fn commands(&self) -> Vec<String> {
        self.calls.iter().map(|c| c.command.clone()).collect()
    }
}

impl CommandRunner for MockExecutor {
    fn run(&mut self, cmd: &ProcessBuilder) -> Result<()> {
        let command = cmd.display_command();
        self.calls.push(RecordedCall {
            command: command.clone(),
            cwd: cmd.get_cwd().map(|p| p.to_path_buf()),
        });

        for (pattern, hook) in &mut self.hooks {
            if pattern.matches(&command) {
                hook(cmd)?;
            }
        }

        let outcome = self
            .expectations
            .iter()
            .find(|(pattern, _)| pattern.matches(&command))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or(MockOutcome::Success);

        match outcome {
            MockOutcome::Success => Ok(()),
            MockOutcome::Failure(code) => Err(GosmithError::ExternalTool {
                command,
                status: exit_status(code),
            }
            .into()),
            MockOutcome::SpawnError => Err(GosmithError::Spawn {
                command,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock: not found"),
            }
            .into()),
        }
    }
}

/// Build an `ExitStatus` carrying `code`.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

/// Build an `ExitStatus` carrying `code`.
#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Assert that `calls` contains `expected` as an in-order subsequence.
pub fn assert_calls_in_order(calls: &[String], expected: &[&str]) -> Result<()> {
    let mut remaining = calls.iter();
    for want in expected {
        if !remaining.any(|c| c == want) {
            bail!("expected `{}` (in order) among calls {:?}", want, calls);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_executor_records_and_matches() {
        let mut exec = MockExecutor::new();
        exec.expect_prefix("git submodule add", MockOutcome::Failure(128));

        exec.run(&ProcessBuilder::new("git").arg("init").cwd("/ws"))
            .unwrap();
        let err = exec
            .run(&ProcessBuilder::new("git").args(["submodule", "add", "/ws/a", "a"]))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GosmithError>(),
            Some(GosmithError::ExternalTool { .. })
        ));
        assert_eq!(exec.calls().len(), 2);
        assert_eq!(exec.calls()[0].cwd, Some(PathBuf::from("/ws")));
    }

    #[test]
    fn test_exit_status_code() {
        assert_eq!(exit_status(3).code(), Some(3));
        assert!(!exit_status(1).success());
    }

    #[test]
    fn test_assert_calls_in_order() {
        let calls = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(assert_calls_in_order(&calls, &["a", "c"]).is_ok());
        assert!(assert_calls_in_order(&calls, &["c", "a"]).is_err());
    }
}
