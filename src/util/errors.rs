//! Error types shared across gosmith operations.
//!
//! Library operations return `anyhow::Result` and wrap these variants with
//! step context, so the binary can print the whole chain with `{:#}`.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Suggestion lines appended to errors the user can act on.
pub mod suggestions {
    /// The Go toolchain could not be started.
    pub const GO_MISSING: &str = "help: Install Go and make sure `go` is on PATH, or set `tools.go`";

    /// Git could not be started.
    pub const GIT_MISSING: &str =
        "help: Install Git and make sure `git` is on PATH, or pass `--no-git`";

    /// The editor could not be started.
    pub const EDITOR_MISSING: &str = "help: Pass `--no-code` to skip opening the editor";
}

/// Errors raised by gosmith operations.
#[derive(Debug, Error)]
pub enum GosmithError {
    /// A walk, stat, read or write on the filesystem failed.
    #[error("filesystem error at `{}`", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A child process could not be started.
    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process ran but exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    ExternalTool { command: String, status: ExitStatus },

    /// One or more nested checkouts could not be registered as submodules.
    #[error("failed to register {} submodule(s): {}", failures.len(), format_failures(failures))]
    SubmoduleRegistration { failures: Vec<(PathBuf, String)> },

    /// A module name that Go would reject, or that would produce odd paths.
    #[error("invalid module name `{name}`: {reason}")]
    InvalidModuleName { name: String, reason: &'static str },

    /// An explicitly requested configuration file could not be used.
    #[error("invalid config `{}`: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl GosmithError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GosmithError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from an external process.
    pub fn is_external_tool(&self) -> bool {
        matches!(
            self,
            GosmithError::Spawn { .. }
                | GosmithError::ExternalTool { .. }
                | GosmithError::SubmoduleRegistration { .. }
        )
    }

    /// A hint for errors caused by a missing tool.
    pub fn suggestion(&self) -> Option<&'static str> {
        let GosmithError::Spawn { command, .. } = self else {
            return None;
        };
        let program = command.split_whitespace().next().unwrap_or_default();
        let stem = std::path::Path::new(program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(program);

        match stem {
            "go" => Some(suggestions::GO_MISSING),
            "git" => Some(suggestions::GIT_MISSING),
            "bash" | "cmd" => Some(suggestions::EDITOR_MISSING),
            _ => None,
        }
    }
}

fn format_failures(failures: &[(PathBuf, String)]) -> String {
    failures
        .iter()
        .map(|(path, reason)| format!("{} ({})", path.display(), reason))
        .collect::<Vec<_>>()
        .join(", ")
}
