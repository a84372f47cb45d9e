//! Command implementations

pub mod completions;
pub mod doctor;
pub mod new;
pub mod work;

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Print a cargo-style status line to stderr.
pub fn status(label: &str, message: impl Display) {
    eprintln!("{:>12} {}", label, message);
}

/// The folder a command operates on: `--path`, or the current directory.
pub fn target_dir(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("getting current working directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_dir_prefers_explicit_path() {
        let path = PathBuf::from("some/where");
        assert_eq!(target_dir(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_target_dir_defaults_to_cwd() {
        assert_eq!(
            target_dir(None).unwrap(),
            std::env::current_dir().unwrap()
        );
    }
}
