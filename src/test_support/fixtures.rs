//! Test fixtures for directory trees.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Contents written into fixture `go.mod` files.
pub fn go_mod(module_path: &str) -> String {
    format!("module {}\n\ngo 1.22\n", module_path)
}

/// Builder for a temporary directory tree with Go modules and checkouts.
#[derive(Debug, Clone, Default)]
pub struct TreeFixture {
    files: Vec<(PathBuf, String)>,
    dirs: Vec<PathBuf>,
}

impl TreeFixture {
    /// Create an empty tree fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module directory containing a `go.mod`.
    pub fn module(mut self, rel: impl AsRef<Path>) -> Self {
        let rel = rel.as_ref();
        let name = rel.to_string_lossy().replace('\\', "/");
        self.files
            .push((rel.join("go.mod"), go_mod(&format!("example.com/{}", name))));
        self
    }

    /// Add a `.git` directory under `rel`, making it a checkout.
    pub fn checkout(mut self, rel: impl AsRef<Path>) -> Self {
        let git_dir = rel.as_ref().join(".git");
        self.files.push((git_dir.join("HEAD"), "ref: refs/heads/main\n".to_string()));
        self
    }

    /// Add an arbitrary file.
    pub fn file(mut self, rel: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.files.push((rel.as_ref().to_path_buf(), contents.into()));
        self
    }

    /// Add an empty directory.
    pub fn dir(mut self, rel: impl AsRef<Path>) -> Self {
        self.dirs.push(rel.as_ref().to_path_buf());
        self
    }

    /// Write the tree under `base`.
    pub fn write_to(&self, base: &Path) -> std::io::Result<()> {
        for dir in &self.dirs {
            std::fs::create_dir_all(base.join(dir))?;
        }
        for (rel, contents) in &self.files {
            let path = base.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, contents)?;
        }
        Ok(())
    }

    /// Write the tree into a fresh temporary directory.
    pub fn create(&self) -> TempDir {
        let tmp = TempDir::new().expect("failed to create temp dir");
        self.write_to(tmp.path()).expect("failed to write fixture tree");
        tmp
    }
}
