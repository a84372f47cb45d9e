//! Workspace discovery and assembly.
//!
//! A workspace is a directory tree holding several Go modules. The assembler
//! finds every `go.mod` below the root, regenerates the `go.work` descriptor
//! from scratch with `go work init`, and can register nested Git checkouts as
//! submodules of the root repository.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::util::config::Config;
use crate::util::errors::GosmithError;
use crate::util::fs::{absolute, relative_path, remove_file_if_exists, slash_path};
use crate::util::hash::sha256_file;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Marker file identifying a module directory.
pub const MODULE_MANIFEST: &str = "go.mod";

/// Workspace descriptor written by `go work init`.
pub const WORKSPACE_DESCRIPTOR: &str = "go.work";

/// Checksum side-file belonging to the descriptor.
pub const WORKSPACE_CHECKSUM: &str = "go.work.sum";

/// Version control metadata directory.
pub const VCS_METADATA_DIR: &str = ".git";

/// A module directory, relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleReference(PathBuf);

impl ModuleReference {
    /// Create a reference from a path relative to the root.
    ///
    /// The root itself is represented as `.`.
    pub fn new(relative: impl Into<PathBuf>) -> Self {
        let relative = relative.into();
        if relative.as_os_str().is_empty() {
            ModuleReference(PathBuf::from("."))
        } else {
            ModuleReference(relative)
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The reference as a `/`-separated command-line argument.
    pub fn to_arg(&self) -> OsString {
        slash_path(&self.0)
    }
}

impl fmt::Display for ModuleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_arg().to_string_lossy())
    }
}

/// The generated `go.work` file and its `go.work.sum` side-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceDescriptor {
    root: PathBuf,
}

impl WorkspaceDescriptor {
    /// The descriptor belonging to `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        WorkspaceDescriptor { root: root.into() }
    }

    /// Path of `go.work`.
    pub fn path(&self) -> PathBuf {
        self.root.join(WORKSPACE_DESCRIPTOR)
    }

    /// Path of `go.work.sum`.
    pub fn checksum_path(&self) -> PathBuf {
        self.root.join(WORKSPACE_CHECKSUM)
    }

    /// Check whether `go.work` exists.
    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Delete the descriptor and its side-file, returning the paths that
    /// were actually removed.
    pub fn remove(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in [self.path(), self.checksum_path()] {
            if remove_file_if_exists(&path)? {
                removed.push(path);
            }
        }
        Ok(removed)
    }
}

/// Result of [`WorkspaceAssembler::assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleOutcome {
    /// `go work init` ran over the given modules.
    Assembled {
        /// Number of modules linked into the workspace.
        modules: usize,
        /// Path of the regenerated descriptor.
        descriptor: PathBuf,
        /// SHA-256 of the descriptor, if the tool wrote one.
        digest: Option<String>,
    },
    /// No modules were found, so no descriptor was generated.
    NothingToAssemble,
}

/// A nested Git checkout strictly below the workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubRepository {
    /// Absolute path of the checkout.
    pub path: PathBuf,
    /// Path of the checkout relative to the root.
    pub relative: PathBuf,
}

/// Discovers modules below a root and links them into a Go workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceAssembler {
    root: PathBuf,
    go: String,
    git: String,
    submodule_fail_fast: bool,
}

impl WorkspaceAssembler {
    /// Create an assembler for `root` using `go` and `git` from PATH.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WorkspaceAssembler {
            root: root.into(),
            go: "go".to_string(),
            git: "git".to_string(),
            submodule_fail_fast: false,
        }
    }

    /// Create an assembler for `root` with tools and policy from `config`.
    pub fn from_config(root: impl Into<PathBuf>, config: &Config) -> Self {
        WorkspaceAssembler::new(root)
            .with_go(config.go())
            .with_git(config.git())
            .with_submodule_fail_fast(config.submodule_fail_fast())
    }

    /// Set the Go toolchain command.
    pub fn with_go(mut self, go: impl Into<String>) -> Self {
        self.go = go.into();
        self
    }

    /// Set the Git command.
    pub fn with_git(mut self, git: impl Into<String>) -> Self {
        self.git = git.into();
        self
    }

    /// Stop registering submodules after the first failure.
    pub fn with_submodule_fail_fast(mut self, fail_fast: bool) -> Self {
        self.submodule_fail_fast = fail_fast;
        self
    }

    /// Get the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the descriptor at the workspace root.
    pub fn descriptor(&self) -> WorkspaceDescriptor {
        WorkspaceDescriptor::at(&self.root)
    }

    /// Find every directory below the root that contains a `go.mod` file.
    ///
    /// Nothing is pruned: modules nested inside other modules (including
    /// `vendor/` trees) are reported as well. Siblings are visited in file
    /// name order. Any unreadable entry fails the whole walk.
    pub fn discover(&self) -> Result<Vec<ModuleReference>> {
        let mut modules = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| walk_error(&self.root, e))?;

            if !entry.file_type().is_file() || entry.file_name() != MODULE_MANIFEST {
                continue;
            }

            let dir = entry.path().parent().unwrap_or(&self.root);
            tracing::debug!("found {} in {}", MODULE_MANIFEST, dir.display());
            modules.push(ModuleReference::new(relative_path(&self.root, dir)));
        }

        Ok(modules)
    }

    /// Regenerate `go.work` from `references`.
    ///
    /// An existing descriptor and side-file are always deleted first; the
    /// descriptor is never patched. With no references nothing is generated
    /// and [`AssembleOutcome::NothingToAssemble`] is returned.
    pub fn assemble(
        &self,
        references: &[ModuleReference],
        runner: &mut dyn CommandRunner,
    ) -> Result<AssembleOutcome> {
        let descriptor = self.descriptor();

        for removed in descriptor
            .remove()
            .context("failed to delete the existing workspace descriptor")?
        {
            tracing::info!("{} already existed => deleted", removed.display());
        }

        if references.is_empty() {
            tracing::info!(
                "No subfolders with {} found. No {} file created.",
                MODULE_MANIFEST,
                WORKSPACE_DESCRIPTOR
            );
            return Ok(AssembleOutcome::NothingToAssemble);
        }

        tracing::info!("Subfolders containing {}:", MODULE_MANIFEST);
        for reference in references {
            tracing::info!("  {}", reference);
        }

        let cmd = ProcessBuilder::new(&self.go)
            .args(["work", "init"])
            .args(references.iter().map(ModuleReference::to_arg))
            .cwd(&self.root);
        runner
            .run(&cmd)
            .context("failed to run `go work init`")?;

        let digest = if descriptor.exists() {
            Some(sha256_file(&descriptor.path())?)
        } else {
            None
        };

        Ok(AssembleOutcome::Assembled {
            modules: references.len(),
            descriptor: descriptor.path(),
            digest,
        })
    }

    /// Find nested Git checkouts below the root.
    ///
    /// Only `.git` directories count; the root's own checkout is skipped and
    /// the contents of `.git` directories are not searched.
    pub fn find_sub_repositories(&self) -> Result<Vec<SubRepository>> {
        let mut repos = Vec::new();
        let mut walker = WalkDir::new(&self.root).sort_by_file_name().into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|e| walk_error(&self.root, e))?;

            if entry.depth() == 0
                || !entry.file_type().is_dir()
                || entry.file_name() != VCS_METADATA_DIR
            {
                continue;
            }
            walker.skip_current_dir();

            let checkout = entry.path().parent().unwrap_or(&self.root);
            let relative = relative_path(&self.root, checkout);
            if relative.as_os_str().is_empty() {
                continue;
            }

            repos.push(SubRepository {
                path: absolute(checkout)?,
                relative,
            });
        }

        Ok(repos)
    }

    /// Register every nested checkout as a submodule of the root repository.
    ///
    /// Returns the number of registered submodules. By default every
    /// checkout is attempted and the failures are reported together; with
    /// fail-fast the first failure aborts the rest.
    pub fn register_sub_repositories(&self, runner: &mut dyn CommandRunner) -> Result<usize> {
        let mut registered = 0;
        let mut failures = Vec::new();

        for repo in self.find_sub_repositories()? {
            tracing::info!("Adding submodule: {}", repo.relative.display());

            let cmd = ProcessBuilder::new(&self.git)
                .args(["submodule", "add"])
                .arg(&repo.path)
                .arg(slash_path(&repo.relative))
                .cwd(&self.root);

            match runner.run(&cmd) {
                Ok(()) => registered += 1,
                Err(e) if self.submodule_fail_fast => {
                    return Err(e.context(format!(
                        "error adding submodule {}",
                        repo.relative.display()
                    )));
                }
                Err(e) => {
                    tracing::warn!(
                        "error adding submodule {}: {:#}",
                        repo.relative.display(),
                        e
                    );
                    failures.push((repo.relative, format!("{:#}", e)));
                }
            }
        }

        if !failures.is_empty() {
            return Err(GosmithError::SubmoduleRegistration { failures }.into());
        }

        Ok(registered)
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> GosmithError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    GosmithError::filesystem(path, source)
}
