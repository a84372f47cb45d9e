//! Implementation of `gosmith work`.
//!
//! The pipeline runs strictly in order and stops at the first failing step
//! without undoing earlier ones:
//!
//! 1. discover modules
//! 2. regenerate `go.work` (skipped when no modules were found)
//! 3. `git init`, register nested checkouts as submodules, commit
//! 4. open the editor

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::workspace::{AssembleOutcome, ModuleReference, WorkspaceAssembler};
use crate::ops::{editor, vcs};
use crate::util::config::Config;
use crate::util::process::CommandRunner;

/// Options for `gosmith work`.
#[derive(Debug, Clone)]
pub struct WorkOptions {
    /// Workspace root
    pub path: PathBuf,

    /// Skip Git initialization
    pub no_git: bool,

    /// Skip creating and running the editor launcher
    pub no_code: bool,
}

/// What a `gosmith work` run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkReport {
    /// Modules found below the root, in walk order.
    pub modules: Vec<ModuleReference>,

    /// Result of the descriptor regeneration.
    pub outcome: AssembleOutcome,

    /// Number of registered submodules, if Git ran.
    pub submodules: Option<usize>,

    /// Whether the editor was launched.
    pub editor_opened: bool,
}

/// Discover modules below `opts.path` and assemble them into a workspace.
pub fn generate_workspace(
    opts: &WorkOptions,
    config: &Config,
    runner: &mut dyn CommandRunner,
) -> Result<WorkReport> {
    let assembler = WorkspaceAssembler::from_config(&opts.path, config);

    let modules = assembler
        .discover()
        .context("error walking the directory")?;

    let outcome = assembler.assemble(&modules, runner)?;
    if let AssembleOutcome::Assembled { digest, .. } = &outcome {
        tracing::info!("go.work file created successfully.");
        if let Some(digest) = digest {
            tracing::debug!("go.work sha256 {}", digest);
        }
    }

    let submodules = if opts.no_git {
        tracing::info!("Git repository initialization skipped.");
        None
    } else {
        vcs::init_repository(config.git(), assembler.root(), runner)?;

        let count = assembler
            .register_sub_repositories(runner)
            .context("error adding Git submodules")?;

        vcs::commit_all(
            config.git(),
            assembler.root(),
            config.commit_message(),
            runner,
        )?;
        tracing::info!("All files and submodules added and initial commit created.");
        Some(count)
    };

    if opts.no_code {
        tracing::info!("Creation and execution of open_vscode file skipped.");
    } else {
        editor::open_editor(assembler.root(), config.editor(), runner)?;
    }

    Ok(WorkReport {
        modules,
        outcome,
        submodules,
        editor_opened: !opts.no_code,
    })
}
