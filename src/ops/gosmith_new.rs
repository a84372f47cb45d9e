//! Implementation of `gosmith app` and `gosmith lib`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::module::ModuleSpec;
use crate::core::workspace::MODULE_MANIFEST;
use crate::ops::{editor, vcs};
use crate::templates::Template;
use crate::util::config::Config;
use crate::util::fs::ensure_dir;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Options for creating a new module.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Skip Git initialization
    pub no_git: bool,

    /// Skip creating and running the editor launcher
    pub no_code: bool,

    /// Skip `main.go` (always skipped for libraries)
    pub no_main: bool,
}

/// Create a new Go module named `spec.name()` inside `parent`.
///
/// Returns the module directory.
pub fn new_module(
    parent: &Path,
    spec: &ModuleSpec,
    opts: &NewOptions,
    config: &Config,
    runner: &mut dyn CommandRunner,
) -> Result<PathBuf> {
    let folder = parent.join(spec.name());

    if folder.join(MODULE_MANIFEST).exists() {
        bail!(
            "`{}` already exists in `{}`",
            MODULE_MANIFEST,
            folder.display()
        );
    }

    ensure_dir(&folder).context("error creating folder")?;

    let module_path = spec.module_path();
    runner
        .run(
            &ProcessBuilder::new(config.go())
                .args(["mod", "init"])
                .arg(&module_path)
                .cwd(&folder),
        )
        .context("error running `go mod init`")?;

    for template in Template::TOOLING {
        template
            .write_to(&folder)
            .context("error creating analyze scripts")?;
    }
    tracing::info!("Analyze scripts and configuration files created successfully.");

    Template::License.write_to(&folder)?;
    tracing::info!("LICENSE file created successfully.");

    if spec.kind().has_entry_point() && !opts.no_main {
        Template::MainGo.write_to(&folder)?;
        tracing::info!("main.go created successfully.");
    } else {
        tracing::info!("Creation of main.go skipped.");
    }

    if opts.no_git {
        tracing::info!("Git repository initialization skipped.");
    } else {
        vcs::init_repository(config.git(), &folder, runner)?;
        vcs::commit_all(config.git(), &folder, config.commit_message(), runner)?;
        tracing::info!("All files added and initial commit created.");
    }

    if opts.no_code {
        tracing::info!("Creation and execution of open_vscode file skipped.");
    } else {
        editor::open_editor(&folder, config.editor(), runner)?;
    }

    Ok(folder)
}
