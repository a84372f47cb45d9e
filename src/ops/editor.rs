//! Opening a generated folder in the editor.
//!
//! Both a batch file and a shell script are written so the folder can be
//! reopened from either platform later; only the one matching the current
//! platform is run. The scripts swallow the editor's exit status.

use std::path::Path;

use anyhow::{Context, Result};

use crate::util::fs::write_file;
use crate::util::process::{CommandRunner, ProcessBuilder};

/// Batch file used on Windows.
pub const OPEN_EDITOR_BATCH: &str = "open_vscode.bat";

/// Shell script used everywhere else.
pub const OPEN_EDITOR_SCRIPT: &str = "open_vscode.sh";

/// Contents of the batch file.
pub fn batch_contents(editor: &str) -> String {
    format!("{} . | exit 0\n", editor)
}

/// Contents of the shell script.
pub fn script_contents(editor: &str) -> String {
    format!("#!/bin/bash\n{} . || exit 0\n", editor)
}

/// Write both launcher files into `dir`.
pub fn create_editor_scripts(dir: &Path, editor: &str) -> Result<()> {
    write_file(
        &dir.join(OPEN_EDITOR_BATCH),
        batch_contents(editor).as_bytes(),
        false,
    )
    .with_context(|| format!("error creating {}", OPEN_EDITOR_BATCH))?;

    write_file(
        &dir.join(OPEN_EDITOR_SCRIPT),
        script_contents(editor).as_bytes(),
        true,
    )
    .with_context(|| format!("error creating {}", OPEN_EDITOR_SCRIPT))?;

    Ok(())
}

/// The command that runs the launcher for the current platform.
pub fn launch_command(dir: &Path) -> ProcessBuilder {
    if cfg!(windows) {
        ProcessBuilder::new("cmd")
            .arg("/C")
            .arg(dir.join(OPEN_EDITOR_BATCH))
            .cwd(dir)
    } else {
        ProcessBuilder::new("bash")
            .arg(dir.join(OPEN_EDITOR_SCRIPT))
            .cwd(dir)
    }
}

/// Write the launchers into `dir` and run the platform's one.
pub fn open_editor(dir: &Path, editor: &str, runner: &mut dyn CommandRunner) -> Result<()> {
    create_editor_scripts(dir, editor).context("error creating open_vscode file")?;

    tracing::info!("Opening editor...");
    runner
        .run(&launch_command(dir))
        .context("error executing open_vscode file")?;

    Ok(())
}
