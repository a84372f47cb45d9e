//! Embedded boilerplate written into generated modules.
//!
//! Every template is compiled into the binary and never changes at runtime.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::fs::write_file;

/// A named boilerplate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    MainGo,
    BuildBat,
    BuildSh,
    CrossBuildBat,
    CrossBuildSh,
    GolangciWinYml,
    GolangciYml,
    License,
}

impl Template {
    /// Every template in the bundle.
    pub const ALL: [Template; 8] = [
        Template::MainGo,
        Template::BuildBat,
        Template::BuildSh,
        Template::CrossBuildBat,
        Template::CrossBuildSh,
        Template::GolangciWinYml,
        Template::GolangciYml,
        Template::License,
    ];

    /// Build scripts and linter configs written into every module.
    pub const TOOLING: [Template; 6] = [
        Template::BuildBat,
        Template::BuildSh,
        Template::CrossBuildBat,
        Template::CrossBuildSh,
        Template::GolangciWinYml,
        Template::GolangciYml,
    ];

    /// Name of the file the template is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            Template::MainGo => "main.go",
            Template::BuildBat => "build.bat",
            Template::BuildSh => "build.sh",
            Template::CrossBuildBat => "cross-build.bat",
            Template::CrossBuildSh => "cross-build.sh",
            Template::GolangciWinYml => "golangci_win.yml",
            Template::GolangciYml => "golangci.yml",
            Template::License => "LICENSE",
        }
    }

    /// Template contents.
    pub fn contents(self) -> &'static str {
        match self {
            Template::MainGo => include_str!("files/main.go.template"),
            Template::BuildBat => include_str!("files/build.bat"),
            Template::BuildSh => include_str!("files/build.sh"),
            Template::CrossBuildBat => include_str!("files/cross-build.bat"),
            Template::CrossBuildSh => include_str!("files/cross-build.sh"),
            Template::GolangciWinYml => include_str!("files/golangci_win.yml"),
            Template::GolangciYml => include_str!("files/golangci.yml"),
            Template::License => include_str!("files/LICENSE"),
        }
    }

    /// Shell scripts are written with the executable bit set.
    pub fn is_executable(self) -> bool {
        matches!(self, Template::BuildSh | Template::CrossBuildSh)
    }

    /// Write the template into `dir`, returning the written path.
    pub fn write_to(self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        write_file(&path, self.contents().as_bytes(), self.is_executable())
            .with_context(|| format!("error creating {}", self.file_name()))?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }
}
