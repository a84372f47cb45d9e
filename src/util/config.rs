//! Configuration file support for gosmith.
//!
//! Configuration is layered, later layers overriding earlier ones:
//! - Built-in defaults
//! - Global: `~/.gosmith/config.toml`
//! - Project: `<path>/.gosmith/config.toml`
//! - Explicit: `--config <FILE>` (or `GOSMITH_CONFIG`)
//!
//! Global and project files that fail to load are warned about and skipped.
//! An explicitly requested file must load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::util::errors::GosmithError;

/// Default commit message for the initial commit.
pub const DEFAULT_COMMIT_MESSAGE: &str = "init";

/// Module prefix shortcuts that are always available.
pub const BUILTIN_PREFIX_ALIASES: &[(&str, &str)] = &[
    ("vas", "github.com/muellerbbm-vas/"),
    ("slb", "github.com/mbbm-slb/"),
];

/// gosmith configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool commands
    pub tools: ToolsConfig,

    /// Module naming
    pub module: ModuleConfig,

    /// Version control behaviour
    pub vcs: VcsConfig,
}

/// Commands used for the external tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Go toolchain command (default: `go`)
    pub go: Option<String>,

    /// Git command (default: `git`)
    pub git: Option<String>,

    /// Editor command written into the open-editor scripts (default: `code`)
    pub editor: Option<String>,
}

/// Module naming settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Prefix used when `--module-prefix` is not given
    pub default_prefix: Option<String>,

    /// Additional `--module-prefix` shortcuts
    pub prefix_aliases: BTreeMap<String, String>,
}

/// Version control settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Message for the initial commit (default: `init`)
    pub commit_message: Option<String>,

    /// Stop at the first submodule that fails to register
    pub submodule_fail_fast: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GosmithError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config = toml::from_str(&contents).map_err(|e| GosmithError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        Ok(config)
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.tools.go.is_some() {
            self.tools.go = other.tools.go;
        }
        if other.tools.git.is_some() {
            self.tools.git = other.tools.git;
        }
        if other.tools.editor.is_some() {
            self.tools.editor = other.tools.editor;
        }

        if other.module.default_prefix.is_some() {
            self.module.default_prefix = other.module.default_prefix;
        }
        self.module.prefix_aliases.extend(other.module.prefix_aliases);

        if other.vcs.commit_message.is_some() {
            self.vcs.commit_message = other.vcs.commit_message;
        }
        if other.vcs.submodule_fail_fast.is_some() {
            self.vcs.submodule_fail_fast = other.vcs.submodule_fail_fast;
        }
    }

    /// Go toolchain command.
    pub fn go(&self) -> &str {
        self.tools.go.as_deref().unwrap_or("go")
    }

    /// Git command.
    pub fn git(&self) -> &str {
        self.tools.git.as_deref().unwrap_or("git")
    }

    /// Editor command.
    pub fn editor(&self) -> &str {
        self.tools.editor.as_deref().unwrap_or("code")
    }

    /// Initial commit message.
    pub fn commit_message(&self) -> &str {
        self.vcs
            .commit_message
            .as_deref()
            .unwrap_or(DEFAULT_COMMIT_MESSAGE)
    }

    /// Whether submodule registration stops at the first failure.
    pub fn submodule_fail_fast(&self) -> bool {
        self.vcs.submodule_fail_fast.unwrap_or(false)
    }

    /// Prefix shortcuts: built-ins overlaid with configured aliases.
    pub fn prefix_aliases(&self) -> BTreeMap<String, String> {
        let mut aliases: BTreeMap<String, String> = BUILTIN_PREFIX_ALIASES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        aliases.extend(
            self.module
                .prefix_aliases
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        aliases
    }
}

/// Load merged configuration for an invocation targeting `project_root`.
///
/// Order of precedence (highest to lowest):
/// 1. Explicit config file
/// 2. Project config (`.gosmith/config.toml`)
/// 3. Global config (`~/.gosmith/config.toml`)
/// 4. Defaults
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_config_path() {
        config.merge(Config::load_or_default(&global_path));
    }

    config.merge(Config::load_or_default(&project_config_path(project_root)));

    if let Some(path) = explicit {
        config.merge(Config::load(path)?);
    }

    Ok(config)
}

/// Get the global gosmith config directory (`~/.gosmith`).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".gosmith"))
}

/// Get the global config path (`~/.gosmith/config.toml`).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (`.gosmith/config.toml`).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".gosmith").join("config.toml")
}
