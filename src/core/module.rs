//! Go module specifications for `gosmith app` and `gosmith lib`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::util::errors::GosmithError;

/// Prefix value meaning "no prefix".
pub const NO_PREFIX: &str = "none";

static MODULE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("valid regex"));

/// Whether a module is an application or a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    App,
    Lib,
}

impl ModuleKind {
    /// Applications get a `main.go`; libraries never do.
    pub fn has_entry_point(self) -> bool {
        matches!(self, ModuleKind::App)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::App => "application",
            ModuleKind::Lib => "library",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module to generate: its directory name, import-path prefix and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    name: String,
    prefix: String,
    kind: ModuleKind,
}

impl ModuleSpec {
    /// Create a module spec, validating the name.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, kind: ModuleKind) -> Result<Self> {
        let name = name.into();
        validate_module_name(&name)?;
        Ok(ModuleSpec {
            name,
            prefix: prefix.into(),
            kind,
        })
    }

    /// Directory name of the module.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Full module path passed to `go mod init`.
    ///
    /// The prefix is prepended verbatim; no separator is inserted.
    pub fn module_path(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}

/// Validate a module name.
///
/// The name becomes both a directory and the last element of the module
/// path, so it is restricted to characters Go accepts in path elements.
pub fn validate_module_name(name: &str) -> Result<(), GosmithError> {
    let invalid = |reason| GosmithError::InvalidModuleName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("module name cannot be empty"));
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err(invalid("module name cannot start with a hyphen or underscore"));
    }

    if name.starts_with('.') {
        return Err(invalid("module name cannot start with a dot"));
    }

    if !MODULE_NAME_CHARS.is_match(name) {
        return Err(invalid("module name contains invalid characters"));
    }

    Ok(())
}

/// Resolve the value of `--module-prefix`.
///
/// - not given: `default_prefix`, or empty
/// - `none`: empty
/// - a known alias: the alias target
/// - anything else: used verbatim
pub fn resolve_prefix(
    requested: Option<&str>,
    default_prefix: Option<&str>,
    aliases: &BTreeMap<String, String>,
) -> String {
    match requested {
        None => default_prefix.unwrap_or_default().to_string(),
        Some(NO_PREFIX) => String::new(),
        Some(value) => aliases
            .get(value)
            .cloned()
            .unwrap_or_else(|| value.to_string()),
    }
}
