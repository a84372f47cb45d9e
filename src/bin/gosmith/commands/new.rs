//! `gosmith app` and `gosmith lib` commands

use std::path::Path;

use anyhow::Result;

use super::{status, target_dir};
use crate::cli::{AppArgs, ModuleArgs};
use gosmith::core::module::{resolve_prefix, ModuleKind, ModuleSpec};
use gosmith::ops::{new_module, NewOptions};
use gosmith::util::config::{load_config, Config};
use gosmith::util::SystemRunner;

pub fn execute_app(args: AppArgs, config_path: Option<&Path>) -> Result<()> {
    let no_main = args.no_main;
    execute(args.module, ModuleKind::App, no_main, config_path)
}

pub fn execute_lib(args: ModuleArgs, config_path: Option<&Path>) -> Result<()> {
    execute(args, ModuleKind::Lib, true, config_path)
}

/// Build the module spec from the arguments and config.
pub fn module_spec(args: &ModuleArgs, kind: ModuleKind, config: &Config) -> Result<ModuleSpec> {
    let prefix = resolve_prefix(
        args.module_prefix.as_deref(),
        config.module.default_prefix.as_deref(),
        &config.prefix_aliases(),
    );
    ModuleSpec::new(args.name.clone(), prefix, kind)
}

fn execute(
    args: ModuleArgs,
    kind: ModuleKind,
    no_main: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let parent = target_dir(args.path.clone())?;
    let config = load_config(&parent, config_path)?;
    let spec = module_spec(&args, kind, &config)?;

    let opts = NewOptions {
        no_git: args.no_git,
        no_code: args.no_code,
        no_main,
    };

    let folder = new_module(&parent, &spec, &opts, &config, &mut SystemRunner)?;

    status(
        "Created",
        format!(
            "{} `{}` in `{}`",
            kind,
            spec.module_path(),
            folder.display()
        ),
    );

    Ok(())
}
