//! `gosmith doctor` command

use std::path::Path;

use anyhow::Result;

use super::target_dir;
use crate::cli::DoctorArgs;
use gosmith::ops::{doctor, format_report};
use gosmith::util::config::load_config;

pub fn execute(args: DoctorArgs, config_path: Option<&Path>, verbose: bool) -> Result<()> {
    let path = target_dir(args.path)?;
    let config = load_config(&path, config_path)?;

    let report = doctor(&config);
    print!("{}", format_report(&report, verbose));

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
