//! Environment health checks.
//!
//! `gosmith doctor` verifies that the tools gosmith shells out to can be
//! found, using the commands from the active configuration.
//!
//! ## Checks Performed
//!
//! - Go toolchain (required)
//! - Git (required)
//! - Editor command (optional)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::util::config::Config;
use crate::util::process::{find_executable, ProcessBuilder};

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool (if found)
    pub path: Option<PathBuf>,

    /// First line of the tool's version output
    pub version: Option<String>,

    /// How long the check took
    pub duration: Duration,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            passed: false,
            ..CheckResult::pass(name, message)
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,

    /// Total time taken
    pub total_duration: Duration,
}

impl DoctorReport {
    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// Run every check against the configured tools.
pub fn doctor(config: &Config) -> DoctorReport {
    let start = Instant::now();
    let mut report = DoctorReport::default();

    report.add(check_tool("Go", config.go(), &["version"]));
    report.add(check_tool("Git", config.git(), &["--version"]));
    report.add(check_tool("Editor", config.editor(), &["--version"]).optional());

    report.total_duration = start.elapsed();
    report
}

/// Check that `program` is on PATH and capture its version line.
pub fn check_tool(name: &str, program: &str, version_args: &[&str]) -> CheckResult {
    let start = Instant::now();

    let Some(path) = find_executable(program) else {
        return CheckResult::fail(name, format!("`{}` not found on PATH", program))
            .with_duration(start.elapsed());
    };

    let mut result = CheckResult::pass(name, format!("Found {}", program)).with_path(path.clone());

    match ProcessBuilder::new(&path).args(version_args).exec() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if let Some(line) = stdout.lines().map(str::trim).find(|l| !l.is_empty()) {
                result = result.with_version(line);
            }
        }
        Ok(output) => {
            tracing::debug!("`{}` exited with {}", program, output.status);
        }
        Err(e) => {
            tracing::debug!("could not query `{}` version: {:#}", program, e);
        }
    }

    result.with_duration(start.elapsed())
}

/// Format the report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    let _ = writeln!(output, "gosmith doctor");
    let _ = writeln!(output, "==============\n");

    let _ = writeln!(output, "Checks:");
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        let _ = writeln!(output, "  {} {}{}", status, check.name, required);

        if verbose || !check.passed {
            let _ = writeln!(output, "      {}", check.message);
        }
        if verbose {
            if let Some(path) = &check.path {
                let _ = writeln!(output, "      Path: {}", path.display());
            }
            if let Some(version) = &check.version {
                let _ = writeln!(output, "      Version: {}", version);
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Summary: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    );

    let required_failed = report.required_failed_count();
    if required_failed > 0 {
        let _ = writeln!(
            output,
            "\nWarning: {} required check(s) failed.",
            required_failed
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_fails() {
        let result = check_tool("Go", "gosmith-no-such-go", &["version"]);

        assert!(!result.passed);
        assert!(result.path.is_none());
        assert!(result.message.contains("not found"));
    }

    #[test]
    fn test_optional_failure_does_not_fail_report() {
        let mut report = DoctorReport::default();
        report.add(CheckResult::pass("Go", "Found go"));
        report.add(CheckResult::fail("Editor", "`code` not found on PATH").optional());

        assert!(report.all_required_passed());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.required_failed_count(), 0);
    }

    #[test]
    fn test_required_failure_fails_report() {
        let mut report = DoctorReport::default();
        report.add(CheckResult::fail("Git", "`git` not found on PATH"));

        assert!(!report.all_required_passed());
        let text = format_report(&report, false);
        assert!(text.contains("[!!] Git"));
        assert!(text.contains("1 required check(s) failed"));
    }

    #[test]
    fn test_format_report_verbose_shows_details() {
        let mut report = DoctorReport::default();
        report.add(
            CheckResult::pass("Go", "Found go")
                .with_path(PathBuf::from("/usr/local/go/bin/go"))
                .with_version("go version go1.22.5 linux/amd64"),
        );

        let text = format_report(&report, true);
        assert!(text.contains("[OK] Go"));
        assert!(text.contains("Path: /usr/local/go/bin/go"));
        assert!(text.contains("Version: go version go1.22.5"));
    }

    #[cfg(unix)]
    #[test]
    fn test_doctor_uses_configured_commands() {
        let mut config = Config::default();
        config.tools.go = Some("gosmith-no-such-go".to_string());
        config.tools.git = Some("sh".to_string());
        config.tools.editor = Some("gosmith-no-such-editor".to_string());

        let report = doctor(&config);

        assert_eq!(report.checks.len(), 3);
        assert!(!report.checks[0].passed);
        assert!(report.checks[1].passed);
        assert!(!report.checks[2].required);
        assert!(!report.all_required_passed());
    }
}
