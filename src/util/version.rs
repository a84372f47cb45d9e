//! Version string shown by `gosmith --version`.

/// Length of the abbreviated commit hash.
const SHORT_REVISION_LEN: usize = 7;

/// Version of this build, with the commit it was built from when known.
pub fn long_version() -> String {
    version_string(
        env!("CARGO_PKG_VERSION"),
        option_env!("GOSMITH_GIT_HASH"),
        option_env!("GOSMITH_GIT_MODIFIED") == Some("true"),
    )
}

/// Format `version`, appending the short commit hash and a `[modified]`
/// marker for builds from a dirty checkout.
pub fn version_string(version: &str, revision: Option<&str>, modified: bool) -> String {
    let Some(revision) = revision.filter(|r| !r.is_empty()) else {
        return version.to_string();
    };

    let short = revision.get(..SHORT_REVISION_LEN).unwrap_or(revision);
    let mut out = format!("{} (commit: {})", version, short);
    if modified {
        out.push_str(" [modified]");
    }
    out
}
