use std::env;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=GOSMITH_GIT_HASH");

    // Only describe our own checkout, not a parent repository.
    if !Path::new(".git").exists() && env::var_os("GOSMITH_GIT_HASH").is_none() {
        return;
    }
    for file in [".git/HEAD", ".git/index"] {
        if Path::new(file).exists() {
            println!("cargo:rerun-if-changed={}", file);
        }
    }

    let revision = env::var("GOSMITH_GIT_HASH")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| git(&["rev-parse", "HEAD"]).filter(|s| !s.is_empty()));

    let Some(revision) = revision else {
        return;
    };

    let modified = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|s| !s.is_empty());

    println!("cargo:rustc-env=GOSMITH_GIT_HASH={}", revision);
    println!("cargo:rustc-env=GOSMITH_GIT_MODIFIED={}", modified);
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
