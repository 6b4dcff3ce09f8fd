//! Embeds build metadata for `qss --version`.
//!
//! - `QSS_BUILD_DATE`: UTC date of the build, always set.
//! - `VERGEN_GIT_SHA`: commit hash, dev builds only (not with `--features release`).

use std::process::Command;

const UNKNOWN: &str = "unknown";

fn build_date() -> String {
    Command::new("date")
        .args(["-u", "+%Y-%m-%d"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .filter(|date| !date.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(to_message)
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(to_message)
        });

    // Source tarballs have no .git directory.
    if let Err(msg) = emitted {
        println!("cargo:warning=git metadata unavailable: {}", msg);
        println!("cargo:rustc-env=VERGEN_GIT_SHA={}", UNKNOWN);
    }
}

#[cfg(not(feature = "release"))]
fn to_message(err: impl std::fmt::Display) -> String {
    err.to_string()
}

fn main() {
    println!("cargo:rustc-env=QSS_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
