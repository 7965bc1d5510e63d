use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let version = git_describe().unwrap_or_else(|| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string())
    });

    println!("cargo:rustc-env=GIT_VERSION={version}");
}

/// `git describe` output with the leading `v` of release tags removed.
/// Untagged checkouts report `<pkg version>+g<hash>`.
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--tags", "--match", "v[0-9]*"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8(output.stdout).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.strip_prefix('v') {
        Some(tagged) => Some(tagged.to_string()),
        None => {
            let pkg = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
            Some(format!("{pkg}+g{raw}"))
        }
    }
}
