use std::process::Command;

// `srcnorm --version` prints "<pkg version> (<commit>)"; the commit comes from
// here. Builds outside a git checkout (crate tarballs) get "unknown".
fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".into());

    // Local edits to the standardizer show up as "-dirty" in bug reports
    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .is_some_and(|o| o.status.success() && !o.stdout.is_empty());

    let commit = if dirty { format!("{hash}-dirty") } else { hash };

    println!("cargo:rustc-env=SRCNORM_BUILD_COMMIT={commit}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
