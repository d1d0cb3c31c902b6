use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let version = env!("CARGO_PKG_VERSION");

    // A build is a release when HEAD carries the version tag and the tree is clean
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| {
            tags.lines()
                .any(|tag| tag == version || tag == format!("v{}", version))
        })
        .unwrap_or(false);
    let dirty = git(&["status", "--porcelain"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);

    println!("cargo:rustc-env=MAILZ_GIT_HASH={}", hash);
    println!("cargo:rustc-env=MAILZ_IS_RELEASE={}", tagged && !dirty);
}
