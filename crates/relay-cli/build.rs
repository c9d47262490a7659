use std::process::Command;

// Stamps the short commit hash into `--version`. Release builds outside a
// checkout can pass it in through RELAY_GIT_HASH instead.
fn main() {
    let hash = std::env::var("RELAY_GIT_HASH").ok().or_else(|| {
        Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_string())
    });

    println!("cargo:rustc-env=GIT_HASH={}", hash.unwrap_or_default());
    println!("cargo:rerun-if-env-changed=RELAY_GIT_HASH");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}
