use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    // Get the current Git hash
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("git_hash.rs");
    fs::write(
        &dest_path,
        format!("pub const GIT_HASH: &str = \"{}\";", git_hash),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/seed.json");
}
