use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let revision = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=BUDGET_TRACKER_BUILD_HASH={revision}");

    let tree = match command_stdout("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    println!("cargo:rustc-env=BUDGET_TRACKER_BUILD_STATUS={tree}");

    let built_on = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUDGET_TRACKER_BUILD_DATE={built_on}");

    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=BUDGET_TRACKER_BUILD_PROFILE={profile}");
}

/// Runs `program` and returns its trimmed stdout, or `None` when it is unavailable or fails.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
