//! Custom cargo commands for the sitesearch crate.
//!
//! Usage:
//!   cargo xtask check     - Quick check (check + tests + clippy)
//!   cargo xtask test      - Run all tests
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run the widget fuzz target for a minute

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check     Quick check (cargo check, test and clippy, with and without wasm)
  test      Run all Rust tests
  bench     Run benchmarks
  fuzz      Fuzz the search box event handling (needs cargo-fuzz and nightly)
"#
    );
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo test --lib --features wasm...");
    run_cargo(&["test", "--quiet", "--lib", "--features", "wasm"])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", "widget_events", "--", "-max_total_time=60"])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz")?;

    if !status.success() {
        bail!("fuzzing found a failure");
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
