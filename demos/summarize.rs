//! Example: Summarize the output of `brew info --json --installed`
//!
//! Reads the JSON from a file (or stdin) and prints one line per package.
//!
//! Usage:
//!   brew info --json=v1 --installed | cargo run --example summarize
//!   cargo run --example summarize -- tests/fixtures/git.json

use anyhow::Context;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let packages = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("Failed to read {}", path))?;
            brewinfo::decode(&bytes).with_context(|| format!("Failed to decode {}", path))?
        }
        None => {
            if std::io::stdin().is_terminal() {
                anyhow::bail!("Pipe `brew info --json=v1 --installed` into stdin or pass a file");
            }
            brewinfo::decode_reader(std::io::stdin().lock()).context("Failed to decode stdin")?
        }
    };

    for package in &packages {
        let linked = package
            .linked_install()
            .map(|install| install.version.as_str())
            .unwrap_or("-");

        let mut flags = Vec::new();
        if package.outdated {
            flags.push("outdated");
        }
        if package.pinned {
            flags.push("pinned");
        }
        if package.keg_only {
            flags.push("keg-only");
        }

        println!(
            "{:<30} stable {:<12} linked {:<12} deps {:<3} {}",
            package.full_name,
            package.versions.stable,
            linked,
            package.dependencies.len(),
            flags.join(",")
        );

        if let Some(bottle) = package.stable_bottle() {
            let tags: Vec<&str> = bottle.files.keys().map(String::as_str).collect();
            println!("{:<30} bottles: {}", "", tags.join(", "));
        }
    }

    println!("\n{} packages", packages.len());
    Ok(())
}
