//! Golden fixture generator for the BU8 conformance test suite.
//!
//! This binary writes every entry of [`bu8_tests::FIXTURES`] under
//! `tests/golden/<name>/`. Run it after adding or changing a fixture, then
//! refresh the decode traces with `cargo insta review` after running the
//! conformance tests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p bu8-tests
//! cargo run --bin generate_golden -p bu8-tests -- --out /tmp/golden
//! ```
//!
//! # Layout
//!
//! | File            | Contents                                           |
//! |-----------------|----------------------------------------------------|
//! | `input.bin`     | Raw fixture bytes, no padding                      |
//! | `manifest.json` | Name, description, length, and hex of the input    |

#![allow(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bu8_tests::{FIXTURES, Fixture};
use clap::Parser;

#[derive(Parser)]
#[command(name = "generate_golden", about = "Write BU8 golden decode fixtures")]
struct Args {
    /// Output directory. Defaults to this crate's `tests/golden`.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let golden_dir = args
        .out
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden"));

    for fixture in FIXTURES {
        write_fixture(&golden_dir, fixture)?;
    }

    println!("All golden fixtures written to {}", golden_dir.display());
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))?;
    println!("  wrote {}", path.display());
    Ok(())
}

fn write_fixture(golden: &Path, fixture: &Fixture) -> Result<()> {
    let dir = golden.join(fixture.name);

    let manifest = serde_json::json!({
        "name": fixture.name,
        "description": fixture.description,
        "len": fixture.bytes.len(),
        "hex": hex::encode(fixture.bytes),
    });
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');

    write_file(&dir.join("manifest.json"), json.as_bytes())?;
    write_file(&dir.join("input.bin"), fixture.bytes)
}
