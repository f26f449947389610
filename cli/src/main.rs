// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, io, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use statecmp::CompareConfig;

#[derive(Parser)]
struct Args {
    /// First state snapshot
    #[arg(default_value = "states/0_1549")]
    file_a: PathBuf,
    /// Second state snapshot
    #[arg(default_value = "states/1_1549")]
    file_b: PathBuf,
    /// Number of bytes captured on each side of the first difference
    #[arg(long, default_value_t = CompareConfig::DEFAULT_CONTEXT_BYTES)]
    context: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Check the inputs in order so a missing first file is reported before the
    // second is touched
    for path in [&args.file_a, &args.file_b] {
        let exists = path
            .try_exists()
            .with_context(|| format!("Failed to check for state file '{}'", path.display()))?;
        if !exists {
            bail!("Missing {}", path.display());
        }
    }

    let a = fs::read(&args.file_a)
        .with_context(|| format!("Failed to read state file '{}'", args.file_a.display()))?;
    let b = fs::read(&args.file_b)
        .with_context(|| format!("Failed to read state file '{}'", args.file_b.display()))?;

    let result =
        statecmp::compare_with_config(&a, &b, CompareConfig::new().context_bytes(args.context));

    statecmp::write_report(&result, &mut io::stdout().lock())
        .context("Failed to write comparison report")?;

    Ok(())
}
