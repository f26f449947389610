// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Byte-for-byte comparison of binary state snapshots.
//!
//! This crate locates the first point of divergence between two in-memory byte
//! sequences and captures a window of surrounding bytes from each for inspection.
//! It was built for checking whether two captured emulator state snapshots are
//! byte-identical and, if not, where they first diverge.
//!
//! # Examples
//!
//! Comparing two snapshot files and printing a report:
//!
//! ```no_run
//! use std::{fs, io};
//!
//! # fn main() -> std::io::Result<()> {
//! let a = fs::read("states/0_1549")?;
//! let b = fs::read("states/1_1549")?;
//!
//! let result = statecmp::compare(&a, &b);
//! statecmp::write_report(&result, &mut io::stdout().lock())?;
//!
//! # Ok(())
//! # }
//! ```
//!
//! Inspecting a divergence programmatically:
//!
//! ```
//! use statecmp::Outcome;
//!
//! let result = statecmp::compare(b"abcdef", b"abcxef");
//!
//! match result.outcome {
//!     Outcome::Differ(diff) => assert_eq!(diff.offset, 3),
//!     _ => unreachable!(),
//! }
//! ```

mod compare;
mod report;

pub use compare::{compare, compare_with_config, CompareConfig, Comparison, Difference, Outcome};
pub use report::write_report;
