// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp;

/// The result of comparing two byte sequences
///
/// Both lengths are always recorded, even when they take no part in deciding the
/// outcome, so callers can surface them for inspection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comparison {
    /// The length of the first sequence
    pub len_a: usize,
    /// The length of the second sequence
    pub len_b: usize,
    /// How the two sequences relate
    pub outcome: Outcome,
}

/// How two compared byte sequences relate to each other
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The sequences have equal length and equal bytes at every index
    Identical,
    /// The sequences disagree at some index within their overlap
    Differ(Difference),
    /// The lengths differ, but every byte of the overlapping prefix is equal
    ///
    /// No offset exists to report in this case; the length mismatch alone makes
    /// the sequences unequal.
    EqualOverlap,
}

/// The first point of divergence between two byte sequences
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Difference {
    /// The first index at which the sequences disagree
    pub offset: usize,
    /// The byte of the first sequence at [`offset`](Self::offset)
    pub byte_a: u8,
    /// The byte of the second sequence at [`offset`](Self::offset)
    pub byte_b: u8,
    /// Bytes of the first sequence surrounding the divergence, clamped to bounds
    pub context_a: Vec<u8>,
    /// Bytes of the second sequence surrounding the divergence, clamped to bounds
    pub context_b: Vec<u8>,
}

/// Compares two byte sequences with default options
///
/// The sequences are compared byte-for-byte; if they are not identical, the
/// overlapping prefix is scanned for the first index at which they disagree. Only
/// the first divergence is located.
///
/// This function is a shorthand for [`compare_with_config()`] called with the
/// default options. If you want to tune the context window, see that function
/// instead.
///
/// # Examples
///
/// ```
/// use statecmp::Outcome;
///
/// let result = statecmp::compare(&[1, 2, 3], &[1, 2, 3]);
///
/// assert_eq!(result.outcome, Outcome::Identical);
/// ```
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Comparison {
    compare_with_config(a, b, &CompareConfig::default())
}

/// Compares two byte sequences
///
/// The sequences are compared byte-for-byte; if they are not identical, the
/// overlapping prefix is scanned for the first index at which they disagree. Only
/// the first divergence is located, along with a window of surrounding bytes from
/// each sequence for inspection. Each window is clamped to its own sequence's
/// bounds, so the two context slices may have different lengths near the end of
/// the shorter sequence.
///
/// The scan reads at most `min(a.len(), b.len())` bytes and neither input is
/// mutated, so repeated calls with the same inputs yield the same result.
///
/// # Examples
///
/// ```
/// use statecmp::{CompareConfig, Outcome};
///
/// let a = [1, 2, 3];
/// let b = [1, 9, 3];
/// let result = statecmp::compare_with_config(&a, &b, CompareConfig::new().context_bytes(4));
///
/// match result.outcome {
///     Outcome::Differ(diff) => assert_eq!(diff.offset, 1),
///     _ => unreachable!(),
/// }
/// ```
#[must_use]
pub fn compare_with_config(a: &[u8], b: &[u8], options: &CompareConfig) -> Comparison {
    let (len_a, len_b) = (a.len(), b.len());

    if a == b {
        return Comparison {
            len_a,
            len_b,
            outcome: Outcome::Identical,
        };
    }

    let outcome = match a.iter().zip(b).position(|(byte_a, byte_b)| byte_a != byte_b) {
        Some(offset) => {
            let ctx = options.context_bytes;
            let start = offset.saturating_sub(ctx);
            let end_a = cmp::min(len_a, offset + ctx);
            let end_b = cmp::min(len_b, offset + ctx);

            Outcome::Differ(Difference {
                offset,
                byte_a: a[offset],
                byte_b: b[offset],
                context_a: a[start..end_a].to_vec(),
                context_b: b[start..end_b].to_vec(),
            })
        }
        None => Outcome::EqualOverlap,
    };

    Comparison {
        len_a,
        len_b,
        outcome,
    }
}

/// Configuration for a compare operation.
///
/// This struct can be used to tune how much surrounding data is captured when a
/// divergence is found. The default should be enough for most inspection needs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CompareConfig {
    context_bytes: usize,
}

impl CompareConfig {
    /// Creates a new configuration for compare operations
    ///
    /// This configuration can be reused across compare operations.
    pub const fn new() -> Self {
        Self {
            context_bytes: Self::DEFAULT_CONTEXT_BYTES,
        }
    }

    /// Sets the number of bytes captured on each side of a divergence.
    ///
    /// When a differing byte is found, up to this many bytes before it and after
    /// it are captured from each sequence, clamped to that sequence's bounds.
    /// Note that the differing byte itself counts toward the trailing side, so a
    /// value of 0 captures empty windows.
    pub fn context_bytes(&mut self, bytes: usize) -> &mut Self {
        self.context_bytes = bytes;
        self
    }

    /// The default number of context bytes captured on each side of a divergence
    pub const DEFAULT_CONTEXT_BYTES: usize = 16;
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}
