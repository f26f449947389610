// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::compare::{Comparison, Outcome};

/// Writes a human-readable report of a comparison to `out`
///
/// Both sequence lengths are always reported, followed by the verdict. On
/// divergence the offset is printed in hexadecimal and decimal, the two differing
/// bytes as two-digit hexadecimal, and the two context windows as contiguous
/// lowercase hexadecimal strings.
///
/// # Errors
///
/// Returns an error if an I/O error occurs while writing the report.
///
/// # Examples
///
/// ```
/// # fn main() -> std::io::Result<()> {
/// let result = statecmp::compare(&[1, 2, 3], &[1, 2, 3]);
/// let mut report = Vec::new();
///
/// statecmp::write_report(&result, &mut report)?;
///
/// assert!(report.starts_with(b"Filesize A: 3\n"));
/// # Ok(())
/// # }
/// ```
pub fn write_report<W>(result: &Comparison, out: &mut W) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Filesize A: {}", result.len_a)?;
    writeln!(out, "Filesize B: {}", result.len_b)?;

    match &result.outcome {
        Outcome::Identical => writeln!(out, "FILES ARE IDENTICAL")?,
        Outcome::Differ(diff) => {
            writeln!(out, "FILES DIFFER")?;
            writeln!(out, "First diff at offset 0x{:X} ({})", diff.offset, diff.offset)?;
            writeln!(out, "A: 0x{:02X}", diff.byte_a)?;
            writeln!(out, "B: 0x{:02X}", diff.byte_b)?;
            writeln!(out, "Context A: {}", hex(&diff.context_a))?;
            writeln!(out, "Context B: {}", hex(&diff.context_b))?;
        }
        Outcome::EqualOverlap => {
            let overlap = result.len_a.min(result.len_b);
            writeln!(out, "FILES DIFFER")?;
            writeln!(out, "Files agree up to the shorter length ({overlap} bytes)")?;
        }
    }

    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;

    fn render(result: &Comparison) -> String {
        let mut out = Vec::new();
        write_report(result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn identical_report() {
        let result = compare(&[1, 2, 3], &[1, 2, 3]);

        assert_eq!(
            render(&result),
            "Filesize A: 3\nFilesize B: 3\nFILES ARE IDENTICAL\n",
            "identical inputs report both lengths and the verdict",
        );
    }

    #[test]
    fn differ_report() {
        let result = compare(&[1, 2, 3], &[1, 9, 3]);

        assert_eq!(
            render(&result),
            "Filesize A: 3\n\
             Filesize B: 3\n\
             FILES DIFFER\n\
             First diff at offset 0x1 (1)\n\
             A: 0x02\n\
             B: 0x09\n\
             Context A: 010203\n\
             Context B: 010903\n",
            "divergence reports offset, bytes, and context windows",
        );
    }

    #[test]
    fn differ_report_offset_in_upper_hex() {
        let a = [0u8; 300];
        let mut b = [0u8; 300];
        b[255] = 0xab;

        let result = compare(&a, &b);
        let report = render(&result);

        assert!(
            report.contains("First diff at offset 0xFF (255)"),
            "offset printed in hexadecimal and decimal",
        );
        assert!(report.contains("B: 0xAB"), "byte printed as two hex digits");
    }

    #[test]
    fn equal_overlap_report() {
        let result = compare(&[7u8; 20], &[7u8; 10]);

        assert_eq!(
            render(&result),
            "Filesize A: 20\n\
             Filesize B: 10\n\
             FILES DIFFER\n\
             Files agree up to the shorter length (10 bytes)\n",
            "length mismatch without a divergent byte is reported explicitly",
        );
    }
}
