// src/utils.rs
use crate::models::ProcessResult;
use std::io::{self, Write};

/// Writes the per-job summary line, e.g. `FSharp lines:15 comments:5 ratio:0.3333333333333333`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_summary<W: Write>(out: &mut W, label: &str, result: &ProcessResult) -> io::Result<()> {
    writeln!(
        out,
        "{label} lines:{} comments:{} ratio:{}",
        result.lines(),
        result.comments(),
        format_ratio(result)
    )
}

/// Shortest round-trip form of the ratio. A tree without lines reports a
/// bare `0`; any other whole ratio keeps one decimal (`1.0`). Ratios below
/// `1e-4` or from `1e16` up use exponent form with a signed two-digit
/// exponent (`5e-05`).
#[must_use]
pub fn format_ratio(result: &ProcessResult) -> String {
    let ratio = result.ratio();
    if result.lines() == 0 {
        return String::from("0");
    }
    if ratio != 0.0 && !(1e-4..1e16).contains(&ratio) {
        return format_exponent(ratio);
    }
    if ratio.is_finite() && ratio.fract() == 0.0 {
        return format!("{ratio:.1}");
    }
    ratio.to_string()
}

fn format_exponent(ratio: f64) -> String {
    let formatted = format!("{ratio:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(('+', exponent), |digits| ('-', digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
