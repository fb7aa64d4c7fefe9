//! Parses the `delete_after` retention threshold.
//!
//! Two grammars, tried in order: a day shorthand (`"7d"`) and a compound
//! duration expression (`"2h30m"`, fractional numbers permitted). The result
//! is signed — zero and negative thresholds pass through unchanged, placing
//! the cutoff at or after "now" so every file counts as stale.

use crate::error::Error;
use chrono::TimeDelta;

/// Parses a retention threshold in either grammar.
///
/// The day shorthand commits once the trailing `d` matches: a remainder that
/// is not a non-negative integer fails outright rather than falling through
/// to the compound grammar.
///
/// # Errors
/// Fails with `InvalidDuration` when the input matches neither grammar.
pub fn parse_retention(input: &str) -> Result<TimeDelta, Error> {
    let s = input.trim();
    if s.is_empty() {
        return Err(Error::InvalidDuration(input.to_string()));
    }

    if let Some(days) = s.strip_suffix('d') {
        let days: u32 = days
            .parse()
            .map_err(|_| Error::InvalidDuration(input.to_string()))?;
        return Ok(TimeDelta::hours(i64::from(days) * 24));
    }

    parse_compound(s).ok_or_else(|| Error::InvalidDuration(input.to_string()))
}

/// Compound grammar: optional leading sign, then `<number><unit>` segments
/// with unit one of `ms`, `s`, `m`, `h`. A bare `"0"` needs no unit.
fn parse_compound(s: &str) -> Option<TimeDelta> {
    let (negative, rest) = if let Some(r) = s.strip_prefix('-') {
        (true, r)
    } else if let Some(r) = s.strip_prefix('+') {
        (false, r)
    } else {
        (false, s)
    };

    if rest == "0" {
        return Some(TimeDelta::zero());
    }
    if rest.is_empty() {
        return None;
    }

    let mut remaining = rest;
    let mut total_ms = 0.0_f64;

    while !remaining.is_empty() {
        // A trailing number with no unit ends the scan here and rejects the input
        let split = remaining.find(|c: char| !c.is_ascii_digit() && c != '.')?;
        if split == 0 {
            return None;
        }
        let value: f64 = remaining[..split].parse().ok()?;

        let after = &remaining[split..];
        let unit_len = after
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after.len());
        let unit_ms = match &after[..unit_len] {
            "ms" => 1.0,
            "s" => 1_000.0,
            "m" => 60_000.0,
            "h" => 3_600_000.0,
            _ => return None,
        };

        total_ms += value * unit_ms;
        remaining = &after[unit_len..];
    }

    #[allow(clippy::cast_possible_truncation)]
    let ms = total_ms.round() as i64;
    let delta = TimeDelta::milliseconds(ms);
    Some(if negative { -delta } else { delta })
}
