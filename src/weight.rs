// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Label/weight conversion for edges
//!
//! Edge labels carry their traversal cost as text, conventionally with a
//! `C` prefix (`"C3"` costs 3). Parsing is deliberately lenient: anything
//! that does not yield a usable number costs 1, so every edge stays
//! traversable no matter how its label was typed.

/// Parse an edge label into its integer weight.
///
/// Strips one leading `C`, then reads the longest leading signed-integer
/// prefix of what remains. No digits, or a parsed value of zero, falls
/// back to 1.
#[must_use]
pub fn parse_weight(label: &str) -> i64 {
    let stripped = label.trim().strip_prefix('C').unwrap_or(label.trim());
    match leading_int(stripped) {
        Some(0) | None => 1,
        Some(n) => n,
    }
}

/// Format a weight back into its canonical label, the inverse of
/// [`parse_weight`] for generated labels.
#[must_use]
pub fn format_weight(weight: i64) -> String {
    format!("C{weight}")
}

/// Longest leading signed-integer prefix of a string, if any
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_labels() {
        assert_eq!(parse_weight("C7"), 7);
        assert_eq!(parse_weight("C12"), 12);
        assert_eq!(parse_weight(" C3 "), 3);
    }

    #[test]
    fn test_bare_numbers() {
        assert_eq!(parse_weight("3"), 3);
        assert_eq!(parse_weight("42"), 42);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_weight("C3 credits"), 3);
        assert_eq!(parse_weight("5h"), 5);
    }

    #[test]
    fn test_default_to_one() {
        assert_eq!(parse_weight(""), 1);
        assert_eq!(parse_weight("garbage"), 1);
        assert_eq!(parse_weight("C"), 1);
        // A zero label still costs 1 so the edge stays traversable
        assert_eq!(parse_weight("C0"), 1);
        assert_eq!(parse_weight("0"), 1);
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(format_weight(7), "C7");
        assert_eq!(parse_weight(&format_weight(7)), 7);
        assert_eq!(parse_weight(&format_weight(1)), 1);
    }
}
