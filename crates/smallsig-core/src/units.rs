//! SI magnitude-prefix handling for netlist literals.

use crate::error::{Error, Result};

/// Magnitude prefixes accepted as a single trailing letter, yocto through
/// yotta. Note the SI convention: `M` is mega and `m` is milli.
const SI_PREFIXES: [(char, f64); 18] = [
    ('y', 1e-24),
    ('z', 1e-21),
    ('a', 1e-18),
    ('f', 1e-15),
    ('p', 1e-12),
    ('n', 1e-9),
    ('u', 1e-6),
    ('m', 1e-3),
    ('c', 1e-2),
    ('d', 1e-1),
    ('k', 1e3),
    ('M', 1e6),
    ('G', 1e9),
    ('T', 1e12),
    ('P', 1e15),
    ('E', 1e18),
    ('Z', 1e21),
    ('Y', 1e24),
];

/// Look up a prefix letter: exact case first, then lowercase.
fn prefix_factor(c: char) -> Option<f64> {
    SI_PREFIXES
        .iter()
        .find(|(p, _)| *p == c)
        .or_else(|| {
            let lower = c.to_ascii_lowercase();
            SI_PREFIXES.iter().find(|(p, _)| *p == lower)
        })
        .map(|(_, factor)| *factor)
}

/// Parse a numeric token with an optional trailing magnitude prefix.
///
/// `1k` is 1000.0, `2.2u` is 2.2e-6, `5` is 5.0. A trailing letter that is
/// not a known prefix in either its own case or lowercase is an
/// [`Error::InvalidLiteral`], as is a malformed mantissa.
pub fn parse_literal(s: &str) -> Result<f64> {
    let s = s.trim();
    let Some(last) = s.chars().last() else {
        return Err(Error::InvalidLiteral(s.to_string()));
    };

    if last.is_ascii_digit() || last == '.' {
        return s
            .parse::<f64>()
            .map_err(|_| Error::InvalidLiteral(s.to_string()));
    }

    let factor = prefix_factor(last).ok_or_else(|| Error::InvalidLiteral(s.to_string()))?;
    let mantissa: f64 = s[..s.len() - last.len_utf8()]
        .parse()
        .map_err(|_| Error::InvalidLiteral(s.to_string()))?;

    Ok(mantissa * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_literal("5").unwrap(), 5.0);
        assert_eq!(parse_literal("-2.5").unwrap(), -2.5);
        assert_eq!(parse_literal("1e3").unwrap(), 1000.0);
        assert_eq!(parse_literal("10.").unwrap(), 10.0);
    }

    #[test]
    fn test_suffixed_numbers() {
        assert_eq!(parse_literal("1k").unwrap(), 1000.0);
        assert_eq!(parse_literal("2.2u").unwrap(), 2.2e-6);
        assert_eq!(parse_literal("100n").unwrap(), 100e-9);
        assert_eq!(parse_literal("32e3m").unwrap(), 32.0);
    }

    #[test]
    fn test_case_sensitive_prefixes() {
        // Mega and milli differ only by case.
        assert_eq!(parse_literal("1M").unwrap(), 1e6);
        assert_eq!(parse_literal("1m").unwrap(), 1e-3);
        // K is not in the table but falls back to k.
        assert_eq!(parse_literal("4.7K").unwrap(), 4.7e3);
        // G is giga; g has no lowercase entry to fall back to.
        assert_eq!(parse_literal("1G").unwrap(), 1e9);
        assert!(parse_literal("1g").is_err());
    }

    #[test]
    fn test_invalid_literals() {
        assert!(matches!(
            parse_literal("3X"),
            Err(Error::InvalidLiteral(s)) if s == "3X"
        ));
        assert!(parse_literal("").is_err());
        assert!(parse_literal("abc").is_err());
        assert!(parse_literal("SINE(0 1 1k)").is_err());
    }
}
