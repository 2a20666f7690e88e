//! Text helpers

/// Collapse runs of whitespace to single spaces and trim both ends
///
/// Whitespace is Unicode whitespace, so no-break spaces collapse too.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `text` is empty or whitespace only
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Leading integer of an attribute value, HTML style (`" 12px"` is 12)
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Leading decimal number of a value (`"0.5px"` is 0.5)
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    value[..end].parse::<f64>().ok()
}

/// Ordinal rendered as letters: 1 is `A`, 26 is `Z`, 27 is `AA`
pub fn alphabetic_ordinal(mut n: u32) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Ordinal rendered as uppercase Roman numerals
///
/// Falls back to digits outside `1..4000`.
pub fn roman_ordinal(n: u32) -> String {
    if n == 0 || n >= 4000 {
        return n.to_string();
    }
    const NUMERALS: &[(u32, &str)] = &[
        (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
        (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
        (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
    ];
    let mut remaining = n;
    let mut out = String::new();
    for &(value, numeral) in NUMERALS {
        while remaining >= value {
            out.push_str(numeral);
            remaining -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("\u{a0}x\u{a0}"), "x");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t\u{a0}"));
        assert!(!is_blank(" & "));
    }

    #[test]
    fn test_parse_leading() {
        assert_eq!(parse_leading_int(" 12px"), Some(12));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_number("0.5px"), Some(0.5));
        assert_eq!(parse_leading_number("0px"), Some(0.0));
        assert_eq!(parse_leading_number("medium"), None);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(alphabetic_ordinal(1), "A");
        assert_eq!(alphabetic_ordinal(26), "Z");
        assert_eq!(alphabetic_ordinal(27), "AA");
        assert_eq!(roman_ordinal(4), "IV");
        assert_eq!(roman_ordinal(1994), "MCMXCIV");
        assert_eq!(roman_ordinal(0), "0");
    }
}
