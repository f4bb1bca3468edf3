//! Progressive input masks for structured identifiers.
//!
//! All functions are pure transforms of a raw digit buffer; nothing is
//! retained between calls, so the same digits always render the same string
//! no matter how they were typed. Punctuation for a segment boundary only
//! appears once the digit count strictly exceeds that boundary, which keeps
//! the cursor stable while the user is still typing the segment.

use contracts::PersonKind;

/// Drop every non-digit character, preserving digit order.
pub fn strip_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Format a tax id as `###.###.###-##` (individual, 11 digits) or
/// `##.###.###/####-##` (organization, 14 digits). Excess digits are
/// dropped. Accepts already-formatted input; stripping happens internally,
/// which makes the transform idempotent.
pub fn format_tax_id(raw: &str, kind: PersonKind) -> String {
    let digits = strip_digits(raw);
    match kind {
        PersonKind::Individual => {
            let d = &digits[..digits.len().min(11)];
            match d.len() {
                0..=3 => d.to_string(),
                4..=6 => format!("{}.{}", &d[..3], &d[3..]),
                7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
                _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
            }
        }
        PersonKind::Organization => {
            let d = &digits[..digits.len().min(14)];
            match d.len() {
                0..=2 => d.to_string(),
                3..=5 => format!("{}.{}", &d[..2], &d[2..]),
                6..=8 => format!("{}.{}.{}", &d[..2], &d[2..5], &d[5..]),
                9..=12 => format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
                _ => format!("{}.{}.{}/{}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &d[12..]),
            }
        }
    }
}

/// Format a phone number as `(DD) DDDDD-DDDD`, 11 digits max.
pub fn format_phone(raw: &str) -> String {
    let digits = strip_digits(raw);
    let d = &digits[..digits.len().min(11)];
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_tax_id_examples() {
        assert_eq!(
            format_tax_id("11144477735", PersonKind::Individual),
            "111.444.777-35"
        );
        assert_eq!(format_tax_id("111", PersonKind::Individual), "111");
        assert_eq!(format_tax_id("1114", PersonKind::Individual), "111.4");
        assert_eq!(format_tax_id("1114447", PersonKind::Individual), "111.444.7");
        assert_eq!(
            format_tax_id("111444777", PersonKind::Individual),
            "111.444.777"
        );
        assert_eq!(
            format_tax_id("1114447773", PersonKind::Individual),
            "111.444.777-3"
        );
        // Digits past the pattern are dropped.
        assert_eq!(
            format_tax_id("111444777359999", PersonKind::Individual),
            "111.444.777-35"
        );
    }

    #[test]
    fn organization_tax_id_examples() {
        assert_eq!(
            format_tax_id("11222333000181", PersonKind::Organization),
            "11.222.333/0001-81"
        );
        assert_eq!(format_tax_id("11", PersonKind::Organization), "11");
        assert_eq!(format_tax_id("112", PersonKind::Organization), "11.2");
        assert_eq!(format_tax_id("112223", PersonKind::Organization), "11.222.3");
        assert_eq!(
            format_tax_id("112223330", PersonKind::Organization),
            "11.222.333/0"
        );
        assert_eq!(
            format_tax_id("1122233300018", PersonKind::Organization),
            "11.222.333/0001-8"
        );
    }

    #[test]
    fn phone_examples() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
        assert_eq!(format_phone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn strip_digits_keeps_order() {
        assert_eq!(strip_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(strip_digits("a1b2c3"), "123");
        assert_eq!(strip_digits("no digits"), "");
    }

    #[test]
    fn round_trip_law() {
        let samples = [
            "",
            "1",
            "12",
            "123",
            "12345",
            "123456789",
            "11144477735",
            "11222333000181",
            "99999999999999999999",
        ];
        for d in samples {
            for kind in [PersonKind::Individual, PersonKind::Organization] {
                let once = format_tax_id(d, kind);
                assert_eq!(format_tax_id(&strip_digits(&once), kind), once, "tax id {d:?}");
            }
            let once = format_phone(d);
            assert_eq!(format_phone(&strip_digits(&once)), once, "phone {d:?}");
        }
    }
}
