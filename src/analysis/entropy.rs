//! Bits-of-entropy estimate built on the charset model.

use super::charset::charset_size;

/// Estimates the entropy of a password in bits.
///
/// The estimate is `length × log2(charset_size)`, with length measured in
/// chars. An empty password — or one whose characters belong to no
/// recognized class — has a charset size of 0 and is defined to yield
/// `0.0` rather than the NaN/−∞ a naive `log2(0)` would produce.
pub fn entropy_bits(password: &str) -> f64 {
    let length = password.chars().count();
    let charset = charset_size(password);
    if length == 0 || charset == 0 {
        return 0.0;
    }
    length as f64 * f64::from(charset).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_has_zero_entropy() {
        assert_eq!(entropy_bits(""), 0.0);
    }

    #[test]
    fn test_unclassified_chars_have_zero_entropy() {
        // Control characters carry no recognized class, so log2(0) must
        // not leak through.
        assert_eq!(entropy_bits("\u{1}\u{2}"), 0.0);
    }

    #[test]
    fn test_digits_only_reference_value() {
        // 10 chars over a charset of 10: 10 * log2(10) ≈ 33.22 bits.
        let bits = entropy_bits("1234567890");
        assert!(bits > 33.2 && bits < 33.3, "got {bits}");
    }

    #[test]
    fn test_matches_formula_for_nonempty_passwords() {
        for pwd in ["hello", "HeLlO123", "He3#; ", "©À", "a"] {
            let expected = pwd.chars().count() as f64 * f64::from(charset_size(pwd)).log2();
            assert!((entropy_bits(pwd) - expected).abs() < 1e-9, "mismatch for {pwd:?}");
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // One char, charset 32: exactly 5 bits.
        assert!((entropy_bits("©") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_longer_passwords_carry_more_bits() {
        assert!(entropy_bits("abcdefgh") > entropy_bits("abcd"));
        assert!(entropy_bits("Abcd1234!") > entropy_bits("abcd1234"));
    }
}
