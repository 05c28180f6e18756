/// The single recognized promotional code. There is no code registry,
/// no expiry, and no per-item eligibility.
pub const PROMO_CODE: &str = "DISCOUNT10";

const PROMO_RATE: f64 = 0.10;

/// Discount rate for a submitted code: 10% for an exact case-insensitive
/// match of the recognized code, zero for anything else. An unrecognized
/// code is not an error; callers surface their own rejection notice.
pub fn discount_rate(code: &str) -> f64 {
    if code.eq_ignore_ascii_case(PROMO_CODE) {
        PROMO_RATE
    } else {
        0.0
    }
}

/// Whether a submitted code will produce a discount
pub fn is_recognized(code: &str) -> bool {
    discount_rate(code) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_code_any_case() {
        assert!(is_recognized("DISCOUNT10"));
        assert!(is_recognized("discount10"));
        assert!(is_recognized("Discount10"));
    }

    #[test]
    fn test_unrecognized_codes_yield_zero() {
        assert_eq!(discount_rate("SAVE5"), 0.0);
        assert_eq!(discount_rate(""), 0.0);
        // exact match only: surrounding whitespace does not qualify
        assert_eq!(discount_rate(" DISCOUNT10 "), 0.0);
    }
}
