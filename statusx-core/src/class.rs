//! Status class extraction and code normalization.
//!
//! A normalized code keeps a 3-digit transport-style class in its leading
//! decimal digits and a finer-grained unique code in the rest, e.g.
//! `404000001` is class `404`, detail `1`.

/// Multiplier applied to bare 3-digit class codes.
pub const CLASS_SHIFT: i64 = 1_000_000;

/// Widens a bare 3-digit class (`100..=999`) into a full code.
///
/// Any other value is returned unchanged.
#[must_use]
pub const fn normalize_code(code: i64) -> i64 {
    if code >= 100 && code <= 999 {
        code * CLASS_SHIFT
    } else {
        code
    }
}

/// Returns the status class of `code`: the integer formed by the first
/// three characters of its decimal form, or `0` when that form is shorter
/// than three characters.
#[must_use]
pub fn status_class(code: i64) -> i64 {
    let digits = code.to_string();
    digits
        .get(..3)
        .and_then(|head| head.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn normalize_widens_three_digit_codes() {
        assert_eq!(normalize_code(404), 404_000_000);
        assert_eq!(normalize_code(100), 100_000_000);
        assert_eq!(normalize_code(999), 999_000_000);
    }

    #[test]
    fn normalize_keeps_other_codes() {
        assert_eq!(normalize_code(99), 99);
        assert_eq!(normalize_code(1000), 1000);
        assert_eq!(normalize_code(404_000_001), 404_000_001);
        assert_eq!(normalize_code(-404), -404);
    }

    #[test]
    fn class_of_normalized_code() {
        assert_eq!(status_class(404_000_001), 404);
        assert_eq!(status_class(500_999_001), 500);
    }

    #[test]
    fn class_of_short_code_is_zero() {
        assert_eq!(status_class(10), 0);
        assert_eq!(status_class(0), 0);
        assert_eq!(status_class(-9), 0);
    }

    #[test]
    fn class_takes_leading_characters_of_negative_codes() {
        assert_eq!(status_class(-404), -40);
    }

    proptest! {
        #[test]
        fn three_digit_code_round_trips_through_class(code in 100_i64..=999) {
            prop_assert_eq!(status_class(normalize_code(code)), code);
        }

        #[test]
        fn codes_under_three_digits_have_no_class(code in -9_i64..=99) {
            prop_assert_eq!(status_class(code), 0);
        }

        #[test]
        fn class_is_total(code in any::<i64>()) {
            let _ = status_class(code);
        }
    }
}
