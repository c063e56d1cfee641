/// Most decimal places [`round_to`] keeps. An `f64` holds about 15 significant
/// digits, so more places change nothing.
pub const MAX_DECIMALS: u32 = 15;

/// Rounds half away from zero to `decimals` places, at most [`MAX_DECIMALS`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_one_decimal() {
        assert_eq!(round_to(60.0, 1), 60.0);
        assert_eq!(round_to(10.666_666, 1), 10.7);
        assert_eq!(round_to(2.25, 1), 2.3);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(99.5, 0), 100.0);
        assert_eq!(round_to(33.333, 0), 33.0);
    }

    #[test]
    fn test_large_precision_is_capped() {
        for decimals in [MAX_DECIMALS, 17, 309, 400, 3_000_000_000, u32::MAX] {
            assert_eq!(round_to(30.0, decimals), 30.0, "{decimals} decimals");
            assert!(round_to(100.0 / 3.0, decimals).is_finite());
        }
    }
}
