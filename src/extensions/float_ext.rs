/// Rounding helpers for floating point values.
pub trait RoundToDecimals {
    /// Rounds `self` to `decimals` decimal places, halfway cases away from zero.
    fn round_to(self, decimals: u32) -> Self;
}

macro_rules! impl_round_to_decimals {
    ($($t:ty)*) => ($(
        impl RoundToDecimals for $t {
            fn round_to(self, decimals: u32) -> $t {
                let factor = (10 as $t).powi(decimals as i32);
                (self * factor).round() / factor
            }
        }
    )*)
}

impl_round_to_decimals! { f32 f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(12.119726736095688, 12.1)]
    #[case(18.0, 18.0)]
    #[case(0.05, 0.1)]
    #[case(-0.05, -0.1)]
    #[case(3.14159, 3.1)]
    #[case(0.0, 0.0)]
    fn round_f64_to_one_decimal(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(input.round_to(1), expected);
    }

    #[rstest]
    #[case(1244.5, 1245.0)]
    #[case(2.71828, 3.0)]
    fn round_f64_to_zero_decimals(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(input.round_to(0), expected);
    }

    #[rstest]
    #[case(25.46, 25.5)]
    #[case(1.04, 1.0)]
    fn round_f32_to_one_decimal(#[case] input: f32, #[case] expected: f32) {
        assert_eq!(input.round_to(1), expected);
    }
}
