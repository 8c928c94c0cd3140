/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Mean of `total / count`, or 0 when there is nothing to average
pub fn mean_or_zero(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Round to the nearest 0.5 step
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(3.14159), 3.1);
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(f64::NAN), 0.0);
    }

    #[test]
    fn test_mean_or_zero() {
        assert_eq!(mean_or_zero(10.0, 4), 2.5);
        assert_eq!(mean_or_zero(10.0, 0), 0.0);
    }

    #[test]
    fn test_round_to_half() {
        assert_eq!(round_to_half(3.5), 3.5);
        assert_eq!(round_to_half(3.74), 3.5);
        assert_eq!(round_to_half(3.75), 4.0);
    }
}
