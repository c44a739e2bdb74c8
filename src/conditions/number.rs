//! Failure conditions for numeric comparisons.

/// Fails when `value` is greater than `compare`.
pub fn is_greater_than<N: PartialOrd>(value: N, compare: N) -> bool {
    value > compare
}

/// Fails when `value` is less than `compare`.
pub fn is_less_than<N: PartialOrd>(value: N, compare: N) -> bool {
    value < compare
}

pub fn is_equal_to<N: PartialEq>(value: N, compare: N) -> bool {
    value == compare
}

pub fn is_not_equal_to<N: PartialEq>(value: N, compare: N) -> bool {
    !is_equal_to(value, compare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons() {
        assert!(is_greater_than(2.5, 1.0));
        assert!(!is_greater_than(1, 1));
        assert!(is_less_than(-1, 0));
        assert!(!is_less_than(0, 0));
        assert!(is_equal_to(3u8, 3u8));
        assert!(is_not_equal_to(3, 4));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(is_not_equal_to(f64::NAN, f64::NAN));
        assert!(!is_greater_than(f64::NAN, 0.0));
    }
}
