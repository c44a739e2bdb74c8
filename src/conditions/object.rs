//! Failure conditions for arbitrary values.

/// Fails when `value` equals its type's default.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
