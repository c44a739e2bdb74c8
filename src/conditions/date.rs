//! Failure conditions for timestamps.

use chrono::{DateTime, Utc};

/// Fails when `value` lies in the future (pure apart from reading the clock).
pub fn is_future_date(value: DateTime<Utc>) -> bool {
    value > Utc::now()
}

pub fn is_before(value: DateTime<Utc>, compare: DateTime<Utc>) -> bool {
    value < compare
}

pub fn is_after(value: DateTime<Utc>, compare: DateTime<Utc>) -> bool {
    value > compare
}

/// Fails when `value` was never set, i.e. is the Unix epoch default.
pub fn is_default_date(value: DateTime<Utc>) -> bool {
    value == DateTime::<Utc>::default()
}
