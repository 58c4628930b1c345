use chrono::{DateTime, Utc};
use std::time;

/// Default lifetime used by [`is_expired`] callers: one day.
pub const DEFAULT_EXPIRY_SECONDS: i64 = 86_400;

/// Whether `date` plus `expire_seconds` is at or before `now`, in whole seconds.
pub fn is_expired_at(date: DateTime<Utc>, expire_seconds: i64, now: DateTime<Utc>) -> bool {
    date.timestamp().saturating_add(expire_seconds) <= now.timestamp()
}

/// Whether `date` plus `expire_seconds` is at or before the current time.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use dynamodb_lambda_kit::helpers::time;
///
/// let ten_seconds_ago = Utc.timestamp_opt(Utc::now().timestamp() - 10, 0).unwrap();
/// assert!(time::is_expired(ten_seconds_ago, 5));
/// assert!(!time::is_expired(ten_seconds_ago, 20));
/// ```
pub fn is_expired(date: DateTime<Utc>, expire_seconds: i64) -> bool {
    is_expired_at(date, expire_seconds, Utc::now())
}

/// Suspend the calling task for `ms` milliseconds.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(time::Duration::from_millis(ms)).await;
}
