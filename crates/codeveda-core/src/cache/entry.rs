use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored document plus its write and expiry times (epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T = Value> {
    pub data: T,
    pub timestamp: i64,
    pub expires: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, now_millis: i64, ttl: Duration) -> Self {
        Self {
            data,
            timestamp: now_millis,
            expires: now_millis.saturating_add(ttl.num_milliseconds()),
        }
    }

    /// Fresh up to and including the expiry instant.
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis > self.expires
    }

    pub fn age_minutes(&self, now_millis: i64) -> i64 {
        (now_millis - self.timestamp) / 60_000
    }

    pub fn age_display(&self, now_millis: i64) -> String {
        let minutes = self.age_minutes(now_millis);
        if minutes < 1 {
            // Also covers clock skew (negative ages)
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            let remaining_mins = minutes % 60;
            if remaining_mins >= 30 {
                // Round up: 1h 30m+ becomes 2h
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            let remaining_hours = (minutes % 1440) / 60;
            if remaining_hours >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOUR_MS: i64 = 60 * 60 * 1000;

    #[test]
    fn test_expiry_is_timestamp_plus_ttl() {
        let entry = CacheEntry::new(json!([1]), 1_000, Duration::hours(24));
        assert_eq!(entry.timestamp, 1_000);
        assert_eq!(entry.expires, 1_000 + 24 * HOUR_MS);
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = CacheEntry::new((), i64::MAX - 10, Duration::hours(1));
        assert_eq!(entry.expires, i64::MAX);
        assert!(!entry.is_expired(i64::MAX));
    }

    #[test]
    fn test_is_expired_boundary() {
        let entry = CacheEntry::new(json!(null), 0, Duration::milliseconds(100));
        assert!(!entry.is_expired(99));
        assert!(!entry.is_expired(100));
        assert!(entry.is_expired(101));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = CacheEntry::new(json!({"posts": []}), 5, Duration::milliseconds(10));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"data": {"posts": []}, "timestamp": 5, "expires": 15}));
    }

    #[test]
    fn test_age_display() {
        let entry = CacheEntry::new((), 0, Duration::hours(24));
        assert_eq!(entry.age_display(-5_000), "just now");
        assert_eq!(entry.age_display(30_000), "just now");
        assert_eq!(entry.age_display(5 * 60_000), "5m ago");
        assert_eq!(entry.age_display(HOUR_MS + 29 * 60_000), "1h ago");
        assert_eq!(entry.age_display(HOUR_MS + 30 * 60_000), "2h ago");
        assert_eq!(entry.age_display(24 * HOUR_MS + 13 * HOUR_MS), "2d ago");
    }
}
