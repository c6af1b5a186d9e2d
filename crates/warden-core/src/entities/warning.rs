//! Warning record entity
//!
//! Immutable once created: a ledger entry is never edited, only appended or
//! bulk-cleared with the rest of its subject's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Reason recorded when the moderator gave none
pub const DEFAULT_REASON: &str = "No reason provided";

/// A single warning issued to a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    pub reason: String,
    pub moderator: UserId,
    pub timestamp: DateTime<Utc>,
}

impl WarningRecord {
    /// Create a record stamped with the current instant, normalizing an
    /// absent or blank reason to [`DEFAULT_REASON`]
    pub fn new(moderator: UserId, reason: Option<&str>) -> Self {
        Self {
            reason: normalize_reason(reason),
            moderator,
            timestamp: Utc::now(),
        }
    }

    /// Create a record with an explicit timestamp
    pub fn at(moderator: UserId, reason: Option<&str>, timestamp: DateTime<Utc>) -> Self {
        Self {
            reason: normalize_reason(reason),
            moderator,
            timestamp,
        }
    }
}

fn normalize_reason(reason: Option<&str>) -> String {
    match reason.map(str::trim) {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => DEFAULT_REASON.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_kept_when_present() {
        let record = WarningRecord::new(UserId::new(1), Some("spam"));
        assert_eq!(record.reason, "spam");
    }

    #[test]
    fn test_reason_defaults_when_absent_or_blank() {
        assert_eq!(WarningRecord::new(UserId::new(1), None).reason, DEFAULT_REASON);
        assert_eq!(WarningRecord::new(UserId::new(1), Some("")).reason, DEFAULT_REASON);
        assert_eq!(WarningRecord::new(UserId::new(1), Some("   ")).reason, DEFAULT_REASON);
    }

    #[test]
    fn test_serialized_shape() {
        use chrono::TimeZone;

        let record = WarningRecord::at(
            UserId::new(111),
            Some("spam"),
            Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "reason": "spam",
                "moderator": 111,
                "timestamp": "2026-08-06T12:00:00Z"
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_timestamp_precision() {
        let record = WarningRecord::new(UserId::new(2), Some("flooding"));
        let json = serde_json::to_string(&record).unwrap();
        let back: WarningRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
