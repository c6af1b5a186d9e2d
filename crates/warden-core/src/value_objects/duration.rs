//! Moderation duration parsing
//!
//! Moderators type durations as `"30s"`, `"5m"`, `"2h"`, `"1d"`. The platform
//! caps communication timeouts at 28 days; clamping to that cap is explicit so
//! the command layer can tell the moderator their request was shortened.

use std::fmt;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// A validated, positive moderation duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeoutDuration(Duration);

impl TimeoutDuration {
    /// Platform maximum for a communication timeout: 28 days
    pub const MAX: Self = Self(Duration::from_secs(28 * SECS_PER_DAY));

    /// Duration applied by the automatic timeout escalation
    pub const HOUR: Self = Self(Duration::from_secs(SECS_PER_HOUR));

    /// Parse a duration string of the form `<number><s|m|h|d>`
    pub fn parse(input: &str) -> Result<Self, DurationParseError> {
        let input = input.trim();
        let Some(unit) = input.chars().last() else {
            return Err(DurationParseError::Empty);
        };

        let per_unit = match unit {
            's' => 1,
            'm' => SECS_PER_MINUTE,
            'h' => SECS_PER_HOUR,
            'd' => SECS_PER_DAY,
            _ => return Err(DurationParseError::InvalidSuffix(input.to_string())),
        };

        let number = &input[..input.len() - 1];
        let count: u64 = number
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(input.to_string()))?;

        if count == 0 {
            return Err(DurationParseError::NonPositive);
        }

        let secs = count
            .checked_mul(per_unit)
            .ok_or_else(|| DurationParseError::InvalidNumber(input.to_string()))?;

        Ok(Self(Duration::from_secs(secs)))
    }

    /// Clamp to the platform maximum; the bool reports whether clamping
    /// occurred
    pub fn clamp_to_max(self) -> (Self, bool) {
        if self > Self::MAX {
            (Self::MAX, true)
        } else {
            (self, false)
        }
    }

    /// Total seconds
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0.as_secs()
    }

    /// Instant at which this duration, started at `from`, expires
    pub fn expires_at(&self, from: chrono::DateTime<chrono::Utc>) -> chrono::DateTime<chrono::Utc> {
        from + chrono::Duration::seconds(self.as_secs() as i64)
    }
}

impl From<TimeoutDuration> for Duration {
    fn from(d: TimeoutDuration) -> Self {
        d.0
    }
}

// Rendered in the largest unit that divides evenly, matching what a
// moderator would have typed.
impl fmt::Display for TimeoutDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.as_secs();
        if secs % SECS_PER_DAY == 0 {
            write!(f, "{}d", secs / SECS_PER_DAY)
        } else if secs % SECS_PER_HOUR == 0 {
            write!(f, "{}h", secs / SECS_PER_HOUR)
        } else if secs % SECS_PER_MINUTE == 0 {
            write!(f, "{}m", secs / SECS_PER_MINUTE)
        } else {
            write!(f, "{secs}s")
        }
    }
}

/// Error when parsing a duration string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,

    #[error("invalid duration '{0}': expected a number followed by s, m, h, or d")]
    InvalidSuffix(String),

    #[error("invalid duration '{0}': the number part is not a valid integer")]
    InvalidNumber(String),

    #[error("duration must be positive")]
    NonPositive,
}
