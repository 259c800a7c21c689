use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const MICROS_PER_SECOND: i64 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Unit of a duration passed to [`ArgsBuilder::expiry_in`].
///
/// [`ArgsBuilder::expiry_in`]: crate::ArgsBuilder::expiry_in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Billionths of a second.
    Nanoseconds,
    /// Millionths of a second.
    Microseconds,
    /// Thousandths of a second.
    Milliseconds,
    /// Whole seconds.
    Seconds,
    /// 60 seconds.
    Minutes,
    /// 3600 seconds.
    Hours,
    /// 86400 seconds.
    Days,
}

impl TimeUnit {
    /// Converts `duration` in this unit to whole seconds.
    ///
    /// Sub-second units truncate toward zero and never round up. Coarser
    /// units saturate at `i64::MIN` / `i64::MAX` instead of overflowing.
    pub const fn to_seconds(self, duration: i64) -> i64 {
        match self {
            Self::Nanoseconds => duration / NANOS_PER_SECOND,
            Self::Microseconds => duration / MICROS_PER_SECOND,
            Self::Milliseconds => duration / MILLIS_PER_SECOND,
            Self::Seconds => duration,
            Self::Minutes => duration.saturating_mul(SECONDS_PER_MINUTE),
            Self::Hours => duration.saturating_mul(SECONDS_PER_HOUR),
            Self::Days => duration.saturating_mul(SECONDS_PER_DAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds_truncates() {
        assert_eq!(TimeUnit::Milliseconds.to_seconds(1_999), 1);
        assert_eq!(TimeUnit::Milliseconds.to_seconds(999), 0);
        assert_eq!(TimeUnit::Microseconds.to_seconds(2_500_000), 2);
        assert_eq!(TimeUnit::Nanoseconds.to_seconds(999_999_999), 0);
        assert_eq!(TimeUnit::Milliseconds.to_seconds(-1_500), -1);
    }

    #[test]
    fn test_to_seconds_scales() {
        assert_eq!(TimeUnit::Seconds.to_seconds(42), 42);
        assert_eq!(TimeUnit::Minutes.to_seconds(2), 120);
        assert_eq!(TimeUnit::Hours.to_seconds(1), 3_600);
        assert_eq!(TimeUnit::Days.to_seconds(7), 604_800);
    }

    #[test]
    fn test_to_seconds_saturates() {
        assert_eq!(TimeUnit::Days.to_seconds(i64::MAX), i64::MAX);
        assert_eq!(TimeUnit::Hours.to_seconds(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeUnit::Milliseconds.to_string(), "milliseconds");
        let name: &str = TimeUnit::Days.as_ref();
        assert_eq!(name, "days");
    }
}
