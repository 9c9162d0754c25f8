use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::errors::{SihraError, SihraResult};

/// Wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Builds a time from minutes since midnight. Values past the end of
    /// the day saturate to 23:59.
    pub const fn from_minutes(minutes: u16) -> Self {
        if minutes >= Self::MINUTES_PER_DAY {
            ClockTime(Self::MINUTES_PER_DAY - 1)
        } else {
            ClockTime(minutes)
        }
    }

    /// Builds a time from hours and minutes, saturating like
    /// [`ClockTime::from_minutes`].
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self::from_minutes(hour.saturating_mul(60).saturating_add(minute))
    }

    /// Parse `HH:MM` (24h). A trailing `:SS` is accepted and dropped.
    pub fn parse(value: &str) -> SihraResult<Self> {
        let trimmed = value.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| SihraError::Validation(format!("Invalid time of day: {:?}", value)))?;

        Ok(Self::from_hm(time.hour() as u16, time.minute() as u16))
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SihraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("07:00", 420)]
    #[case("08:30", 510)]
    #[case("14:00", 840)]
    #[case("23:59", 1439)]
    #[case(" 9:15 ", 555)]
    #[case("10:45:00", 645)]
    fn test_parse_minutes(#[case] input: &str, #[case] minutes: u16) {
        assert_eq!(ClockTime::parse(input).unwrap().minutes(), minutes);
    }

    #[rstest]
    #[case("")]
    #[case("noon")]
    #[case("25:00")]
    #[case("12:61")]
    #[case("1200")]
    fn test_parse_rejects_garbage(#[case] input: &str) {
        assert!(matches!(
            ClockTime::parse(input),
            Err(SihraError::Validation(_))
        ));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(ClockTime::from_hm(7, 5).to_string(), "07:05");
        assert_eq!(ClockTime::from_minutes(5000).to_string(), "23:59");
    }

    #[test]
    fn test_from_hm_saturates() {
        assert_eq!(ClockTime::from_hm(1100, 0).minutes(), ClockTime::MINUTES_PER_DAY - 1);
        assert_eq!(ClockTime::from_hm(u16::MAX, u16::MAX).to_string(), "23:59");
        assert_eq!(ClockTime::from_hm(23, 59).minutes(), 1439);
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&ClockTime::from_hm(9, 0)).unwrap();
        assert_eq!(json, "\"09:00\"");
    }
}
