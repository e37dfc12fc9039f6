use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DriveChartError, DriveChartResult};

/// Seconds in one quarter of regulation play. Overtime periods reuse the same
/// span so elapsed-time ordering stays monotonic across the whole game.
pub const QUARTER_SECONDS: u32 = 900;

/// A whole-second game-clock value parsed from an `mm:ss` field.
///
/// Clock fields appear twice per drive row: the time remaining in the quarter
/// when the drive started, and the wall-clock duration of the drive itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameClock {
    seconds: u32,
}

impl GameClock {
    pub const ZERO: Self = Self { seconds: 0 };

    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Parses a strict `mm:ss` clock field, e.g. `12:05` or `0:47`.
    pub fn parse(text: &str) -> DriveChartResult<Self> {
        let Some((minutes, seconds)) = text.split_once(':') else {
            return Err(DriveChartError::InvalidData(format!(
                "clock field `{text}` is not in mm:ss form"
            )));
        };
        let minutes: u32 = minutes.parse().map_err(|_| {
            DriveChartError::InvalidData(format!("clock field `{text}` has a non-numeric minute part"))
        })?;
        let seconds: u32 = seconds.parse().map_err(|_| {
            DriveChartError::InvalidData(format!("clock field `{text}` has a non-numeric second part"))
        })?;
        if seconds >= 60 {
            return Err(DriveChartError::InvalidData(format!(
                "clock field `{text}` has more than 59 seconds"
            )));
        }
        Ok(Self { seconds: minutes * 60 + seconds })
    }

    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.seconds == 0
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

/// Converts a quarter number and time-remaining into seconds elapsed since
/// kickoff. A drive starting in Q2 with 10:00 left maps to 1200.
///
/// The result is used only for ordering, so out-of-range inputs saturate
/// instead of failing.
#[must_use]
pub fn elapsed_game_seconds(quarter: u32, clock_remaining: GameClock) -> u32 {
    let total = u64::from(quarter) * u64::from(QUARTER_SECONDS);
    let elapsed = total.saturating_sub(u64::from(clock_remaining.seconds()));
    u32::try_from(elapsed).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_zero_free_minutes() {
        let clock = GameClock::parse("2:15").expect("clock should parse");
        assert_eq!(clock.seconds(), 135);
    }

    #[test]
    fn parses_double_digit_minutes() {
        let clock = GameClock::parse("12:05").expect("clock should parse");
        assert_eq!(clock.seconds(), 725);
    }

    #[test]
    fn rejects_missing_colon() {
        assert!(GameClock::parse("815").is_err());
    }

    #[test]
    fn rejects_second_overflow() {
        assert!(GameClock::parse("3:60").is_err());
    }

    #[test]
    fn displays_zero_padded_seconds() {
        assert_eq!(GameClock::from_seconds(125).to_string(), "2:05");
        assert_eq!(GameClock::ZERO.to_string(), "0:00");
    }

    #[test]
    fn elapsed_time_counts_from_kickoff() {
        let clock = GameClock::parse("10:00").expect("clock should parse");
        assert_eq!(elapsed_game_seconds(2, clock), 1200);
    }

    #[test]
    fn elapsed_time_saturates_instead_of_underflowing() {
        let clock = GameClock::parse("20:00").expect("clock should parse");
        assert_eq!(elapsed_game_seconds(1, clock), 0);
    }
}
