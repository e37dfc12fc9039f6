use serde::{Deserialize, Serialize};

use crate::core::clock::GameClock;

/// Which of the two drive files a record came from.
///
/// The home team drives left-to-right on the chart, the road team
/// right-to-left, regardless of which end they actually defended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Home,
    Road,
}

/// Categorical outcome of a drive, parsed from the result column.
///
/// Labels not in the known set are preserved verbatim so charts degrade to
/// first-letter markers instead of failing on unusual box scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveResult {
    FieldGoal,
    MissedFieldGoal,
    Touchdown,
    Interception,
    Fumble,
    Punt,
    EndOfHalf,
    EndOfGame,
    Downs,
    Safety,
    Other(String),
}

impl DriveResult {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Field Goal" => Self::FieldGoal,
            "Missed FG" => Self::MissedFieldGoal,
            "Touchdown" => Self::Touchdown,
            "Interception" => Self::Interception,
            "Fumble" => Self::Fumble,
            "Punt" => Self::Punt,
            "End of Half" => Self::EndOfHalf,
            "End of Game" => Self::EndOfGame,
            "Downs" => Self::Downs,
            "Safety" => Self::Safety,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The label as it appears in drive files.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::FieldGoal => "Field Goal",
            Self::MissedFieldGoal => "Missed FG",
            Self::Touchdown => "Touchdown",
            Self::Interception => "Interception",
            Self::Fumble => "Fumble",
            Self::Punt => "Punt",
            Self::EndOfHalf => "End of Half",
            Self::EndOfGame => "End of Game",
            Self::Downs => "Downs",
            Self::Safety => "Safety",
            Self::Other(label) => label,
        }
    }

    /// One-character result marker for the text chart.
    ///
    /// `Field Goal` and `End of Half` override the first-letter rule so they
    /// do not collide with `Fumble` and `End of Game`.
    #[must_use]
    pub fn text_glyph(&self) -> char {
        match self {
            Self::FieldGoal => 'G',
            Self::EndOfHalf => 'H',
            other => other.label().chars().next().unwrap_or(' '),
        }
    }

    /// Short label used inside graphical drive-box annotations.
    #[must_use]
    pub fn box_abbrev(&self) -> String {
        match self {
            Self::FieldGoal => "FG".to_owned(),
            Self::MissedFieldGoal => "MISS FG".to_owned(),
            Self::Touchdown => "TD".to_owned(),
            Self::Interception => "INT".to_owned(),
            Self::Fumble => "FUM".to_owned(),
            Self::Punt => "PUNT".to_owned(),
            Self::EndOfHalf => "HALF".to_owned(),
            Self::EndOfGame => "END".to_owned(),
            Self::Downs => "DOWNS".to_owned(),
            Self::Safety => "SAF".to_owned(),
            Self::Other(label) => label.chars().take(1).collect(),
        }
    }
}

/// Formats net yardage the way drive summaries read: losses parenthesized,
/// so `-7` renders as `(7)`.
#[must_use]
pub fn net_yards_display(net_yards: i32) -> String {
    if net_yards < 0 {
        format!("({})", net_yards.unsigned_abs())
    } else {
        net_yards.to_string()
    }
}

/// One possession, normalized onto the unified 0-100 field scale.
///
/// Yard lines run 0 (home goal line) to 100 (road goal line). Zero-play
/// ghost drives carry `-1` in both yard-line fields; use [`Self::field_span`]
/// to get validated coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveRecord {
    pub quarter: u32,
    /// Time remaining in the quarter when the drive started.
    pub start_clock: GameClock,
    /// Seconds since kickoff, the global ordering key.
    pub elapsed_game_seconds: u32,
    /// Offense team code, e.g. `NWE`.
    pub offense: String,
    pub side: TeamSide,
    pub plays: u32,
    /// Wall-clock duration of the drive.
    pub duration: GameClock,
    pub net_yards: i32,
    pub result: DriveResult,
    /// Raw line-of-scrimmage descriptor as exported, e.g. `NWE 25`.
    pub line_of_scrimmage: Option<String>,
    pub start_yard_line: i32,
    pub end_yard_line: i32,
    pub comment: Option<String>,
}

impl DriveRecord {
    /// True for zero-play administrative rows such as an end-of-half kickoff.
    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.plays == 0
    }

    /// Start and end yard lines, or `None` for ghost drives whose yard-line
    /// fields hold the `-1` sentinel.
    #[must_use]
    pub fn field_span(&self) -> Option<(i32, i32)> {
        if self.is_ghost() {
            None
        } else {
            Some((self.start_yard_line, self.end_yard_line))
        }
    }

    /// `plays-net duration` stats string used in drive-box labels.
    #[must_use]
    pub fn stats_display(&self) -> String {
        format!(
            "{}-{} {}",
            self.plays,
            net_yards_display(self.net_yards),
            self.duration
        )
    }
}
