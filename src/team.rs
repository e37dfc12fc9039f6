//! Team metadata: display nicknames and colors keyed by Pro Football
//! Reference team code.

use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DriveChartError, DriveChartResult};

/// Primary and secondary display colors as `#RRGGBB` strings.
///
/// The primary color fills end zones and drive boxes; the secondary draws
/// end-zone lettering and box outlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
}

impl TeamColors {
    /// Swaps primary and secondary, the manual escape hatch for matchups
    /// whose primary colors are too close to tell apart.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.primary, &mut self.secondary);
    }
}

/// Display metadata for one team code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub nickname: String,
    pub colors: TeamColors,
}

/// Code, nickname, primary, secondary. Relocated franchises appear under
/// both their current and retired codes so historical box scores resolve.
const BUILTIN_TEAMS: &[(&str, &str, &str, &str)] = &[
    ("NWE", "Patriots", "#002244", "#B0B7BC"),
    ("BAL", "Ravens", "#241773", "#9E7C0C"),
    ("BUF", "Bills", "#00338D", "#C60C30"),
    ("CIN", "Bengals", "#FB4F14", "#000000"),
    ("CLE", "Browns", "#311D00", "#FF3C00"),
    ("DEN", "Broncos", "#FB4F14", "#002244"),
    ("HOU", "Texans", "#03202F", "#A71930"),
    ("IND", "Colts", "#002C5F", "#A2AAAD"),
    ("JAX", "Jaguars", "#D7A22A", "#006778"),
    ("KAN", "Chiefs", "#E31837", "#FFB81C"),
    ("LAC", "Chargers", "#0080C6", "#FFC20E"),
    ("SDG", "Chargers", "#0080C6", "#FFC20E"),
    ("LVR", "Raiders", "#000000", "#A5ACAF"),
    ("OAK", "Raiders", "#000000", "#A5ACAF"),
    ("MIA", "Dolphins", "#008E97", "#FC4C02"),
    ("NYJ", "Jets", "#125740", "#000000"),
    ("PIT", "Steelers", "#101820", "#FFB612"),
    ("TEN", "Titans", "#0C2340", "#4B92DB"),
    ("ARI", "Cardinals", "#97233F", "#000000"),
    ("ATL", "Falcons", "#A71930", "#000000"),
    ("CAR", "Panthers", "#0085CA", "#101820"),
    ("CHI", "Bears", "#0B162A", "#C83803"),
    ("DAL", "Cowboys", "#041E42", "#869397"),
    ("DET", "Lions", "#0076B6", "#B0B7BC"),
    ("GNB", "Packers", "#203731", "#FFB612"),
    ("LAR", "Rams", "#003594", "#FFA300"),
    ("STL", "Rams", "#002244", "#866D4B"),
    ("MIN", "Vikings", "#4F2683", "#FFC62F"),
    ("NOR", "Saints", "#101820", "#D3BC8D"),
    ("NYG", "Giants", "#0B2265", "#A71930"),
    ("PHI", "Eagles", "#004C54", "#ACC0C6"),
    ("SEA", "Seahawks", "#002244", "#69BE28"),
    ("SFO", "49ers", "#AA0000", "#B3995D"),
    ("TAM", "Buccaneers", "#FF7900", "#34302B"),
    ("WAS", "Commanders", "#5A1414", "#FFB612"),
];

/// Insertion-ordered directory of team metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamDirectory {
    teams: IndexMap<String, TeamInfo>,
}

impl TeamDirectory {
    /// The built-in table: every PFR code from the 2000 season onward.
    #[must_use]
    pub fn builtin() -> Self {
        let mut teams = IndexMap::with_capacity(BUILTIN_TEAMS.len());
        for (code, nickname, primary, secondary) in BUILTIN_TEAMS {
            teams.insert(
                (*code).to_owned(),
                TeamInfo {
                    nickname: (*nickname).to_owned(),
                    colors: TeamColors {
                        primary: (*primary).to_owned(),
                        secondary: (*secondary).to_owned(),
                    },
                },
            );
        }
        Self { teams }
    }

    /// Loads a replacement table from JSON, keyed by team code.
    pub fn from_json_reader(reader: impl Read) -> DriveChartResult<Self> {
        let directory: Self = serde_json::from_reader(reader).map_err(|err| {
            DriveChartError::InvalidData(format!("failed to parse team table: {err}"))
        })?;
        debug!(count = directory.len(), "loaded team table");
        Ok(directory)
    }

    pub fn insert(&mut self, code: impl Into<String>, info: TeamInfo) {
        self.teams.insert(code.into(), info);
    }

    /// Looks up a team code, failing with [`DriveChartError::UnknownTeam`]
    /// so bad codes surface before any layout work.
    pub fn resolve(&self, code: &str) -> DriveChartResult<&TeamInfo> {
        self.teams
            .get(code)
            .ok_or_else(|| DriveChartError::UnknownTeam(code.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.teams.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }
}
