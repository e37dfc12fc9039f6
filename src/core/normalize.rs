use tracing::debug;

use crate::core::clock::{GameClock, elapsed_game_seconds};
use crate::core::drive::{DriveRecord, DriveResult, TeamSide};
use crate::error::{DriveChartError, DriveChartResult};

/// Start yard line assumed when the line-of-scrimmage field is blank.
pub const DEFAULT_START_YARD_LINE: i32 = 50;
/// Sentinel stored in both yard-line fields of zero-play ghost drives.
pub const GHOST_YARD_LINE: i32 = -1;

const COL_QUARTER: usize = 1;
const COL_CLOCK: usize = 2;
const COL_LOS: usize = 3;
const COL_PLAYS: usize = 4;
const COL_DURATION: usize = 5;
const COL_NET_YARDS: usize = 6;
const COL_RESULT: usize = 7;
const COL_COMMENT: usize = 8;

/// One structurally valid drive-file row, split into fields and tagged with
/// its 1-based source line number for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDriveRow {
    pub line_number: usize,
    pub fields: Vec<String>,
}

/// Team attribution for one drive file being normalized.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    /// Team code on offense for every row in this file.
    pub offense: &'a str,
    /// Home team code, used to orient line-of-scrimmage descriptors.
    pub home_code: &'a str,
    pub side: TeamSide,
}

fn field<'a>(row: &'a RawDriveRow, index: usize, name: &str) -> DriveChartResult<&'a str> {
    row.fields
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| DriveChartError::MalformedRecord {
            line: row.line_number,
            reason: format!("missing {name} column"),
        })
}

fn numeric_u32(row: &RawDriveRow, index: usize, name: &str) -> DriveChartResult<u32> {
    let raw = field(row, index, name)?;
    raw.trim()
        .parse()
        .map_err(|_| DriveChartError::MalformedRecord {
            line: row.line_number,
            reason: format!("{name} column `{raw}` is not a non-negative number"),
        })
}

fn numeric_i32(row: &RawDriveRow, index: usize, name: &str) -> DriveChartResult<i32> {
    let raw = field(row, index, name)?;
    raw.trim()
        .parse()
        .map_err(|_| DriveChartError::MalformedRecord {
            line: row.line_number,
            reason: format!("{name} column `{raw}` is not a number"),
        })
}

fn clock_field(row: &RawDriveRow, index: usize, name: &str) -> DriveChartResult<GameClock> {
    let raw = field(row, index, name)?;
    GameClock::parse(raw.trim()).map_err(|err| {
        let reason = match err {
            DriveChartError::InvalidData(reason) => reason,
            other => other.to_string(),
        };
        DriveChartError::MalformedRecord {
            line: row.line_number,
            reason: format!("{name}: {reason}"),
        }
    })
}

/// Converts a `TEAM yard` descriptor into the unified 0-100 scale, where 0 is
/// the home goal line. `NWE 25` reads as 25 when NWE is home, 75 otherwise.
fn start_yard_line(raw: &str, home_code: &str, line: usize) -> DriveChartResult<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_START_YARD_LINE);
    }
    let Some((code, yard)) = raw.split_once(' ') else {
        return Err(DriveChartError::MalformedRecord {
            line,
            reason: format!("line-of-scrimmage `{raw}` is not a `TEAM yard` descriptor"),
        });
    };
    let yard: i32 = yard
        .trim()
        .parse()
        .map_err(|_| DriveChartError::MalformedRecord {
            line,
            reason: format!("line-of-scrimmage `{raw}` has a non-numeric yard"),
        })?;
    if code == home_code { Ok(yard) } else { Ok(100 - yard) }
}

/// Normalizes one raw row into a [`DriveRecord`].
///
/// Yard lines land on the unified scale with the drive end derived from net
/// yardage: the home offense advances toward 100, the road offense toward 0.
/// Zero-play rows skip line-of-scrimmage parsing entirely and take the `-1`
/// ghost sentinels.
pub fn normalize_row(
    row: &RawDriveRow,
    context: &NormalizeContext<'_>,
) -> DriveChartResult<DriveRecord> {
    let quarter = numeric_u32(row, COL_QUARTER, "quarter")?;
    let start_clock = clock_field(row, COL_CLOCK, "start clock")?;
    let plays = numeric_u32(row, COL_PLAYS, "plays")?;
    let duration = clock_field(row, COL_DURATION, "duration")?;
    let net_yards = numeric_i32(row, COL_NET_YARDS, "net yards")?;
    let result = DriveResult::from_label(field(row, COL_RESULT, "result")?);

    let raw_los = field(row, COL_LOS, "line of scrimmage")?;
    let line_of_scrimmage = {
        let trimmed = raw_los.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };

    let (start, end) = if plays == 0 {
        (GHOST_YARD_LINE, GHOST_YARD_LINE)
    } else {
        let start = start_yard_line(raw_los, context.home_code, row.line_number)?;
        let end = match context.side {
            TeamSide::Home => start + net_yards,
            TeamSide::Road => start - net_yards,
        };
        (start, end)
    };

    let comment = row
        .fields
        .get(COL_COMMENT)
        .map(|raw| raw.trim())
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_owned);

    Ok(DriveRecord {
        quarter,
        start_clock,
        elapsed_game_seconds: elapsed_game_seconds(quarter, start_clock),
        offense: context.offense.to_owned(),
        side: context.side,
        plays,
        duration,
        net_yards,
        result,
        line_of_scrimmage,
        start_yard_line: start,
        end_yard_line: end,
        comment,
    })
}

/// Normalizes a whole drive file in order. The first malformed row aborts.
pub fn normalize_rows(
    rows: &[RawDriveRow],
    context: &NormalizeContext<'_>,
) -> DriveChartResult<Vec<DriveRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(normalize_row(row, context)?);
    }
    debug!(
        team = context.offense,
        count = records.len(),
        "normalized drive records"
    );
    Ok(records)
}
