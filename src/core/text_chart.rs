//! Fixed-width text twin of the graphical chart.
//!
//! Every drive becomes one line over a one-column-per-yard field track, with
//! an arrow character on the start yard line pointing the direction of travel
//! and the result glyph on the end yard line.

use crate::core::drive::{DriveRecord, TeamSide, net_yards_display};

/// Header columns framing the quarter, team, play summary, duration and
/// start-clock fields of each drive line.
pub const DC_PREFIX: &str = " Q TM      P-YD TIME [START] ";

/// Field track between the end-zone columns, one character per yard with a
/// tick every five. Yard 0 shares the home abbreviation's last column and
/// yard 100 the road abbreviation's first, so the track itself is 99 wide.
pub const FIELD_TRACK: &str =
    "....'....|....'....|....'....|....'....|....'....|....'....|....'....|....'....|....'....|....'....";

/// Yard numbers aligned over the track columns.
const YARD_MARKS: &str =
    "        1 0       2 0       3 0       4 0       5 0       4 0       3 0       2 0       1 0        ";

/// Ruler line carrying the yard numbers, indented past the prefix and the
/// home end-zone column.
#[must_use]
pub fn yard_marker_line(home_abbrev: &str) -> String {
    let indent = DC_PREFIX.chars().count() + home_abbrev.chars().count();
    format!("{}{}", " ".repeat(indent), YARD_MARKS)
}

/// Column-header line with the home end zone on the left and the road end
/// zone on the right.
#[must_use]
pub fn header_line(road_abbrev: &str, home_abbrev: &str) -> String {
    format!("{DC_PREFIX}{home_abbrev}{FIELD_TRACK}{road_abbrev}")
}

/// One chart line for a merged drive record.
///
/// Ghost drives keep their stats prefix but leave the track blank. The drive
/// lane is spliced over the columns between the start and end yard lines, so
/// backward drives overwrite leftward just like forward ones.
#[must_use]
pub fn drive_line(record: &DriveRecord, home_abbrev: &str) -> String {
    let summary = format!(
        "{}-{}",
        record.plays,
        net_yards_display(record.net_yards)
    );
    let prefix = format!(
        "{:>2} {:>2}: {:>7} {:>4} [{:>4}]",
        record.quarter, record.offense, summary, record.duration, record.start_clock
    );

    let home_columns = home_abbrev.chars().count();
    let mut cells: Vec<char> = prefix.chars().collect();
    cells.extend(std::iter::repeat(' ').take(2 * home_columns + FIELD_TRACK.chars().count()));

    if let Some((start, end)) = record.field_span() {
        let glyph = record.result.text_glyph();
        let dashes = "-".repeat((end - start).unsigned_abs().saturating_sub(1) as usize);
        let lane = match record.side {
            TeamSide::Home => {
                if end >= start {
                    format!(">{dashes}{glyph}")
                } else {
                    format!("{glyph}{dashes}>")
                }
            }
            TeamSide::Road => {
                if start >= end {
                    format!("{glyph}{dashes}<")
                } else {
                    format!("<{dashes}{glyph}")
                }
            }
        };

        // Yard y sits at column (prefix + home abbrev - 1) + y.
        let base = (DC_PREFIX.chars().count() + home_columns) as i64 - 1;
        let low = usize::try_from(base + i64::from(start.min(end))).unwrap_or(0);
        let high = usize::try_from(base + i64::from(start.max(end))).unwrap_or(0);
        let splice_start = low.min(cells.len());
        let splice_end = (high + 1).min(cells.len());
        cells.splice(splice_start..splice_end, lane.chars());
    }

    cells.into_iter().collect()
}

/// Renders the complete text chart: ruler, header, one line per drive.
#[must_use]
pub fn render_text_chart(
    records: &[DriveRecord],
    road_abbrev: &str,
    home_abbrev: &str,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(yard_marker_line(home_abbrev));
    lines.push(header_line(road_abbrev, home_abbrev));
    for record in records {
        lines.push(drive_line(record, home_abbrev));
    }
    lines
}
