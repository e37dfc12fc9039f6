use crate::core::drive::DriveRecord;

/// Header row of the merged-drive summary table.
pub const SUMMARY_HEADER: &str = "Team,Q,StartTime,StartYardline,Plays,Time,Yards,Result";

/// One comma-separated summary row, echoing the normalized record with the
/// line of scrimmage as originally exported.
#[must_use]
pub fn summary_row(record: &DriveRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        record.offense,
        record.quarter,
        record.start_clock,
        record.line_of_scrimmage.as_deref().unwrap_or(""),
        record.plays,
        record.duration,
        record.net_yards,
        record.result.label()
    )
}

/// Summary rows for a merged sequence, in chart order.
#[must_use]
pub fn summary_rows(records: &[DriveRecord]) -> Vec<String> {
    records.iter().map(summary_row).collect()
}
