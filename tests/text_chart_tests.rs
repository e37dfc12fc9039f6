use drivechart_rs::core::text_chart::{
    DC_PREFIX, FIELD_TRACK, drive_line, header_line, render_text_chart, yard_marker_line,
};
use drivechart_rs::core::{DriveRecord, DriveResult, GameClock, TeamSide};

/// Column of yard line 0 for a three-letter home abbreviation.
const YARD_ZERO_COLUMN: usize = 31;

fn drive(side: TeamSide, start: i32, end: i32, net: i32, result: DriveResult) -> DriveRecord {
    DriveRecord {
        quarter: 2,
        start_clock: GameClock::parse("8:15").expect("start clock"),
        elapsed_game_seconds: 1305,
        offense: match side {
            TeamSide::Home => "NWE".to_owned(),
            TeamSide::Road => "ATL".to_owned(),
        },
        side,
        plays: 7,
        duration: GameClock::parse("3:30").expect("duration"),
        net_yards: net,
        result,
        line_of_scrimmage: None,
        start_yard_line: start,
        end_yard_line: end,
        comment: None,
    }
}

fn char_at(line: &str, index: usize) -> char {
    line.chars().nth(index).unwrap_or('?')
}

#[test]
fn ruler_and_header_frame_the_field() {
    let ruler = yard_marker_line("NWE");
    assert_eq!(ruler.chars().count(), DC_PREFIX.chars().count() + 3 + 99);
    assert!(ruler.starts_with(&" ".repeat(32)));
    assert_eq!(ruler.trim_start().chars().next(), Some('1'));

    let header = header_line("ATL", "NWE");
    assert_eq!(header, format!("{DC_PREFIX}NWE{FIELD_TRACK}ATL"));
}

#[test]
fn forward_home_drive_draws_a_rightward_lane() {
    let line = drive_line(
        &drive(TeamSide::Home, 20, 80, 60, DriveResult::Touchdown),
        "NWE",
    );

    assert!(line.starts_with(" 2 NWE:    7-60 3:30 [8:15]"));
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 20), '>');
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 80), 'T');
    assert_eq!(line.chars().skip(27).filter(|c| *c == '-').count(), 59);
}

#[test]
fn backward_home_drive_keeps_the_rightward_arrowhead() {
    let line = drive_line(&drive(TeamSide::Home, 40, 33, -7, DriveResult::Fumble), "NWE");

    // The lane covers the yards lost, reading back toward the start.
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 33), 'F');
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 40), '>');
    assert_eq!(line.chars().skip(27).filter(|c| *c == '-').count(), 6);
}

#[test]
fn forward_road_drive_draws_a_leftward_lane() {
    let line = drive_line(
        &drive(TeamSide::Road, 75, 30, 45, DriveResult::FieldGoal),
        "NWE",
    );

    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 30), 'G');
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 75), '<');
    assert_eq!(line.chars().skip(27).filter(|c| *c == '-').count(), 44);
}

#[test]
fn backward_road_drive_flips_the_arrowhead() {
    let line = drive_line(&drive(TeamSide::Road, 52, 57, -5, DriveResult::Punt), "NWE");

    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 52), '<');
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 57), 'P');
}

#[test]
fn zero_net_drive_still_shows_arrow_and_result() {
    let line = drive_line(&drive(TeamSide::Home, 25, 25, 0, DriveResult::Punt), "NWE");

    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 25), '>');
    assert_eq!(char_at(&line, YARD_ZERO_COLUMN + 26), 'P');
    assert_eq!(line.chars().skip(27).filter(|c| *c == '-').count(), 0);
}

#[test]
fn ghost_drive_leaves_the_track_blank() {
    let mut ghost = drive(TeamSide::Road, -1, -1, 0, DriveResult::EndOfHalf);
    ghost.plays = 0;
    let line = drive_line(&ghost, "NWE");

    assert!(line.starts_with(" 2 ATL:     0-0 3:30 [8:15]"));
    assert!(line.chars().skip(27).all(|c| c == ' '));
}

#[test]
fn goal_line_lanes_reach_the_end_zone_columns() {
    // A home touchdown overwrites the first road end-zone column.
    let home_td = drive_line(
        &drive(TeamSide::Home, 12, 100, 88, DriveResult::Touchdown),
        "NWE",
    );
    assert_eq!(char_at(&home_td, YARD_ZERO_COLUMN + 100), 'T');

    // A road touchdown lands on the home end-zone column.
    let road_td = drive_line(
        &drive(TeamSide::Road, 45, 0, 45, DriveResult::Touchdown),
        "NWE",
    );
    assert_eq!(char_at(&road_td, YARD_ZERO_COLUMN), 'T');
    assert_eq!(char_at(&road_td, YARD_ZERO_COLUMN + 45), '<');
}

#[test]
fn chart_lists_ruler_header_then_drives() {
    let drives = vec![
        drive(TeamSide::Home, 20, 45, 25, DriveResult::Punt),
        drive(TeamSide::Road, 70, 55, 15, DriveResult::Downs),
    ];
    let lines = render_text_chart(&drives, "ATL", "NWE");

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], header_line("ATL", "NWE"));
    assert_eq!(char_at(&lines[2], YARD_ZERO_COLUMN + 20), '>');
    assert_eq!(char_at(&lines[3], YARD_ZERO_COLUMN + 55), 'D');
}
