use drivechart_rs::core::{
    DriveRecord, DriveResult, GameClock, TeamSide, merge_drive_sequences,
};
use drivechart_rs::error::DriveChartError;

fn drive(offense: &str, elapsed: u32, duration_seconds: u32) -> DriveRecord {
    let side = if offense == "NWE" {
        TeamSide::Home
    } else {
        TeamSide::Road
    };
    DriveRecord {
        quarter: 1 + elapsed / 900,
        start_clock: GameClock::from_seconds(900 - elapsed % 900),
        elapsed_game_seconds: elapsed,
        offense: offense.to_owned(),
        side,
        plays: if duration_seconds == 0 { 0 } else { 5 },
        duration: GameClock::from_seconds(duration_seconds),
        net_yards: 10,
        result: DriveResult::Punt,
        line_of_scrimmage: None,
        start_yard_line: 20,
        end_yard_line: 30,
        comment: None,
    }
}

#[test]
fn merge_orders_by_elapsed_game_time() {
    let road = vec![drive("ATL", 200, 120), drive("ATL", 800, 90)];
    let home = vec![drive("NWE", 50, 150), drive("NWE", 500, 180), drive("NWE", 1000, 60)];

    let merged = merge_drive_sequences(&road, &home).expect("merge should succeed");
    let elapsed: Vec<u32> = merged.iter().map(|d| d.elapsed_game_seconds).collect();
    assert_eq!(elapsed, vec![50, 200, 500, 800, 1000]);
}

#[test]
fn merge_keeps_each_input_as_a_subsequence() {
    let road = vec![drive("ATL", 100, 60), drive("ATL", 400, 60), drive("ATL", 900, 60)];
    let home = vec![drive("NWE", 250, 60), drive("NWE", 600, 60)];

    let merged = merge_drive_sequences(&road, &home).expect("merge should succeed");
    let road_elapsed: Vec<u32> = merged
        .iter()
        .filter(|d| d.offense == "ATL")
        .map(|d| d.elapsed_game_seconds)
        .collect();
    assert_eq!(road_elapsed, vec![100, 400, 900]);

    let home_elapsed: Vec<u32> = merged
        .iter()
        .filter(|d| d.offense == "NWE")
        .map(|d| d.elapsed_game_seconds)
        .collect();
    assert_eq!(home_elapsed, vec![250, 600]);
}

#[test]
fn zero_duration_row_sorts_ahead_of_the_simultaneous_real_drive() {
    // An end-of-half kickoff and the opposing real drive can share a start
    // time; the administrative row comes first.
    let road = vec![drive("ATL", 1795, 0)];
    let home = vec![drive("NWE", 1795, 120)];

    let merged = merge_drive_sequences(&road, &home).expect("merge should succeed");
    assert_eq!(merged[0].offense, "ATL");
    assert_eq!(merged[1].offense, "NWE");

    let merged = merge_drive_sequences(&home, &road).expect("merge should succeed");
    assert_eq!(merged[0].offense, "ATL");
    assert_eq!(merged[1].offense, "NWE");
}

#[test]
fn first_sequence_wins_when_both_tied_rows_are_zero_duration() {
    let first = vec![drive("ATL", 2700, 0)];
    let second = vec![drive("NWE", 2700, 0)];

    let merged = merge_drive_sequences(&first, &second).expect("merge should succeed");
    assert_eq!(merged[0].offense, "ATL");
    assert_eq!(merged[1].offense, "NWE");
}

#[test]
fn simultaneous_clock_consuming_drives_abort_the_merge() {
    let road = vec![drive("ATL", 1200, 90)];
    let home = vec![drive("NWE", 1200, 150)];

    let result = merge_drive_sequences(&road, &home);
    assert!(matches!(
        result,
        Err(DriveChartError::AmbiguousSimultaneousDrives { elapsed_seconds: 1200 })
    ));
}

#[test]
fn one_empty_sequence_passes_the_other_through() {
    let road: Vec<DriveRecord> = Vec::new();
    let home = vec![drive("NWE", 9, 190), drive("NWE", 700, 90)];

    let merged = merge_drive_sequences(&road, &home).expect("merge should succeed");
    assert_eq!(merged.len(), 2);
    assert!(merged.iter().all(|d| d.offense == "NWE"));
}
