use drivechart_rs::core::text_chart::drive_line;
use drivechart_rs::core::{
    DriveRecord, DriveResult, FieldMetrics, FieldScale, GameClock, StackingCursor, TeamSide,
    box_footprint, label_placement, merge_drive_sequences,
};
use proptest::prelude::*;

fn drive(side: TeamSide, elapsed: u32, start: i32, end: i32) -> DriveRecord {
    let net = match side {
        TeamSide::Home => end - start,
        TeamSide::Road => start - end,
    };
    DriveRecord {
        quarter: 1 + elapsed / 900,
        start_clock: GameClock::from_seconds(900 - elapsed % 900),
        elapsed_game_seconds: elapsed,
        offense: match side {
            TeamSide::Home => "NWE".to_owned(),
            TeamSide::Road => "ATL".to_owned(),
        },
        side,
        plays: 5,
        duration: GameClock::from_seconds(90),
        net_yards: net,
        result: DriveResult::Punt,
        line_of_scrimmage: None,
        start_yard_line: start,
        end_yard_line: end,
        comment: None,
    }
}

proptest! {
    #[test]
    fn box_footprint_covers_the_inclusive_yard_span(
        home in any::<bool>(),
        start in 0i32..=100,
        end in 0i32..=100
    ) {
        let side = if home { TeamSide::Home } else { TeamSide::Road };
        let record = drive(side, 300, start, end);

        let footprint = box_footprint(&record).expect("drawable drive");
        prop_assert_eq!(footprint.width_yards, (end - start).abs() + 1);
        prop_assert_eq!(footprint.left_yard, start.min(end));
        prop_assert_eq!(
            footprint.left_yard + footprint.width_yards - 1,
            start.max(end)
        );
    }

    #[test]
    fn text_lane_arrow_marks_the_start_and_glyph_the_end(
        home in any::<bool>(),
        start in 0i32..=100,
        end in 0i32..=100
    ) {
        prop_assume!(start != end);
        let side = if home { TeamSide::Home } else { TeamSide::Road };
        let record = drive(side, 300, start, end);

        let line = drive_line(&record, "NWE");
        let base = 31usize;
        let arrow = if home { '>' } else { '<' };
        let at = |index: usize| line.chars().nth(index);

        prop_assert_eq!(at(base + start as usize), Some(arrow));
        prop_assert_eq!(at(base + end as usize), Some('P'));
    }

    #[test]
    fn merge_emits_every_drive_in_elapsed_order(
        elapsed in proptest::collection::btree_set(0u32..100_000, 0..40)
    ) {
        let sorted: Vec<u32> = elapsed.into_iter().collect();
        let mut road = Vec::new();
        let mut home = Vec::new();
        for (index, value) in sorted.iter().enumerate() {
            if index % 2 == 0 {
                home.push(drive(TeamSide::Home, *value, 20, 40));
            } else {
                road.push(drive(TeamSide::Road, *value, 70, 50));
            }
        }

        let merged = merge_drive_sequences(&road, &home).expect("distinct times always merge");
        let merged_elapsed: Vec<u32> = merged.iter().map(|d| d.elapsed_game_seconds).collect();
        prop_assert_eq!(merged_elapsed, sorted);
    }

    #[test]
    fn merge_projects_each_source_back_out_unchanged(
        slots in proptest::collection::btree_map(0u32..100_000, any::<bool>(), 0..40)
    ) {
        let mut road = Vec::new();
        let mut home = Vec::new();
        for (elapsed, is_home) in &slots {
            if *is_home {
                home.push(drive(TeamSide::Home, *elapsed, 25, 45));
            } else {
                road.push(drive(TeamSide::Road, *elapsed, 75, 60));
            }
        }

        let merged = merge_drive_sequences(&road, &home).expect("distinct times always merge");
        prop_assert_eq!(merged.len(), road.len() + home.len());

        let per_side = |side: TeamSide| -> Vec<u32> {
            merged
                .iter()
                .filter(|d| d.side == side)
                .map(|d| d.elapsed_game_seconds)
                .collect()
        };
        let input_elapsed =
            |drives: &[DriveRecord]| -> Vec<u32> { drives.iter().map(|d| d.elapsed_game_seconds).collect() };
        prop_assert_eq!(per_side(TeamSide::Road), input_elapsed(&road));
        prop_assert_eq!(per_side(TeamSide::Home), input_elapsed(&home));
    }

    #[test]
    fn stacking_assigns_one_row_pitch_per_drawable_drive(
        ghost_mask in proptest::collection::vec(any::<bool>(), 1..40)
    ) {
        let records: Vec<DriveRecord> = ghost_mask
            .iter()
            .enumerate()
            .map(|(index, is_ghost)| {
                let mut record = drive(TeamSide::Home, index as u32 * 60, 20, 45);
                if *is_ghost {
                    record.plays = 0;
                    record.start_yard_line = -1;
                    record.end_yard_line = -1;
                }
                record
            })
            .collect();

        let metrics = FieldMetrics::for_drive_count(FieldScale::DEFAULT, records.len())
            .expect("metrics");
        let mut cursor = StackingCursor::new(&metrics);
        let mut placed = 0usize;
        for record in &records {
            match cursor.place(record) {
                Some(slot) => {
                    let expected = metrics.stacking_top_y() + 12.0 * placed as f64;
                    prop_assert!((slot.top_y - expected).abs() < 1e-9);
                    placed += 1;
                }
                None => prop_assert!(record.is_ghost()),
            }
        }
        prop_assert_eq!(placed, ghost_mask.iter().filter(|g| !**g).count());
    }

    #[test]
    fn drive_labels_always_anchor_on_the_canvas(
        home in any::<bool>(),
        start in 0i32..=100,
        end in 0i32..=100
    ) {
        let side = if home { TeamSide::Home } else { TeamSide::Road };
        let metrics = FieldMetrics::for_drive_count(FieldScale::DEFAULT, 10).expect("metrics");

        let left = start.min(end);
        let width_yards = (end - start).abs() + 1;
        let rect_left_x = metrics.drive_yard_x(f64::from(left));
        let rect_width = metrics.scale.yards_to_px(f64::from(width_yards));

        let placement = label_placement(side, rect_left_x, rect_width, &metrics);
        prop_assert!(placement.x > 0.0);
        prop_assert!(placement.x < metrics.canvas_width);
    }
}
