use drivechart_rs::core::TeamSide;
use drivechart_rs::core::normalize::{
    GHOST_YARD_LINE, NormalizeContext, RawDriveRow, normalize_row,
};
use proptest::prelude::*;

fn row(fields: &[String]) -> RawDriveRow {
    RawDriveRow {
        line_number: 3,
        fields: fields.to_vec(),
    }
}

fn context(side: TeamSide) -> NormalizeContext<'static> {
    NormalizeContext {
        offense: match side {
            TeamSide::Home => "NWE",
            TeamSide::Road => "ATL",
        },
        home_code: "NWE",
        side,
    }
}

proptest! {
    #[test]
    fn normalized_yard_lines_stay_on_the_unified_scale(
        home_file in any::<bool>(),
        los_is_home in any::<bool>(),
        los_yard in 1i32..=50,
        end in 0i32..=100,
        quarter in 1u32..=5,
        clock_seconds in 0u32..900
    ) {
        let side = if home_file { TeamSide::Home } else { TeamSide::Road };
        let start = if los_is_home { los_yard } else { 100 - los_yard };
        let net = match side {
            TeamSide::Home => end - start,
            TeamSide::Road => start - end,
        };
        let los_code = if los_is_home { "NWE" } else { "ATL" };
        let clock = format!("{}:{:02}", clock_seconds / 60, clock_seconds % 60);
        let fields = [
            "1".to_owned(),
            quarter.to_string(),
            clock,
            format!("{los_code} {los_yard}"),
            "6".to_owned(),
            "2:30".to_owned(),
            net.to_string(),
            "Punt".to_owned(),
        ];

        let record = normalize_row(&row(&fields), &context(side)).expect("well-formed row");

        prop_assert_eq!(record.start_yard_line, start);
        prop_assert_eq!(record.end_yard_line, end);
        prop_assert!((0..=100).contains(&record.start_yard_line));
        prop_assert!((0..=100).contains(&record.end_yard_line));
        prop_assert_eq!(record.elapsed_game_seconds, 900 * quarter - clock_seconds);
    }

    #[test]
    fn zero_play_rows_always_take_the_ghost_sentinels(
        side_is_home in any::<bool>(),
        los in "[A-Za-z0-9 #!.]{0,12}",
        quarter in 1u32..=5
    ) {
        let side = if side_is_home { TeamSide::Home } else { TeamSide::Road };
        let fields = [
            "4".to_owned(),
            quarter.to_string(),
            "0:05".to_owned(),
            los.clone(),
            "0".to_owned(),
            "0:00".to_owned(),
            "0".to_owned(),
            "End of Half".to_owned(),
        ];

        let record = normalize_row(&row(&fields), &context(side))
            .expect("zero-play rows never parse the descriptor");

        prop_assert_eq!(record.start_yard_line, GHOST_YARD_LINE);
        prop_assert_eq!(record.end_yard_line, GHOST_YARD_LINE);
        prop_assert!(record.field_span().is_none());
        let trimmed = los.trim();
        prop_assert_eq!(
            record.line_of_scrimmage.as_deref(),
            (!trimmed.is_empty()).then_some(trimmed)
        );
    }
}
