pub mod clock;
pub mod drive;
pub mod field;
pub mod layout;
pub mod merge;
pub mod normalize;
pub mod summary;
pub mod text_chart;

pub use clock::{GameClock, elapsed_game_seconds};
pub use drive::{DriveRecord, DriveResult, TeamSide, net_yards_display};
pub use field::{FieldMetrics, FieldScale, PointPx, Viewport};
pub use layout::{
    BoxFootprint, DriveDirection, LabelJustify, LabelPlacement, PlacedSlot, StackingCursor,
    arrow_triangle, box_footprint, label_placement,
};
pub use merge::merge_drive_sequences;
pub use normalize::{NormalizeContext, RawDriveRow, normalize_row, normalize_rows};
