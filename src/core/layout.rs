use smallvec::{SmallVec, smallvec};

use crate::core::drive::{DriveRecord, TeamSide};
use crate::core::field::{FieldMetrics, PointPx};

/// Horizontal travel direction of a drive on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveDirection {
    Left,
    Right,
}

impl DriveDirection {
    /// Home offenses read left-to-right, road offenses right-to-left.
    #[must_use]
    pub fn for_side(side: TeamSide) -> Self {
        match side {
            TeamSide::Home => Self::Right,
            TeamSide::Road => Self::Left,
        }
    }
}

/// Pre-scaling horizontal footprint of one drive box, in field yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFootprint {
    /// Leftmost yard line covered by the box.
    pub left_yard: i32,
    /// Inclusive yard span, so a drive from 20 to 80 is 61 yards wide.
    pub width_yards: i32,
}

/// Computes the yard-unit footprint for a drive, or `None` for ghosts.
///
/// The left edge is whichever end of the drive sits further left: the start
/// for forward home drives and backward road drives, the end otherwise.
#[must_use]
pub fn box_footprint(record: &DriveRecord) -> Option<BoxFootprint> {
    let (start, end) = record.field_span()?;
    let width_yards = (end - start).abs() + 1;
    let left_yard = match record.side {
        TeamSide::Home => {
            if record.net_yards >= 0 {
                start
            } else {
                start + record.net_yards
            }
        }
        TeamSide::Road => {
            if record.net_yards >= 0 {
                end
            } else {
                end + record.net_yards
            }
        }
    };
    Some(BoxFootprint {
        left_yard,
        width_yards,
    })
}

/// Vertex list for the isoceles direction arrow hanging off a box edge.
///
/// `edge_x` is the x pixel of the box edge the arrow points away from,
/// `box_top_y` the box's top edge. The flat edge is inset one pixel from the
/// box top and bottom, which is why box heights must be even.
#[must_use]
pub fn arrow_triangle(
    direction: DriveDirection,
    edge_x: f64,
    box_top_y: f64,
    box_height: f64,
    arrow_width: f64,
) -> SmallVec<[PointPx; 3]> {
    let (base_x, tip_x) = match direction {
        DriveDirection::Right => (edge_x + 1.0, edge_x + 1.0 + arrow_width / 2.0),
        DriveDirection::Left => (edge_x - 1.0, edge_x - 1.0 - arrow_width / 2.0),
    };
    let top_y = box_top_y + 1.0;
    let flat_height = box_height - 2.0;
    smallvec![
        PointPx::new(base_x, top_y),
        PointPx::new(tip_x, top_y + flat_height / 2.0),
        PointPx::new(base_x, top_y + flat_height),
    ]
}

/// Vertical slot assigned to one placed drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlot {
    /// y pixel of the box top.
    pub top_y: f64,
    /// Zero-based position within the drive's own team stack.
    pub team_row: usize,
    /// y pixel of a quarter-divider line to draw above this slot, present
    /// when this drive opens a new quarter.
    pub quarter_break_y: Option<f64>,
}

/// Explicit stacking state threaded through drive placement.
///
/// Every placed drive advances the cursor one row; ghost drives are skipped
/// without consuming a row or a quarter break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackingCursor {
    next_top_y: f64,
    row_pitch: f64,
    half_gap: f64,
    current_quarter: u32,
    home_rows: usize,
    road_rows: usize,
}

impl StackingCursor {
    #[must_use]
    pub fn new(metrics: &FieldMetrics) -> Self {
        let scale = metrics.scale;
        Self {
            next_top_y: metrics.stacking_top_y(),
            row_pitch: f64::from(scale.drive_box_height + scale.drive_box_gap),
            half_gap: f64::from(scale.drive_box_gap) / 2.0,
            current_quarter: 1,
            home_rows: 0,
            road_rows: 0,
        }
    }

    /// Assigns the next slot for a drive, or `None` for ghosts, which leave
    /// the cursor untouched.
    pub fn place(&mut self, record: &DriveRecord) -> Option<PlacedSlot> {
        if record.is_ghost() {
            return None;
        }

        let quarter_break_y = (record.quarter > self.current_quarter)
            .then(|| self.next_top_y - self.half_gap);
        if record.quarter > self.current_quarter {
            self.current_quarter = record.quarter;
        }

        let team_row = match record.side {
            TeamSide::Home => {
                let row = self.home_rows;
                self.home_rows += 1;
                row
            }
            TeamSide::Road => {
                let row = self.road_rows;
                self.road_rows += 1;
                row
            }
        };

        let top_y = self.next_top_y;
        self.next_top_y += self.row_pitch;
        Some(PlacedSlot {
            top_y,
            team_row,
            quarter_break_y,
        })
    }
}

/// Minimum box width, in yards, that still fits its label inside.
pub const MIN_LABEL_BOX_WIDTH_YARDS: f64 = 15.0;

/// How a drive-box label hangs off its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelJustify {
    Left,
    Right,
}

/// Resolved anchor for one drive-box label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub justify: LabelJustify,
    /// Labels inside the box render light-on-dark; outside labels render
    /// dark against the field.
    pub inside_box: bool,
}

/// Resolves where a drive-box label goes.
///
/// Wide boxes hold their label inside, justified toward the offense's own
/// end so the text reads outward from the goal line being attacked. Narrow
/// boxes push the label outside past the direction arrow, flipping to the
/// other end when the box sits too close to the field edge for the label
/// to fit.
#[must_use]
pub fn label_placement(
    side: TeamSide,
    rect_left_x: f64,
    rect_width: f64,
    metrics: &FieldMetrics,
) -> LabelPlacement {
    let min_inside_width = metrics.scale.yards_to_px(MIN_LABEL_BOX_WIDTH_YARDS);
    if rect_width < min_inside_width {
        match side {
            TeamSide::Home => {
                if rect_left_x < metrics.canvas_yard_x(20.0) {
                    LabelPlacement {
                        x: rect_left_x + rect_width + metrics.arrow_width,
                        justify: LabelJustify::Left,
                        inside_box: false,
                    }
                } else {
                    LabelPlacement {
                        x: rect_left_x,
                        justify: LabelJustify::Right,
                        inside_box: false,
                    }
                }
            }
            TeamSide::Road => {
                if rect_left_x + rect_width > metrics.canvas_yard_x(100.0) {
                    LabelPlacement {
                        x: rect_left_x - metrics.arrow_width,
                        justify: LabelJustify::Right,
                        inside_box: false,
                    }
                } else {
                    LabelPlacement {
                        x: rect_left_x + rect_width,
                        justify: LabelJustify::Left,
                        inside_box: false,
                    }
                }
            }
        }
    } else {
        match side {
            TeamSide::Home => LabelPlacement {
                x: rect_left_x + rect_width,
                justify: LabelJustify::Right,
                inside_box: true,
            },
            TeamSide::Road => LabelPlacement {
                x: rect_left_x,
                justify: LabelJustify::Left,
                inside_box: true,
            },
        }
    }
}
