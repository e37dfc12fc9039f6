use crate::core::drive::TeamSide;
use crate::core::field::FieldMetrics;
use crate::core::layout::{
    BoxFootprint, DriveDirection, LabelJustify, StackingCursor, arrow_triangle, box_footprint,
    label_placement,
};
use crate::render::{
    LinePrimitive, LineStrokeStyle, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TextVAlign,
};

use super::{BLACK, DriveChartEngine, TeamPaint, WHITE};

const DRIVE_LABEL_SIZE_PX: f64 = 9.0;
const BOX_BORDER_WIDTH_PX: f64 = 2.0;
const QUARTER_LINE_WIDTH_PX: f64 = 1.0;

/// Fully resolved geometry and annotation for one drawable drive.
///
/// Ghost drives never produce a spec; their vertical slot stays empty on the
/// chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveBoxSpec {
    pub side: TeamSide,
    /// Zero-based position within this team's own sequence of drives.
    pub team_row: usize,
    pub footprint: BoxFootprint,
    pub direction: DriveDirection,
    /// y pixel of the box top.
    pub top_y: f64,
    /// Drives that lost yardage get hatched fills.
    pub negative_yardage: bool,
    /// y pixel of a quarter-divider line above this box, when this drive
    /// opens a new quarter.
    pub quarter_break_y: Option<f64>,
    /// Annotation text. Home labels read comment-first so they trail off the
    /// right end of the box; road labels read result-first for the mirrored
    /// reason.
    pub label: String,
}

impl<R: Renderer> DriveChartEngine<R> {
    /// Runs the stacking pass over the merged sequence and resolves each
    /// drawable drive into a [`DriveBoxSpec`].
    #[must_use]
    pub fn drive_box_specs(&self, metrics: &FieldMetrics) -> Vec<DriveBoxSpec> {
        let mut cursor = StackingCursor::new(metrics);
        let mut specs = Vec::with_capacity(self.drives.len());
        for record in &self.drives {
            let Some(footprint) = box_footprint(record) else {
                continue;
            };
            let Some(slot) = cursor.place(record) else {
                continue;
            };

            let stats = record.stats_display();
            let abbrev = record.result.box_abbrev();
            let comment = record.comment.as_deref().unwrap_or("");
            let label = match record.side {
                TeamSide::Home => format!("{comment} ({stats}) {abbrev}"),
                TeamSide::Road => format!("{abbrev} ({stats}) {comment}"),
            };

            specs.push(DriveBoxSpec {
                side: record.side,
                team_row: slot.team_row,
                footprint,
                direction: DriveDirection::for_side(record.side),
                top_y: slot.top_y,
                negative_yardage: record.net_yards < 0,
                quarter_break_y: slot.quarter_break_y,
                label,
            });
        }
        specs
    }

    /// Paints the stacked drives: quarter dividers, boxes, direction arrows
    /// and labels.
    pub(super) fn append_drive_scene(&self, frame: &mut RenderFrame, metrics: &FieldMetrics) {
        let box_height = f64::from(metrics.scale.drive_box_height);
        for spec in self.drive_box_specs(metrics) {
            let paint = self.paint_for(spec.side);
            let left_x = metrics.drive_yard_x(f64::from(spec.footprint.left_yard));
            let width = metrics
                .scale
                .yards_to_px(f64::from(spec.footprint.width_yards));

            if let Some(break_y) = spec.quarter_break_y {
                frame.lines.push(quarter_line(break_y, metrics));
            }

            let mut rect =
                RectPrimitive::filled(left_x, spec.top_y, width, box_height, paint.primary)
                    .with_border(BOX_BORDER_WIDTH_PX, paint.secondary);
            if spec.negative_yardage {
                rect = rect.with_hatching();
            }
            frame.rects.push(rect);

            let arrow_edge_x = match spec.direction {
                DriveDirection::Right => left_x + width,
                DriveDirection::Left => left_x,
            };
            frame.polygons.push(
                PolygonPrimitive::new(
                    arrow_triangle(
                        spec.direction,
                        arrow_edge_x,
                        spec.top_y,
                        box_height,
                        metrics.arrow_width,
                    ),
                    paint.primary,
                )
                .with_border(BOX_BORDER_WIDTH_PX, paint.secondary),
            );

            let placement = label_placement(spec.side, left_x, width, metrics);
            let label_color = if placement.inside_box { WHITE } else { BLACK };
            let h_align = match placement.justify {
                LabelJustify::Left => TextHAlign::Left,
                LabelJustify::Right => TextHAlign::Right,
            };
            frame.texts.push(
                TextPrimitive::new(
                    spec.label,
                    placement.x,
                    spec.top_y + box_height / 2.0,
                    DRIVE_LABEL_SIZE_PX,
                    label_color,
                    h_align,
                )
                .with_v_align(TextVAlign::Middle)
                .with_bold(),
            );
        }
    }

    fn paint_for(&self, side: TeamSide) -> &TeamPaint {
        match side {
            TeamSide::Home => &self.home_paint,
            TeamSide::Road => &self.road_paint,
        }
    }
}

fn quarter_line(y: f64, metrics: &FieldMetrics) -> LinePrimitive {
    LinePrimitive::new(
        1.0,
        y,
        metrics.canvas_width - 1.0,
        y,
        QUARTER_LINE_WIDTH_PX,
        BLACK,
    )
    .with_style(LineStrokeStyle::Dashed)
}
