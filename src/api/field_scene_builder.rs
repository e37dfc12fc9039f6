use crate::core::field::FieldMetrics;
use crate::render::{
    Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextRotation,
    TextVAlign,
};

use super::{BLACK, DriveChartEngine, TeamPaint, WHITE};

const FIELD_GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

const END_ZONE_LABEL_SIZE_PX: f64 = 30.0;
const MARKER_LABEL_SIZE_PX: f64 = 10.0;

/// Five-yard stripes start one canvas yard past each goal line so they read
/// as lines between playing-field segments rather than segment fills.
const FIRST_STRIPE_CANVAS_YARD: f64 = 11.0;
const STRIPE_SPACING_YARDS: f64 = 5.0;
const STRIPE_WIDTH_YARDS: f64 = 4.0;
const STRIPE_COUNT: usize = 20;

/// Yardage numbers sit centered between successive stripes, nine per row.
const FIRST_MARKER_CANVAS_YARD: f64 = 16.0;
const MARKER_SPACING_YARDS: f64 = 10.0;
const MARKER_WIDTH_YARDS: f64 = 9.0;

/// Lower band reads for the home offense driving rightward.
const LOWER_MARKER_LABELS: [&str; 9] = [
    "<10", "<20", "<30", "<40", "50", "40>", "30>", "20>", "10>",
];
/// Upper band is flipped upside down for the road offense reading the other
/// way.
const UPPER_MARKER_LABELS: [&str; 9] = [
    "10>", "20>", "30>", "40>", "50", "<40", "<30", "<20", "<10",
];

impl<R: Renderer> DriveChartEngine<R> {
    /// Paints the static field: end zones with team lettering, the outer
    /// frame, five-yard stripes and both yardage-number bands.
    pub(super) fn append_field_scene(&self, frame: &mut RenderFrame, metrics: &FieldMetrics) {
        append_end_zone(
            frame,
            metrics,
            metrics.canvas_yard_x(0.0),
            &self.home_paint,
            2.0,
            TextRotation::Deg90,
        );
        // 270-degree lettering lands visibly right of its anchor, so the road
        // label anchors left of true center to compensate.
        append_end_zone(
            frame,
            metrics,
            metrics.canvas_yard_x(111.0),
            &self.road_paint,
            2.5,
            TextRotation::Deg270,
        );

        frame.rects.push(
            RectPrimitive::filled(
                0.0,
                0.0,
                metrics.canvas_width,
                metrics.canvas_height - 1.0,
                TRANSPARENT,
            )
            .with_border(1.0, BLACK),
        );

        for stripe in 0..STRIPE_COUNT {
            let canvas_yard = FIRST_STRIPE_CANVAS_YARD + STRIPE_SPACING_YARDS * stripe as f64;
            frame.rects.push(RectPrimitive::filled(
                metrics.canvas_yard_x(canvas_yard),
                metrics.field_top_y(),
                metrics.scale.yards_to_px(STRIPE_WIDTH_YARDS),
                metrics.field_height,
                FIELD_GREEN,
            ));
        }

        append_marker_row(
            frame,
            metrics,
            metrics.marker_band_top_y(),
            &UPPER_MARKER_LABELS,
            TextRotation::Deg180,
        );
        append_marker_row(
            frame,
            metrics,
            metrics.marker_band_bottom_y(),
            &LOWER_MARKER_LABELS,
            TextRotation::None,
        );
    }
}

fn append_end_zone(
    frame: &mut RenderFrame,
    metrics: &FieldMetrics,
    left_x: f64,
    paint: &TeamPaint,
    center_divisor: f64,
    rotation: TextRotation,
) {
    let width = metrics.scale.yards_to_px(10.0);
    frame.rects.push(RectPrimitive::filled(
        left_x,
        metrics.field_top_y(),
        width,
        metrics.field_height,
        paint.primary,
    ));
    frame.texts.push(
        TextPrimitive::new(
            paint.nickname.to_uppercase(),
            left_x + width / center_divisor,
            metrics.field_top_y() + metrics.field_height / 2.0,
            END_ZONE_LABEL_SIZE_PX,
            paint.secondary,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle)
        .with_rotation(rotation)
        .with_bold(),
    );
}

fn append_marker_row(
    frame: &mut RenderFrame,
    metrics: &FieldMetrics,
    row_top_y: f64,
    labels: &[&str; 9],
    rotation: TextRotation,
) {
    let width = metrics.scale.yards_to_px(MARKER_WIDTH_YARDS);
    let height = f64::from(metrics.scale.marker_height);
    for (index, label) in labels.iter().enumerate() {
        let canvas_yard = FIRST_MARKER_CANVAS_YARD + MARKER_SPACING_YARDS * index as f64;
        let left_x = metrics.canvas_yard_x(canvas_yard);
        frame
            .rects
            .push(RectPrimitive::filled(left_x, row_top_y, width, height, FIELD_GREEN));
        frame.texts.push(
            TextPrimitive::new(
                *label,
                left_x + width / 2.0,
                row_top_y + height / 2.0,
                MARKER_LABEL_SIZE_PX,
                WHITE,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Middle)
            .with_rotation(rotation)
            .with_bold(),
        );
    }
}
