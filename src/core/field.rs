use serde::{Deserialize, Serialize};

use crate::error::{DriveChartError, DriveChartResult};

/// Playing-field length on the unified yard scale.
pub const FIELD_YARDS: f64 = 100.0;
/// Depth of each end zone in yards.
pub const END_ZONE_YARDS: f64 = 10.0;
/// Full canvas span in yards: two end zones around the playing field.
pub const CANVAS_YARDS: f64 = 120.0;

/// Shortest field interior that still fits the end-zone lettering.
const MIN_FIELD_HEIGHT_PX: f64 = 58.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One point in pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPx {
    pub x: f64,
    pub y: f64,
}

impl PointPx {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal scale and drive-box sizing constants for the rendered chart.
///
/// All values are whole pixels (or whole yards for the border) so stacked
/// geometry lands on pixel boundaries at the default scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldScale {
    /// Horizontal pixels per field yard.
    pub pixels_per_yard: u32,
    /// Height of one drive box. Must be even so arrow tips center on a
    /// pixel boundary.
    pub drive_box_height: u32,
    /// Vertical gap between stacked drive boxes.
    pub drive_box_gap: u32,
    /// Border around the field, in yards.
    pub border_yards: u32,
    /// Gap between the border and the yardage-number band.
    pub marker_inset: u32,
    /// Height of the yardage-number band.
    pub marker_height: u32,
}

impl FieldScale {
    pub const DEFAULT: Self = Self {
        pixels_per_yard: 2,
        drive_box_height: 8,
        drive_box_gap: 4,
        border_yards: 3,
        marker_inset: 2,
        marker_height: 10,
    };

    pub fn validate(self) -> DriveChartResult<()> {
        if self.pixels_per_yard == 0 {
            return Err(DriveChartError::InvalidConfig(
                "pixels_per_yard must be positive".to_owned(),
            ));
        }
        if self.drive_box_height == 0 || self.drive_box_height % 2 != 0 {
            return Err(DriveChartError::InvalidConfig(format!(
                "drive_box_height must be a positive even pixel count, got {}",
                self.drive_box_height
            )));
        }
        Ok(())
    }

    /// Converts field yards to horizontal pixels.
    #[must_use]
    pub fn yards_to_px(self, yards: f64) -> f64 {
        yards * f64::from(self.pixels_per_yard)
    }

    /// Width of the field border in pixels.
    #[must_use]
    pub fn border_px(self) -> f64 {
        self.yards_to_px(f64::from(self.border_yards))
    }
}

impl Default for FieldScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Canvas geometry derived from the scale constants and the merged drive
/// count. All drives, ghosts included, claim a vertical slot here; ghost
/// slots simply stay empty on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetrics {
    pub scale: FieldScale,
    /// Field interior height between the borders.
    pub field_height: f64,
    /// Full canvas width, borders included.
    pub canvas_width: f64,
    /// Full canvas height, borders included.
    pub canvas_height: f64,
    /// Direction-arrow width, proportional to the canvas aspect ratio so
    /// arrows keep their shape at any drive count.
    pub arrow_width: f64,
}

impl FieldMetrics {
    pub fn for_drive_count(scale: FieldScale, drive_count: usize) -> DriveChartResult<Self> {
        scale.validate()?;

        let box_pitch = f64::from(scale.drive_box_height + scale.drive_box_gap);
        let marker_band = f64::from(scale.marker_inset + scale.marker_height);
        let mut field_height = drive_count as f64 * box_pitch
            + 2.0 * marker_band
            + f64::from(scale.drive_box_gap);
        if field_height < MIN_FIELD_HEIGHT_PX {
            field_height = MIN_FIELD_HEIGHT_PX;
        }

        let canvas_width = scale.yards_to_px(CANVAS_YARDS) + 2.0 * scale.border_px() + 1.0;
        let canvas_height = field_height + 2.0 * scale.border_px();
        let arrow_width = f64::from(scale.drive_box_height) * (canvas_width / canvas_height);

        Ok(Self {
            scale,
            field_height,
            canvas_width,
            canvas_height,
            arrow_width,
        })
    }

    /// x pixel of a canvas-yard coordinate, where canvas yard 0 is the left
    /// edge of the home end zone.
    #[must_use]
    pub fn canvas_yard_x(&self, canvas_yard: f64) -> f64 {
        self.scale.border_px() + self.scale.yards_to_px(canvas_yard)
    }

    /// x pixel of a drive yard line. Drive yard 0 sits one end zone in from
    /// the canvas origin.
    #[must_use]
    pub fn drive_yard_x(&self, yard: f64) -> f64 {
        self.canvas_yard_x(END_ZONE_YARDS + yard)
    }

    /// y pixel of the field interior's top edge.
    #[must_use]
    pub fn field_top_y(&self) -> f64 {
        self.scale.border_px()
    }

    /// y pixel of the top edge of the first drive slot.
    #[must_use]
    pub fn stacking_top_y(&self) -> f64 {
        self.scale.border_px()
            + f64::from(self.scale.marker_inset + self.scale.marker_height + self.scale.drive_box_gap)
    }

    /// y pixel of the top of the upper yardage-number band.
    #[must_use]
    pub fn marker_band_top_y(&self) -> f64 {
        self.scale.border_px() + f64::from(self.scale.marker_inset)
    }

    /// y pixel of the top of the lower yardage-number band.
    #[must_use]
    pub fn marker_band_bottom_y(&self) -> f64 {
        self.canvas_height
            - self.scale.border_px()
            - f64::from(self.scale.marker_inset + self.scale.marker_height)
    }

    /// Whole-pixel canvas size for renderer allocation.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas_width.ceil() as u32, self.canvas_height.ceil() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_scale_validates() {
        assert!(FieldScale::DEFAULT.validate().is_ok());
    }

    #[test]
    fn odd_box_height_is_rejected() {
        let scale = FieldScale {
            drive_box_height: 7,
            ..FieldScale::DEFAULT
        };
        assert!(matches!(
            scale.validate(),
            Err(DriveChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn canvas_width_spans_both_end_zones() {
        let metrics =
            FieldMetrics::for_drive_count(FieldScale::DEFAULT, 20).expect("metrics should build");
        // 120 yards at 2 px/yd, plus a 6 px border each side, plus the 1 px
        // closing column.
        assert_relative_eq!(metrics.canvas_width, 253.0);
    }

    #[test]
    fn short_games_keep_room_for_end_zone_lettering() {
        let metrics =
            FieldMetrics::for_drive_count(FieldScale::DEFAULT, 1).expect("metrics should build");
        assert_relative_eq!(metrics.field_height, 58.0);
        assert_relative_eq!(metrics.canvas_height, 70.0);
    }

    #[test]
    fn field_height_grows_with_drive_count() {
        let metrics =
            FieldMetrics::for_drive_count(FieldScale::DEFAULT, 24).expect("metrics should build");
        // 24 * (8 + 4) + 2 * (2 + 10) + 4
        assert_relative_eq!(metrics.field_height, 316.0);
    }

    #[test]
    fn drive_yard_x_offsets_past_the_end_zone() {
        let metrics =
            FieldMetrics::for_drive_count(FieldScale::DEFAULT, 10).expect("metrics should build");
        assert_relative_eq!(metrics.drive_yard_x(0.0), 26.0);
        assert_relative_eq!(metrics.drive_yard_x(50.0), 126.0);
    }
}
