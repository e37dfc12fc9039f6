use smallvec::SmallVec;

use crate::core::PointPx;
use crate::error::{DriveChartError, DriveChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB` hex notation into normalized channels.
    pub fn from_hex(hex: &str) -> DriveChartResult<Self> {
        let digits = hex.strip_prefix('#').ok_or_else(|| {
            DriveChartError::InvalidData(format!("color `{hex}` must start with `#`"))
        })?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(DriveChartError::InvalidData(format!(
                "color `{hex}` must be six hex digits"
            )));
        }
        let channel = |at: usize| -> DriveChartResult<f64> {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    DriveChartError::InvalidData(format!("color `{hex}` has a non-hex digit"))
                })
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn validate(self) -> DriveChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DriveChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStrokeStyle {
    Solid,
    Dashed,
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStrokeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> DriveChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(DriveChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(DriveChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
    /// Diagonal hatching over the fill, drawn in the border color.
    pub hatched: bool,
}

impl RectPrimitive {
    #[must_use]
    pub const fn filled(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
            hatched: false,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub fn with_hatching(mut self) -> Self {
        self.hatched = true;
        self
    }

    pub fn validate(self) -> DriveChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(DriveChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(DriveChartError::InvalidData(
                "rect size must not be negative".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(DriveChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Draw command for one filled polygon in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[PointPx; 3]>,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: SmallVec<[PointPx; 3]>, fill_color: Color) -> Self {
        Self {
            points,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(&self) -> DriveChartResult<()> {
        if self.points.len() < 3 {
            return Err(DriveChartError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(DriveChartError::InvalidData(
                    "polygon points must be finite".to_owned(),
                ));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(DriveChartError::InvalidData(
                "polygon border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
}

/// Counterclockwise on-screen rotation of a text primitive around its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRotation {
    None,
    Deg90,
    Deg180,
    Deg270,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation: TextRotation,
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Top,
            rotation: TextRotation::None,
            bold: false,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: TextRotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn validate(&self) -> DriveChartResult<()> {
        if self.text.is_empty() {
            return Err(DriveChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(DriveChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(DriveChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_to_normalized_channels() {
        let color = Color::from_hex("#FF8000").expect("hex color should parse");
        assert!((color.red - 1.0).abs() < 1e-9);
        assert!((color.green - 128.0 / 255.0).abs() < 1e-9);
        assert!((color.blue - 0.0).abs() < 1e-9);
        assert!((color.alpha - 1.0).abs() < 1e-9);
    }

    #[test]
    fn hex_colors_reject_bad_notation() {
        assert!(Color::from_hex("002244").is_err());
        assert!(Color::from_hex("#00224").is_err());
        assert!(Color::from_hex("#00ZZ44").is_err());
    }

    #[test]
    fn degenerate_polygons_fail_validation() {
        let polygon = PolygonPrimitive::new(
            smallvec::smallvec![PointPx::new(0.0, 0.0), PointPx::new(1.0, 1.0)],
            Color::rgb(0.0, 0.0, 0.0),
        );
        assert!(polygon.validate().is_err());
    }
}
