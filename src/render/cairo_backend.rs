use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use crate::error::{DriveChartError, DriveChartResult};
use crate::render::{
    Color, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextRotation,
    TextVAlign,
};

/// Spacing between diagonal hatch strokes.
const HATCH_SPACING_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an image surface which can then be exported as a
/// PNG file.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> DriveChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DriveChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> DriveChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface contents to a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> DriveChartResult<()> {
        let mut file = File::create(path.as_ref())?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| DriveChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> DriveChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            if rect.hatched {
                draw_hatching(context, *rect)?;
            }
            if rect.border_width > 0.0 {
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            }
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            match line.style {
                LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                LineStrokeStyle::Dashed => context.set_dash(&[4.0, 4.0], 0.0),
            }
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        context.set_dash(&[], 0.0);
        for polygon in &frame.polygons {
            let mut points = polygon.points.iter();
            if let Some(first) = points.next() {
                context.move_to(first.x, first.y);
                for point in points {
                    context.line_to(point.x, point.y);
                }
                context.close_path();
            }
            apply_color(context, polygon.fill_color);
            if polygon.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                apply_color(context, polygon.border_color);
                context.set_line_width(polygon.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polygon border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            }
            stats.polygons_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font = if text.bold {
                format!("Sans Bold {}", text.font_size_px)
            } else {
                format!("Sans {}", text.font_size_px)
            };
            layout.set_font_description(Some(&FontDescription::from_string(&font)));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            // Alignment offsets apply in the label's own frame, which is why
            // they are added after the rotation.
            let dx = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };
            let dy = match text.v_align {
                TextVAlign::Top => 0.0,
                TextVAlign::Middle => -f64::from(text_height) / 2.0,
            };

            apply_color(context, text.color);
            context
                .save()
                .map_err(|err| map_backend_error("failed to save context state", err))?;
            context.translate(text.x, text.y);
            context.rotate(rotation_radians(text.rotation));
            context.move_to(dx, dy);
            pangocairo::functions::show_layout(context, &layout);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context state", err))?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DriveChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Diagonal hatch strokes clipped to the rectangle, drawn in the border
/// color the way negative-yardage boxes are marked.
fn draw_hatching(context: &Context, rect: RectPrimitive) -> DriveChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context state", err))?;
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context.clip();

    apply_color(context, rect.border_color);
    context.set_line_width(1.0);
    let span = rect.width + rect.height;
    let mut offset = 0.0;
    while offset <= span {
        context.move_to(rect.x + offset - rect.height, rect.y + rect.height);
        context.line_to(rect.x + offset, rect.y);
        offset += HATCH_SPACING_PX;
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke hatching", err))?;

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context state", err))
}

/// Positive cairo angles turn clockwise on a y-down surface, so the
/// counterclockwise screen rotations map to negated angles.
fn rotation_radians(rotation: TextRotation) -> f64 {
    match rotation {
        TextRotation::None => 0.0,
        TextRotation::Deg90 => -FRAC_PI_2,
        TextRotation::Deg180 => PI,
        TextRotation::Deg270 => FRAC_PI_2,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> DriveChartError {
    DriveChartError::InvalidData(format!("{prefix}: {err}"))
}
