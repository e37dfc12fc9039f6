use tracing::debug;

use crate::core::summary::{SUMMARY_HEADER, summary_rows};
use crate::core::text_chart::render_text_chart;
use crate::core::{DriveRecord, FieldMetrics, FieldScale};
use crate::error::{DriveChartError, DriveChartResult};
use crate::render::{Color, RenderFrame, Renderer};
use crate::team::TeamDirectory;

mod drive_scene_builder;
mod field_scene_builder;

pub use drive_scene_builder::DriveBoxSpec;

const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Resolved paint for one sideline: nickname plus parsed jersey colors.
#[derive(Debug, Clone, PartialEq)]
struct TeamPaint {
    nickname: String,
    primary: Color,
    secondary: Color,
}

impl TeamPaint {
    fn resolve(teams: &TeamDirectory, code: &str) -> DriveChartResult<Self> {
        let info = teams.resolve(code)?;
        Ok(Self {
            nickname: info.nickname.clone(),
            primary: Color::from_hex(&info.colors.primary)?,
            secondary: Color::from_hex(&info.colors.secondary)?,
        })
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.primary, &mut self.secondary);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriveChartConfig {
    pub road_code: String,
    pub home_code: String,
    pub scale: FieldScale,
    pub exchange_color_code: Option<String>,
}

impl DriveChartConfig {
    #[must_use]
    pub fn new(road_code: impl Into<String>, home_code: impl Into<String>) -> Self {
        Self {
            road_code: road_code.into(),
            home_code: home_code.into(),
            scale: FieldScale::DEFAULT,
            exchange_color_code: None,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: FieldScale) -> Self {
        self.scale = scale;
        self
    }

    /// Swaps the named team's primary and secondary colors, for matchups
    /// where both primaries are too close to tell apart.
    #[must_use]
    pub fn with_exchange_color(mut self, code: impl Into<String>) -> Self {
        self.exchange_color_code = Some(code.into());
        self
    }
}

pub struct DriveChartEngine<R: Renderer> {
    renderer: R,
    config: DriveChartConfig,
    road_paint: TeamPaint,
    home_paint: TeamPaint,
    drives: Vec<DriveRecord>,
}

impl<R: Renderer> DriveChartEngine<R> {
    /// Builds an engine for one matchup. Both team codes must resolve in the
    /// directory, as must the exchange-color code when one is given.
    pub fn new(
        renderer: R,
        config: DriveChartConfig,
        teams: &TeamDirectory,
    ) -> DriveChartResult<Self> {
        config.scale.validate()?;

        let mut road_paint = TeamPaint::resolve(teams, &config.road_code)?;
        let mut home_paint = TeamPaint::resolve(teams, &config.home_code)?;
        if let Some(code) = &config.exchange_color_code {
            if *code == config.road_code {
                road_paint.swap();
            } else if *code == config.home_code {
                home_paint.swap();
            } else {
                return Err(DriveChartError::UnknownTeam(code.clone()));
            }
        }
        debug!(
            road = %config.road_code,
            home = %config.home_code,
            "resolved team palettes"
        );

        Ok(Self {
            renderer,
            config,
            road_paint,
            home_paint,
            drives: Vec::new(),
        })
    }

    pub fn set_drives(&mut self, drives: Vec<DriveRecord>) {
        self.drives = drives;
    }

    pub fn append_drive(&mut self, drive: DriveRecord) {
        self.drives.push(drive);
    }

    #[must_use]
    pub fn drives(&self) -> &[DriveRecord] {
        &self.drives
    }

    #[must_use]
    pub fn config(&self) -> &DriveChartConfig {
        &self.config
    }

    /// Canvas geometry for the current drive count. Ghost drives claim a
    /// slot here even though nothing is drawn for them.
    pub fn metrics(&self) -> DriveChartResult<FieldMetrics> {
        FieldMetrics::for_drive_count(self.config.scale, self.drives.len())
    }

    /// Builds the full scene: the field first, then the stacked drives over
    /// it.
    pub fn build_render_frame(&self) -> DriveChartResult<RenderFrame> {
        let metrics = self.metrics()?;
        let mut frame = RenderFrame::new(metrics.viewport());
        self.append_field_scene(&mut frame, &metrics);
        self.append_drive_scene(&mut frame, &metrics);
        frame.validate()?;
        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            polygons = frame.polygons.len(),
            texts = frame.texts.len(),
            "built drive chart frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> DriveChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Merged-sequence summary table, header line first.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.drives.len() + 1);
        lines.push(SUMMARY_HEADER.to_owned());
        lines.extend(summary_rows(&self.drives));
        lines
    }

    /// Text twin of the graphical chart.
    #[must_use]
    pub fn text_chart_lines(&self) -> Vec<String> {
        render_text_chart(&self.drives, &self.config.road_code, &self.config.home_code)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
