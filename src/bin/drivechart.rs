//! Drive chart CLI.
//!
//! Reads two per-team drive logs, prints the merged summary table and the
//! text chart, and optionally renders the field diagram to a PNG.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use drivechart_rs::api::{DriveChartConfig, DriveChartEngine};
use drivechart_rs::core::{
    DriveRecord, NormalizeContext, TeamSide, merge_drive_sequences, normalize_rows,
};
use drivechart_rs::input::read_drive_file;
use drivechart_rs::render::NullRenderer;
use drivechart_rs::team::TeamDirectory;
use drivechart_rs::telemetry;

#[derive(Parser)]
#[command(name = "drivechart")]
#[command(about = "Create drive charts from per-team drive data")]
#[command(version)]
struct Cli {
    /// Team abbreviations separated by a comma (ROAD,HOME)
    teams: String,

    /// Drive data filenames separated by a comma (ROAD_FILE,HOME_FILE)
    #[arg(short = 'd', long = "drive-data")]
    drive_data: String,

    /// Exchange primary and secondary colors for this team (abbreviation
    /// must match one of the two teams)
    #[arg(short = 'e', long = "exchange-color")]
    exchange_color: Option<String>,

    /// JSON team table to use instead of the built-in one
    #[arg(long = "teams-file")]
    teams_file: Option<PathBuf>,

    /// Render the field diagram to this PNG path (needs the cairo-backend
    /// feature)
    #[arg(long = "png")]
    png: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = telemetry::init_default_tracing();

    let (road_code, home_code) = split_pair(&cli.teams, "teams")?;
    let (road_file, home_file) = split_pair(&cli.drive_data, "drive data files")?;

    let teams = load_team_directory(cli.teams_file.as_deref())?;

    let road_rows = read_drive_file(road_file)
        .with_context(|| format!("failed to read road drive data {road_file}"))?;
    let home_rows = read_drive_file(home_file)
        .with_context(|| format!("failed to read home drive data {home_file}"))?;

    let road_drives = normalize_rows(
        &road_rows,
        &NormalizeContext {
            offense: road_code,
            home_code,
            side: TeamSide::Road,
        },
    )?;
    let home_drives = normalize_rows(
        &home_rows,
        &NormalizeContext {
            offense: home_code,
            home_code,
            side: TeamSide::Home,
        },
    )?;
    let merged = merge_drive_sequences(&road_drives, &home_drives)?;

    let mut config = DriveChartConfig::new(road_code, home_code);
    if let Some(code) = &cli.exchange_color {
        config = config.with_exchange_color(code.clone());
    }

    let mut engine = DriveChartEngine::new(NullRenderer::default(), config.clone(), &teams)?;
    engine.set_drives(merged);

    for line in engine.summary_lines() {
        println!("{line}");
    }
    println!();
    for line in engine.text_chart_lines() {
        println!("{line}");
    }

    engine
        .render()
        .context("failed to build the drive chart scene")?;

    if let Some(png_path) = &cli.png {
        render_png(&config, engine.drives(), &teams, png_path)?;
        println!("wrote {}", png_path.display());
    }

    Ok(())
}

fn split_pair<'a>(value: &'a str, what: &str) -> Result<(&'a str, &'a str)> {
    match value.split_once(',') {
        Some((first, second)) if !first.is_empty() && !second.is_empty() => Ok((first, second)),
        _ => bail!("expected two comma-separated values for {what}, got {value:?}"),
    }
}

fn load_team_directory(path: Option<&Path>) -> Result<TeamDirectory> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open team table {}", path.display()))?;
            TeamDirectory::from_json_reader(file)
                .with_context(|| format!("failed to parse team table {}", path.display()))
        }
        None => Ok(TeamDirectory::builtin()),
    }
}

#[cfg(feature = "cairo-backend")]
fn render_png(
    config: &DriveChartConfig,
    drives: &[DriveRecord],
    teams: &TeamDirectory,
    path: &Path,
) -> Result<()> {
    use drivechart_rs::core::FieldMetrics;
    use drivechart_rs::render::CairoRenderer;

    let metrics = FieldMetrics::for_drive_count(config.scale, drives.len())?;
    let viewport = metrics.viewport();
    let renderer = CairoRenderer::new(
        i32::try_from(viewport.width).context("canvas width exceeds the cairo surface limit")?,
        i32::try_from(viewport.height).context("canvas height exceeds the cairo surface limit")?,
    )?;

    let mut engine = DriveChartEngine::new(renderer, config.clone(), teams)?;
    engine.set_drives(drives.to_vec());
    engine.render()?;
    engine
        .into_renderer()
        .write_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(
    _config: &DriveChartConfig,
    _drives: &[DriveRecord],
    _teams: &TeamDirectory,
    _path: &Path,
) -> Result<()> {
    bail!("PNG output requires building with the cairo-backend feature")
}
