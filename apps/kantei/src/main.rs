use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tyche::ephemeris::{EphemerisProvider, FixedEphemeris, GeoLocation};
use tyche::narrative::{build_prompt, DEFAULT_STYLE_PROMPT};
use tyche::{calculate, BirthInput};
use tyche_config::TycheSettings;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Fixed-section Japanese report.
    Text,
    /// Input, derived chart data and report sections as JSON.
    Json,
    /// Report text wrapped in the default narrative prompt.
    Prompt,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Whole-sign natal chart report")]
struct Args {
    /// Subject name shown in the report header (blank means ゲスト).
    #[arg(long, default_value = "")]
    name: String,

    /// Birth date, YYYY/MM/DD or YYYY-MM-DD (local civil date).
    #[arg(long)]
    date: String,

    /// Birth time, HH:MM (local civil time).
    #[arg(long)]
    time: String,

    /// UTC offset of the birth time, e.g. +09:00 (default from config).
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,

    /// Latitude in signed decimal degrees (default from config [location]).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<String>,

    /// Longitude in signed decimal degrees (default from config [location]).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<String>,

    /// Config file (otherwise configs/tyche.toml is searched).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file of precomputed positions instead of a live ephemeris.
    #[arg(long)]
    positions: Option<PathBuf>,

    /// Swiss Ephemeris data directory (overrides config).
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,

    /// Orb tolerance in degrees (overrides config).
    #[arg(long)]
    orb: Option<f64>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = tyche_config::load_settings(args.config.as_deref())?;
    match &settings.source {
        Some(path) => log::info!("loaded config from {}", path.display()),
        None => log::info!("no config file found, using defaults"),
    }
    if let Some(orb) = args.orb {
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("--orb must be a non-negative number of degrees, got {}", orb);
        }
        settings.analysis.aspects.orb_limit = orb;
    }

    let input = birth_input(&args, &settings)?;
    let provider = ephemeris(&args, &settings)?;

    let natal = calculate(
        provider.as_ref(),
        &input,
        &settings.dignity_tables,
        &settings.analysis,
    )
    .context("Chart calculation failed")?;
    log::info!(
        "{} aspects within {}°",
        natal.analysis.aspects.len(),
        settings.analysis.aspects.orb_limit
    );

    match args.format {
        Format::Text => println!("{}", natal.report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&natal)?),
        Format::Prompt => println!("{}", build_prompt(DEFAULT_STYLE_PROMPT, &natal.text())),
    }
    Ok(())
}

fn birth_input(args: &Args, settings: &TycheSettings) -> anyhow::Result<BirthInput> {
    let fallback = settings.location;
    let lat = match (&args.lat, fallback) {
        (Some(lat), _) => lat.clone(),
        (None, Some(GeoLocation { lat, .. })) => lat.to_string(),
        (None, None) => anyhow::bail!("--lat is required (no [location] in config)"),
    };
    let lon = match (&args.lon, fallback) {
        (Some(lon), _) => lon.clone(),
        (None, Some(GeoLocation { lon, .. })) => lon.to_string(),
        (None, None) => anyhow::bail!("--lon is required (no [location] in config)"),
    };
    let offset = args
        .utc_offset
        .clone()
        .unwrap_or_else(|| settings.utc_offset.to_string());

    BirthInput::parse(&args.name, &args.date, &args.time, &offset, &lat, &lon)
        .context("Invalid birth data")
}

fn ephemeris(args: &Args, settings: &TycheSettings) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    if let Some(path) = &args.positions {
        log::info!("using fixed positions from {}", path.display());
        let fixed = FixedEphemeris::from_path(path)
            .with_context(|| format!("Failed to load positions {}", path.display()))?;
        return Ok(Box::new(fixed));
    }
    live_ephemeris(args.ephemeris_path.clone().or_else(|| settings.ephemeris_path.clone()))
}

#[cfg(feature = "swiss-ephemeris")]
fn live_ephemeris(path: Option<PathBuf>) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    let adapter = tyche::SwissEphemerisAdapter::new(path)?;
    Ok(Box::new(adapter))
}

#[cfg(not(feature = "swiss-ephemeris"))]
fn live_ephemeris(_path: Option<PathBuf>) -> anyhow::Result<Box<dyn EphemerisProvider>> {
    anyhow::bail!("No ephemeris backend: pass --positions <file.json> or build with --features swiss-ephemeris")
}
