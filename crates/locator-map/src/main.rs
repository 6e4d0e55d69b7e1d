//! Worked-locator map CLI.
//!
//! Reads a WSJT-X logfile, aggregates the worked Maidenhead squares and
//! fields, and writes the locator map as text or HTML.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use locator_kernel::config::{MapConfig, OutputMode, Palette};
use locator_kernel::locator::Locator;
use locator_map::mapper::{Mapper, MapperConfig};

#[derive(Parser)]
#[command(name = "locator-map")]
#[command(version)]
#[command(about = "Generate an overview of worked locators from your WSJT-X logfile")]
struct Cli {
    /// Use text output instead of html
    #[arg(short = 't', long = "txt")]
    txt: bool,

    /// Name of the output file; the suffix .txt or .html is added by the
    /// output format
    #[arg(short, long, default_value = "locatormap")]
    outfile: PathBuf,

    /// Name of the WSJT-X logfile
    #[arg(short, long, env = "WSJTX_LOG", default_value = "wsjtx.log")]
    logfile: PathBuf,

    /// Your home square
    #[arg(short, long, default_value = "JO52")]
    square: String,

    /// Your callsign, printed in the output
    #[arg(short, long, default_value = "DL8ABG")]
    call: String,

    /// JSON file overriding the map colors
    /// (keys: home, worked_square, worked_field, empty)
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let home_square = Locator::parse(&cli.square)?;
    let callsign = cli.call.to_uppercase();
    let mode = if cli.txt { OutputMode::Text } else { OutputMode::Html };
    let palette = load_palette(cli.palette.as_deref())?;

    info!(logfile = %cli.logfile.display(), "reading log file");
    info!(
        outfile = %cli.outfile.display(),
        format = mode.extension(),
        call = %callsign,
        square = %home_square,
        "writing locator map"
    );

    let mapper = Mapper::new(MapperConfig {
        logfile: cli.logfile,
        outfile: cli.outfile,
        map: MapConfig {
            home_square,
            callsign,
            mode,
            palette,
            generated_at: Some(Local::now()),
        },
    });
    let report = mapper.run()?;

    println!("found {} QSOs in log", report.contacts);
    println!("{} fields, {} squares", report.fields, report.squares);
    println!("map written to {}", report.output_path.display());

    Ok(())
}

/// The default colors, or the ones from the given JSON palette file; keys
/// missing from the file keep their defaults.
fn load_palette(path: Option<&std::path::Path>) -> Result<Palette> {
    let Some(path) = path else {
        return Ok(Palette::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read palette file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("invalid palette file {}", path.display()))
}
