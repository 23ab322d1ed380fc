use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;

use mockgons::config::FileConfig;
use mockgons::geojson::{read_geojson, to_geojson_string, write_geojson};
use mockgons::validation::{ValidationReport, validate_collection, validate_geojson};
use mockgons::{GenerationParams, generate_mock_polygons};

const DEFAULT_OUTPUT: &str = "mock_polygons.geojson";

/// Generate mock GeoJSON polygons (n-gons, circles, ovals) scattered across the globe
///
/// Examples:
///   # 1000 polygons, 1-315 km, squares, circles and ovals
///   mockgons
///
///   # Quadrilaterals and pentagons only, reproducible
///   mockgons -n 50 --min-vertices 4 --max-vertices 5 --no-circles --no-ovals --seed 42
///
///   # Pretty-printed to stdout
///   mockgons -n 5 --pretty -o -
///
///   # Check a previously generated file
///   mockgons --check mock_polygons.geojson
#[derive(Parser, Debug)]
#[command(name = "mockgons")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches mockgons.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of polygons to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Minimum shape radius in km
    #[arg(long)]
    min_size_km: Option<f64>,

    /// Maximum shape radius in km
    #[arg(long)]
    max_size_km: Option<f64>,

    /// Minimum vertex count for n-gons (at least 3)
    #[arg(long)]
    min_vertices: Option<usize>,

    /// Maximum vertex count for n-gons
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Leave circles out of the shape choices
    #[arg(long)]
    no_circles: bool,

    /// Leave ovals out of the shape choices
    #[arg(long)]
    no_ovals: bool,

    /// Random seed for reproducible output (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output GeoJSON path, or "-" for stdout (defaults to mock_polygons.geojson)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Indent the GeoJSON output
    #[arg(long)]
    pretty: bool,

    /// Validate an existing GeoJSON file instead of generating
    #[arg(long, conflicts_with = "output")]
    check: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config parse warnings go through a warn-level subscriber until the
    // merged verbosity is known.
    let file_config = tracing::subscriber::with_default(log_subscriber(Level::WARN), || {
        load_file_config(&args)
    })?;
    tracing::subscriber::set_global_default(log_subscriber(log_level(&args, &file_config)))
        .context("Failed to install log subscriber")?;

    if let Some(ref path) = args.check {
        return check_file(path);
    }

    let params = merge_params(&args, &file_config);
    let seed = args
        .seed
        .or(file_config.seed)
        .unwrap_or_else(rand::random::<u64>);
    let pretty = args.pretty || file_config.pretty;
    let verbose = args.verbose || file_config.verbose;
    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let to_stdout = output_path == Path::new("-");

    if !to_stdout {
        println!("mockgons - Mock Polygon Generator");
        println!("=================================");
        println!();
    }

    if verbose && !to_stdout {
        println!("Configuration:");
        println!("  Count: {}", params.count);
        println!("  Size: {} - {} km", params.min_size_km, params.max_size_km);
        println!("  Vertices: {} - {}", params.min_vertices, params.max_vertices);
        println!(
            "  Circles: {}",
            if params.include_circles {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!(
            "  Ovals: {}",
            if params.include_ovals {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("  Seed: {}", seed);
        println!("  Output: {}", output_path.display());
        println!();
    }

    let spinner = create_spinner(&format!("Generating {} polygons...", params.count));
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let collection = match generate_mock_polygons(&mut rng, &params) {
        Ok(collection) => collection,
        Err(e) => {
            spinner.abandon_with_message("Generation failed");
            return Err(e).context("Failed to generate mock polygons");
        }
    };
    spinner.finish_with_message(format!(
        "Generated {} polygons [{:.1}s]",
        collection.len(),
        start.elapsed().as_secs_f32()
    ));

    let report = validate_collection(&collection);
    print_report(&report, to_stdout);
    if !report.is_valid() {
        bail!("Generated collection failed validation: {}", report.summary());
    }

    if to_stdout {
        let text = to_geojson_string(&collection, pretty).context("Failed to serialize GeoJSON")?;
        println!("{}", text);
        return Ok(());
    }

    let spinner = create_spinner("Writing GeoJSON file...");
    let start = Instant::now();
    let bytes = write_geojson(&output_path, &collection, pretty)
        .with_context(|| format!("Failed to write GeoJSON file: {}", output_path.display()))?;
    spinner.finish_with_message(format!(
        "Wrote {:.1} KB [{:.1}s]",
        bytes as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!("Output: {}", output_path.display());
    println!("Seed: {} (pass --seed {} to reproduce)", seed, seed);

    Ok(())
}

fn load_file_config(args: &Args) -> Result<FileConfig> {
    match args.config {
        Some(ref config_path) => {
            if !config_path.exists() {
                bail!("Config file not found: {:?}", config_path);
            }
            FileConfig::from_path(config_path)
        }
        None => Ok(FileConfig::load().unwrap_or_default()),
    }
}

/// Debug logs when either the flag or the config file asks for verbose output
fn log_level(args: &Args, file_config: &FileConfig) -> Level {
    if args.verbose || file_config.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn log_subscriber(level: Level) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

/// CLI flags win over config file values
fn merge_params(args: &Args, file_config: &FileConfig) -> GenerationParams {
    let base = file_config.params();
    GenerationParams {
        count: args.count.unwrap_or(base.count),
        min_size_km: args.min_size_km.unwrap_or(base.min_size_km),
        max_size_km: args.max_size_km.unwrap_or(base.max_size_km),
        min_vertices: args.min_vertices.unwrap_or(base.min_vertices),
        max_vertices: args.max_vertices.unwrap_or(base.max_vertices),
        include_circles: base.include_circles && !args.no_circles,
        include_ovals: base.include_ovals && !args.no_ovals,
    }
}

fn check_file(path: &Path) -> Result<()> {
    let geojson = read_geojson(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    let report = validate_geojson(&geojson);
    print_report(&report, false);

    if !report.is_valid() {
        bail!("{} failed validation", path.display());
    }
    Ok(())
}

fn print_report(report: &ValidationReport, to_stderr: bool) {
    if to_stderr {
        eprintln!("{}", report.summary());
        for warning in &report.warnings {
            eprintln!("  {}", warning);
        }
        return;
    }

    println!("{}", report.summary());
    for warning in &report.warnings {
        println!("  {}", warning);
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "mockgons",
            "-n",
            "12",
            "--max-vertices",
            "7",
            "--no-ovals",
        ]);
        let config = FileConfig::default();
        let params = merge_params(&args, &config);

        assert_eq!(params.count, 12);
        assert_eq!(params.min_vertices, 4);
        assert_eq!(params.max_vertices, 7);
        assert!(params.include_circles);
        assert!(!params.include_ovals);
    }

    #[test]
    fn test_config_verbose_enables_debug_logs() {
        let args = Args::parse_from(["mockgons"]);
        let config: FileConfig = toml::from_str("verbose = true").unwrap();
        assert_eq!(log_level(&args, &config), Level::DEBUG);

        let quiet = FileConfig::default();
        assert_eq!(log_level(&args, &quiet), Level::WARN);

        let args = Args::parse_from(["mockgons", "-v"]);
        assert_eq!(log_level(&args, &quiet), Level::DEBUG);
    }

    #[test]
    fn test_config_disables_circles() {
        let args = Args::parse_from(["mockgons"]);
        let config: FileConfig = toml::from_str("circles = false\nmax_size_km = 50.0").unwrap();
        let params = merge_params(&args, &config);

        assert!(!params.include_circles);
        assert_eq!(params.max_size_km, 50.0);
    }
}
