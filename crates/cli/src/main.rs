//! Clusterpolate CLI - kernel-weighted estimation for clustered 2D data

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use clusterpolate::{KernelConfig, MembershipRamp, ProcessingMode};
use clusterpolate_colormap::ColorScheme;
use clusterpolate_render::{layer_image, render, Layer, RenderOptions, RgbaImage};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "clusterpolate")]
#[command(author, version, about = "Kernel-weighted estimation for clustered 2D data", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clusterpolate a CSV point file and write a PNG
    Run {
        /// Input CSV file with `x,y,value` rows (`#` starts a comment)
        input: PathBuf,
        /// Output PNG file
        output: PathBuf,
        /// Kernel support radius in data units
        #[arg(short, long)]
        radius: f64,
        /// Output size as WIDTHxHEIGHT
        #[arg(short, long, default_value = "400x400")]
        size: String,
        /// Query area as "x0,y0,x1,y1" (default: input bounding box)
        #[arg(short, long)]
        area: Option<String>,
        /// Kernel shape: bump, gaussian, epanechnikov, uniform
        #[arg(short, long, default_value = "bump")]
        kernel: String,
        /// Worker threads (0 = all cores, 1 = sequential)
        #[arg(short, long, default_value = "0")]
        workers: usize,
        /// Membership ramp as "min,max" (default: saturate at one sample)
        #[arg(short, long)]
        membership: Option<String>,
        /// Color scheme: grayscale, summer, heat, divergent
        #[arg(long, default_value = "summer")]
        scheme: String,
        /// Rendered surface: value, density, membership
        #[arg(short, long, default_value = "value")]
        layer: String,
        /// Color range as "min,max" (default: span of the estimates)
        #[arg(long)]
        range: Option<String>,
    },
    /// Render the built-in crescent demo dataset
    Demo {
        /// Output PNG file
        #[arg(default_value = "clusterpolate.png")]
        output: PathBuf,
        /// Number of sample points
        #[arg(short = 'n', long, default_value = "500")]
        points: usize,
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Output size as WIDTHxHEIGHT
        #[arg(short, long, default_value = "400x400")]
        size: String,
        /// Kernel support radius
        #[arg(short, long, default_value = "0.2")]
        radius: f64,
        /// Color scheme: grayscale, summer, heat, divergent
        #[arg(long, default_value = "summer")]
        scheme: String,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_points(path: &PathBuf) -> Result<(Vec<(f64, f64)>, Vec<f64>)> {
    let pb = spinner("Reading points...");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut points = Vec::new();
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (x, y, value) = parse_point_row(line)
            .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
        points.push((x, y));
        values.push(value);
    }
    if points.is_empty() {
        anyhow::bail!("No data rows in {}", path.display());
    }

    pb.finish_and_clear();
    info!("Input: {} points", points.len());
    Ok((points, values))
}

fn write_image(image: &RgbaImage, path: &PathBuf) -> Result<()> {
    let pb = spinner("Writing output...");
    image.save(path).context("Failed to write output")?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &PathBuf, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn parse_point_row(row: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = row.split(',').collect();
    if parts.len() != 3 {
        anyhow::bail!("Row must be 'x,y,value', got: {}", row);
    }
    let x: f64 = parts[0].trim().parse().context("Invalid x")?;
    let y: f64 = parts[1].trim().parse().context("Invalid y")?;
    let value: f64 = parts[2].trim().parse().context("Invalid value")?;
    Ok((x, y, value))
}

fn parse_size(s: &str) -> Result<(usize, usize)> {
    let lower = s.to_lowercase();
    let parts: Vec<&str> = lower.split('x').collect();
    if parts.len() != 2 {
        anyhow::bail!("Size must be 'WIDTHxHEIGHT', got: {}", s);
    }
    let width: usize = parts[0].trim().parse().context("Invalid width")?;
    let height: usize = parts[1].trim().parse().context("Invalid height")?;
    Ok((width, height))
}

fn parse_area(s: &str) -> Result<((f64, f64), (f64, f64))> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        anyhow::bail!("Area must be 'x0,y0,x1,y1', got: {}", s);
    }
    let mut corners = [0.0f64; 4];
    for (slot, part) in corners.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .with_context(|| format!("Invalid coordinate: {}", part))?;
    }
    Ok(((corners[0], corners[1]), (corners[2], corners[3])))
}

fn parse_pair(s: &str, what: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        anyhow::bail!("{} must be 'min,max', got: {}", what, s);
    }
    let min: f64 = parts[0].trim().parse().context("Invalid min")?;
    let max: f64 = parts[1].trim().parse().context("Invalid max")?;
    Ok((min, max))
}

fn parse_kernel(shape: &str, radius: f64) -> Result<KernelConfig> {
    let kernel = match shape.to_lowercase().as_str() {
        "bump" | "b" => KernelConfig::bump(radius),
        "gaussian" | "gauss" | "g" => KernelConfig::gaussian(radius),
        "epanechnikov" | "epa" | "e" => KernelConfig::epanechnikov(radius),
        "uniform" | "flat" | "u" => KernelConfig::uniform(radius),
        _ => anyhow::bail!(
            "Unknown kernel: {}. Use bump, gaussian, epanechnikov, or uniform.",
            shape
        ),
    };
    kernel
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid kernel: {}", e))?;
    Ok(kernel)
}

fn parse_membership(s: &str) -> Result<MembershipRamp> {
    let (min, max) = parse_pair(s, "Membership")?;
    let ramp = MembershipRamp::new(min, max);
    ramp.validate()
        .map_err(|e| anyhow::anyhow!("Invalid membership ramp: {}", e))?;
    Ok(ramp)
}

fn parse_scheme(s: &str) -> Result<ColorScheme> {
    match s.to_lowercase().as_str() {
        "grayscale" | "gray" | "grey" => Ok(ColorScheme::Grayscale),
        "summer" => Ok(ColorScheme::Summer),
        "heat" => Ok(ColorScheme::Heat),
        "divergent" | "div" => Ok(ColorScheme::Divergent),
        _ => anyhow::bail!(
            "Unknown scheme: {}. Use grayscale, summer, heat, or divergent.",
            s
        ),
    }
}

fn parse_layer(s: &str) -> Result<Layer> {
    match s.to_lowercase().as_str() {
        "value" | "values" | "v" => Ok(Layer::Value),
        "density" | "d" => Ok(Layer::Density),
        "membership" | "m" => Ok(Layer::Membership),
        _ => anyhow::bail!("Unknown layer: {}. Use value, density, or membership.", s),
    }
}

fn worker_mode(workers: usize) -> ProcessingMode {
    match workers {
        0 => ProcessingMode::Parallel,
        1 => ProcessingMode::Sequential,
        n => ProcessingMode::ParallelWith(n),
    }
}

// ─── Demo dataset ───────────────────────────────────────────────────────

/// Crescent-shaped point cloud along the upper unit circle, value rising
/// with the angle. The gap in the lower arc is the interesting part: it
/// shows estimates fading out where data runs thin.
fn crescent_dataset(n: usize, seed: u64) -> (Vec<(f64, f64)>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let angle_dist = Normal::new(0.0, 0.75).unwrap();
    let radius_dist = Normal::new(1.0, 0.05).unwrap();
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let mut points = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        let angle = angle_dist.sample(&mut rng) - 0.1 * std::f64::consts::PI;
        let radius = radius_dist.sample(&mut rng);
        points.push((radius * angle.sin(), radius * angle.cos()));
        values.push(angle.sin() + noise_dist.sample(&mut rng));
    }
    (points, values)
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        // ── Run ──────────────────────────────────────────────────────
        Commands::Run {
            input,
            output,
            radius,
            size,
            area,
            kernel,
            workers,
            membership,
            scheme,
            layer,
            range,
        } => {
            let size = parse_size(&size)?;
            let kernel = parse_kernel(&kernel, radius)?;
            let scheme = parse_scheme(&scheme)?;
            let layer = parse_layer(&layer)?;

            let (points, values) = read_points(&input)?;

            let mut options = RenderOptions::new(size, kernel);
            options.mode = worker_mode(workers);
            options.scheme = scheme;
            if let Some(s) = &area {
                options.area = Some(parse_area(s)?);
            }
            if let Some(s) = &membership {
                options.membership = Some(parse_membership(s)?);
            }
            if let Some(s) = &range {
                options.range = Some(parse_pair(s, "Range")?);
            }

            let pb = spinner("Estimating grid...");
            let start = Instant::now();
            let (result, image) =
                render(&points, &values, &options).context("Clusterpolation failed")?;
            let elapsed = start.elapsed();
            pb.finish_and_clear();
            info!("Grid: {} x {}", result.width(), result.height());

            let image = match layer {
                Layer::Value => image,
                other => layer_image(&result, other, scheme, options.range)
                    .context("Failed to colorize layer")?,
            };
            write_image(&image, &output)?;
            done("Clusterpolation", &output, elapsed);
        }

        // ── Demo ─────────────────────────────────────────────────────
        Commands::Demo {
            output,
            points: n,
            seed,
            size,
            radius,
            scheme,
        } => {
            let size = parse_size(&size)?;
            let scheme = parse_scheme(&scheme)?;

            let (points, values) = crescent_dataset(n, seed);
            info!("Demo dataset: {} points, seed {}", n, seed);

            let mut options = RenderOptions::new(size, KernelConfig::bump(radius));
            options.area = Some(((-1.5, -1.5), (1.5, 1.5)));
            options.scheme = scheme;

            let pb = spinner("Estimating grid...");
            let start = Instant::now();
            let (_, image) =
                render(&points, &values, &options).context("Clusterpolation failed")?;
            let elapsed = start.elapsed();
            pb.finish_and_clear();

            write_image(&image, &output)?;
            done("Demo", &output, elapsed);
        }
    }

    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────
