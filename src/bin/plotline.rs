use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plotline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build straight and smooth paths (plus lengths) for a sample series.
    Paths(PathsArgs),
    /// Compute the stroke dash offset of a reveal animation at a point in time.
    Reveal(RevealArgs),
}

#[derive(Parser, Debug)]
struct PathsArgs {
    /// Input samples JSON: `[{ "index": 0, "value": 81 }, ...]`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Engine config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chart width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Chart height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Control distance policy.
    #[arg(long, value_enum)]
    policy: Option<PolicyChoice>,

    /// Ratio for the proportional policy.
    #[arg(long, default_value_t = plotline::DistancePolicy::DEFAULT_RATIO)]
    ratio: f64,

    /// Pixel offset for the fixed policy.
    #[arg(long, default_value_t = 7.5)]
    offset: f64,

    /// Use sample index/value as coordinates instead of fitting a chart box.
    #[arg(long)]
    identity: bool,
}

#[derive(Parser, Debug)]
struct RevealArgs {
    /// Total stroke length.
    #[arg(long)]
    length: f64,

    /// Elapsed animation time in milliseconds.
    #[arg(long)]
    elapsed_ms: u64,

    /// Engine config JSON (reveal duration and easing).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Animation duration in milliseconds.
    #[arg(long)]
    duration_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    Proportional,
    Fixed,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Paths(args) => cmd_paths(args),
        Command::Reveal(args) => cmd_reveal(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<plotline::EngineConfig> {
    Ok(match path {
        Some(p) => plotline::EngineConfig::from_path(p)?,
        None => plotline::EngineConfig::default(),
    })
}

fn read_samples_json(path: &Path) -> anyhow::Result<Vec<plotline::Sample>> {
    let f = File::open(path).with_context(|| format!("open samples '{}'", path.display()))?;
    let r = BufReader::new(f);
    let samples: Vec<plotline::Sample> =
        serde_json::from_reader(r).with_context(|| "parse samples JSON")?;
    Ok(samples)
}

fn cmd_paths(args: PathsArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(w) = args.width {
        cfg.chart.width = w;
    }
    if let Some(h) = args.height {
        cfg.chart.height = h;
    }
    match args.policy {
        Some(PolicyChoice::Proportional) => {
            cfg.smoothing.policy = plotline::DistancePolicy::Proportional { ratio: args.ratio };
        }
        Some(PolicyChoice::Fixed) => {
            cfg.smoothing.policy = plotline::DistancePolicy::Fixed {
                offset: args.offset,
            };
        }
        None => {}
    }

    let samples = read_samples_json(&args.in_path)?;
    let engine = plotline::CurveEngine::new(cfg.clone())?;
    let curves = if args.identity {
        engine.recompute(&samples, &plotline::IdentityMapper)?
    } else {
        let mapper = plotline::ChartMapper::fit(&samples, &cfg.chart)?;
        engine.recompute(&samples, &mapper)?
    };

    let out = serde_json::json!({
        "svg": {
            "straight": curves.straight.to_svg(),
            "smooth": curves.smooth.to_svg(),
            "control_start": curves.overlay.start_svg(),
            "control_end": curves.overlay.end_svg(),
        },
        "curves": curves,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(d) = args.duration_ms {
        cfg.reveal.duration_ms = d;
    }

    let reveal = plotline::StrokeReveal::new(args.length, cfg.reveal)?;
    let fraction = reveal.fraction_at(args.elapsed_ms);
    let out = serde_json::json!({
        "dash_array": reveal.dash_array(),
        "dash_offset": reveal.dash_offset(fraction),
        "fraction": fraction,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
