use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "emocanvas", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an emotion distribution to a PNG or JPEG.
    Render(RenderArgs),
    /// Print the distribution summary and the zone layout.
    Zones(ZonesArgs),
    /// Print the emotion palette.
    Palette,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Input distribution JSON (`{"joy": 60, "sadness": 40}`; English or Korean labels).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Inline distribution, e.g. `joy=60,sadness=40`.
    #[arg(long)]
    emotions: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Style: dynamic, waves, aurora, abstract or marble.
    #[arg(long, default_value = "dynamic")]
    style: String,

    /// Output path; `.jpg`/`.jpeg` selects JPEG. Defaults to `emotion_<dominant>.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Seed; a random one is drawn (and printed) when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Use mid-range style parameters instead of random ones.
    #[arg(long, default_value_t = false)]
    fixed_params: bool,

    /// Dedicated rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Handling of percents that do not sum to 100.
    #[arg(long, value_enum, default_value_t = NormalizeChoice::Rescale)]
    normalize: NormalizeChoice,

    /// Print the zones and drawn parameters as JSON on stdout.
    #[arg(long)]
    dump_config: bool,
}

#[derive(Parser, Debug)]
struct ZonesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Handling of percents that do not sum to 100.
    #[arg(long, value_enum, default_value_t = NormalizeChoice::Rescale)]
    normalize: NormalizeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NormalizeChoice {
    Rescale,
    Strict,
    Raw,
}

impl From<NormalizeChoice> for emocanvas::NormalizePolicy {
    fn from(choice: NormalizeChoice) -> Self {
        match choice {
            NormalizeChoice::Rescale => emocanvas::NormalizePolicy::Rescale,
            NormalizeChoice::Strict => emocanvas::NormalizePolicy::Strict,
            NormalizeChoice::Raw => emocanvas::NormalizePolicy::Raw,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Zones(args) => cmd_zones(args),
        Command::Palette => cmd_palette(),
    }
}

fn read_distribution_json(path: &Path) -> anyhow::Result<emocanvas::EmotionDistribution> {
    let f = File::open(path).with_context(|| format!("open distribution '{}'", path.display()))?;
    let r = BufReader::new(f);
    let dist: emocanvas::EmotionDistribution =
        serde_json::from_reader(r).with_context(|| "parse distribution JSON")?;
    Ok(dist)
}

fn read_input(input: &InputArgs) -> anyhow::Result<emocanvas::EmotionDistribution> {
    match (&input.in_path, &input.emotions) {
        (Some(path), _) => read_distribution_json(path),
        (None, Some(pairs)) => pairs
            .parse()
            .with_context(|| format!("parse --emotions '{pairs}'")),
        (None, None) => anyhow::bail!("either --in or --emotions is required"),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let dist = read_input(&args.input)?;
    let opts = emocanvas::RenderOpts {
        resolution: emocanvas::Resolution::new(args.width, args.height)?,
        seed: args.seed,
        params: if args.fixed_params {
            emocanvas::ParamSource::Fixed
        } else {
            emocanvas::ParamSource::Random
        },
        normalize: args.normalize.into(),
        threads: args.threads,
        cancel: None,
    };

    let output = emocanvas::render_named(&dist, &args.style, &opts)
        .with_context(|| format!("render style '{}'", args.style))?;

    if args.dump_config {
        let dump = serde_json::json!({
            "style": output.style,
            "seed": output.seed,
            "zones": output.zones,
            "config": output.config,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(output.default_file_name()));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    output
        .save(&out)
        .with_context(|| format!("write image '{}'", out.display()))?;

    eprintln!("seed {}", output.seed);
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_zones(args: ZonesArgs) -> anyhow::Result<()> {
    let raw = read_input(&args.input)?;
    let policy: emocanvas::NormalizePolicy = args.normalize.into();
    let dist = policy.apply(&raw)?;
    for line in dist.summary_lines() {
        println!("{line}");
    }
    println!();
    println!("{:<13} {:>8} {:>8} {:>8}  color", "emotion", "start", "end", "strength");
    for zone in emocanvas::build_zones(&dist)? {
        println!(
            "{:<13} {:>8.2} {:>8.2} {:>8.3}  {}",
            zone.emotion.name(),
            zone.start,
            zone.end,
            zone.strength,
            zone.color.to_hex()
        );
    }
    Ok(())
}

fn cmd_palette() -> anyhow::Result<()> {
    for emotion in emocanvas::Emotion::ALL {
        println!(
            "{:<13} {:<4} {}",
            emotion.name(),
            emotion.native_name(),
            emotion.base_color().to_hex()
        );
    }
    Ok(())
}
