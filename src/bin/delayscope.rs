use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use delayscope::{
    ActiveView, Dashboard, DashboardConfig, RecordStore, SampleOpts, SelectionState,
    generate_sample,
};

#[derive(Parser, Debug)]
#[command(name = "delayscope", version)]
struct Cli {
    /// Log pipeline activity to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a synthetic record set as JSON.
    Generate(GenerateArgs),
    /// Render the charts of one view (or all views).
    Render(RenderArgs),
    /// Print the KPI summary of the filtered records.
    Kpis(KpisArgs),
    /// Write the filtered records as CSV.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = SampleOpts::default().seed)]
    seed: u64,

    #[arg(long, default_value_t = SampleOpts::default().count)]
    count: usize,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Records JSON; without it a sample set is generated from `--seed`.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Seed of the generated sample set.
    #[arg(long, default_value_t = SampleOpts::default().seed, conflicts_with = "in_path")]
    seed: u64,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Keep only this carrier (repeatable).
    #[arg(long = "carrier")]
    carriers: Vec<String>,

    /// Keep flights from or to this airport (repeatable).
    #[arg(long = "airport")]
    airports: Vec<String>,

    /// Inclusive month index range, `START:END` with 0 = January.
    #[arg(long, value_parser = parse_months)]
    months: Option<(u8, u8)>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filters: FilterArgs,

    #[arg(long, value_enum, default_value_t = ViewChoice::All)]
    view: ViewChoice,

    /// Dashboard config JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

#[derive(Parser, Debug)]
struct KpisArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filters: FilterArgs,

    /// Print JSON instead of the one-line summary.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    filters: FilterArgs,

    /// Output CSV path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Overview,
    Carriers,
    Routes,
    All,
}

impl ViewChoice {
    fn views(self) -> &'static [ActiveView] {
        match self {
            Self::Overview => &[ActiveView::Overview],
            Self::Carriers => &[ActiveView::Carriers],
            Self::Routes => &[ActiveView::Routes],
            Self::All => &ActiveView::ALL,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Png,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
        Command::Kpis(args) => cmd_kpis(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "delayscope=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_months(s: &str) -> Result<(u8, u8), String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid month index '{v}': {e}"))
    };
    Ok((parse(start)?, parse(end)?))
}

fn load_store(source: &SourceArgs) -> anyhow::Result<RecordStore> {
    match &source.in_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read records '{}'", path.display()))?;
            RecordStore::from_json_str(&text)
                .with_context(|| format!("parse records '{}'", path.display()))
        }
        None => Ok(generate_sample(SampleOpts {
            seed: source.seed,
            ..SampleOpts::default()
        })?),
    }
}

fn build_selection(filters: &FilterArgs) -> anyhow::Result<SelectionState> {
    let mut selection = SelectionState::default();
    for code in &filters.carriers {
        selection.toggle_carrier(code);
    }
    for code in &filters.airports {
        selection.toggle_airport(code);
    }
    if let Some((start, end)) = filters.months {
        selection
            .set_month_range(start, end)
            .with_context(|| "apply --months")?;
    }
    Ok(selection)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    DashboardConfig::from_json_str(&text)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let store = generate_sample(SampleOpts {
        seed: args.seed,
        count: args.count,
    })?;
    write_file(&args.out, &store.to_json_string()?)?;
    eprintln!("wrote {} records to {}", store.len(), args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let store = load_store(&args.source)?;
    let selection = build_selection(&args.filters)?;
    let config = load_config(args.config.as_deref())?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut dashboard = Dashboard::with_selection(store, config, selection)?;
    for &view in args.view.views() {
        dashboard.set_active_view(view);
        for (kind, set) in &dashboard.frame().drawings {
            let path = args
                .out_dir
                .join(format!("{}.{}", kind.name(), args.format.extension()));
            match args.format {
                Format::Svg => write_file(&path, &delayscope::to_svg(set))?,
                Format::Json => write_file(
                    &path,
                    &serde_json::to_string_pretty(set).with_context(|| "serialize drawing")?,
                )?,
                Format::Png => delayscope::rasterize_png(set, &path)?,
            }
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn cmd_kpis(args: KpisArgs) -> anyhow::Result<()> {
    let store = load_store(&args.source)?;
    let selection = build_selection(&args.filters)?;
    let view = delayscope::filter(&store, &selection);
    let kpis = delayscope::compute_kpis(&view);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&kpis)?);
    } else {
        println!("{kpis}");
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let store = load_store(&args.source)?;
    let selection = build_selection(&args.filters)?;
    let view = delayscope::filter(&store, &selection);
    write_file(&args.out, &delayscope::to_csv(&view)?)?;
    eprintln!("wrote {} rows to {}", view.len(), args.out.display());
    Ok(())
}
