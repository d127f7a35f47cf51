use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use sectionflow::{
    CollectionLayout as _, ConcreteSections, LayoutAttributes, Rect, ScreenConfig,
    ScreenController, Side, Size,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sectionflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prepare the sample screen and print the attributes visible in a rectangle as JSON.
    Layout(LayoutArgs),
    /// Run the toggle action and print one JSON batch summary per run.
    Toggle(ToggleArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Screen configuration JSON (defaults to the built-in screen).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bucket to display.
    #[arg(long, value_enum, default_value_t = SideChoice::A)]
    side: SideChoice,

    /// Query rectangle as `X,Y,W,H` (defaults to the viewport bounds).
    #[arg(long, value_parser = parse_rect)]
    rect: Option<Rect>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ToggleArgs {
    /// Screen configuration JSON (defaults to the built-in screen).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of toggles to run.
    #[arg(long, default_value_t = 1)]
    times: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideChoice {
    A,
    B,
}

impl From<SideChoice> for Side {
    fn from(choice: SideChoice) -> Self {
        match choice {
            SideChoice::A => Side::A,
            SideChoice::B => Side::B,
        }
    }
}

#[derive(serde::Serialize)]
struct LayoutDump {
    side: Side,
    content_size: Size,
    attributes: Vec<LayoutAttributes>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Toggle(args) => cmd_toggle(args),
    }
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid rect '{s}': {e}"))?;
    match parts.as_slice() {
        &[x, y, w, h] if w >= 0.0 && h >= 0.0 => Ok(Rect::new(x, y, x + w, y + h)),
        [_, _, _, _] => Err(format!("rect '{s}' has a negative size")),
        _ => Err(format!("rect '{s}' must have four components X,Y,W,H")),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ScreenConfig> {
    match path {
        Some(path) => ScreenConfig::from_path(path)
            .with_context(|| format!("load screen config '{}'", path.display())),
        None => Ok(ScreenConfig::default()),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut screen = ScreenController::<ConcreteSections>::new(&config)?;
    if screen.current_side() != Side::from(args.side) {
        screen.toggle()?;
    }

    let host = screen.host_mut();
    let content_size = host.content_size();
    let rect = args.rect.unwrap_or_else(|| host.bounds());
    let attributes = host.layout().attributes_for_elements(rect);
    tracing::info!(?rect, count = attributes.len(), "dumping layout attributes");

    let dump = LayoutDump {
        side: screen.current_side(),
        content_size,
        attributes,
    };
    print_json(&dump, args.pretty)
}

fn cmd_toggle(args: ToggleArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut screen = ScreenController::<ConcreteSections>::new(&config)?;
    screen.host_mut().layout_if_needed();

    for run in 0..args.times {
        let summary = screen
            .toggle()
            .with_context(|| format!("toggle run {run}"))?;
        tracing::info!(
            run,
            side = ?screen.current_side(),
            deleted = summary.deleted.len(),
            inserted = summary.inserted.len(),
            "toggled"
        );
        print_json(&summary, false)?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize JSON output")?;
    println!("{out}");
    Ok(())
}
