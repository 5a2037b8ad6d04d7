use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Cli {
    /// Log controller decisions at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a page's carousels and script on a virtual clock and print their events.
    Simulate(SimulateArgs),
    /// Print the carousels discovered on a page and their resolved options.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Virtual time to run until, in milliseconds.
    #[arg(long, default_value_t = 20_000)]
    until: u64,

    /// Treat the transition driver as lacking animation support.
    #[arg(long, default_value_t = false)]
    no_animation: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "carousel=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut page = carousel::Page::from_path(&args.in_path, !args.no_animation)
        .with_context(|| format!("load page '{}'", args.in_path.display()))?;
    page.run(carousel::Millis(args.until));

    for stage in page.stages() {
        for rec in stage.controller().bus().log() {
            let ev = &rec.event;
            let mut line = format!("{} {}", stage.id(), ev.kind.name());
            if let Some(i) = ev.related_index {
                line.push_str(&format!(" index={i}"));
            }
            if let Some(d) = ev.direction {
                line.push_str(&format!(" direction={d}"));
            }
            if rec.vetoed {
                line.push_str(" vetoed");
            }
            println!("{line}");
        }
    }
    for stage in page.stages() {
        let active = stage
            .controller()
            .active_index()
            .map_or_else(|| "-".to_owned(), |i| i.to_string());
        println!(
            "{} final active={} mode={:?}",
            stage.id(),
            active,
            stage.controller().run_mode()
        );
    }
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let f = std::fs::File::open(&args.in_path)
        .with_context(|| format!("open page '{}'", args.in_path.display()))?;
    let def = carousel::PageDef::from_reader(std::io::BufReader::new(f))?;
    def.validate()?;

    let mut out = Vec::new();
    for container in def.discover() {
        let options = container.options()?;
        out.push(serde_json::json!({
            "id": container.id,
            "items": container.items.len(),
            "options": options,
        }));
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serialize discovered carousels")?
    );
    Ok(())
}
