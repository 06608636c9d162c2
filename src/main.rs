use std::io::{IsTerminal, Write, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use color_eyre::Result;

use memchart::app::App;
use memchart::config::{self, Config, load_config, load_config_from_path};
use memchart::logging;
use memchart::system::collector::Collector;
use memchart::system::sampler::PsSampler;
use memchart::system::snapshot::MemorySnapshot;
use memchart::ui;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    /// Run `ps` and parse its output
    Ps,
    /// Read the process table through sysinfo
    Native,
}

#[derive(Parser)]
#[command(
    name = "memchart",
    about = "Bar chart of the processes using the most memory"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of processes to show
    #[arg(long)]
    top: Option<usize>,

    /// Terminal width to lay out for, instead of detecting it
    #[arg(long)]
    width: Option<usize>,

    /// Color output: always, auto, never
    #[arg(long)]
    color: Option<String>,

    /// Do not clear the screen before printing
    #[arg(long, default_value_t = false)]
    no_clear: bool,

    /// Where to read the process table from
    #[arg(long, value_enum, default_value_t = Source::Ps)]
    source: Source,

    /// Print the report as JSON instead of a chart
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log to stderr as JSON lines
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json)?;

    let app = App::new(load_config_for_cli(&cli));

    let sampled = match cli.source {
        Source::Ps => {
            let memory = MemorySnapshot::read();
            let mut sampler = PsSampler::from_config(&app.config().sampler);
            app.collect(&mut sampler, memory).await
        }
        Source::Native => {
            let mut collector = Collector::new();
            let memory = collector.memory();
            app.collect(&mut collector, memory).await
        }
    };

    let report = match sampled {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(%err, "sampler unavailable");
            eprintln!("Error fetching process list: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut out = stdout().lock();
    if cli.json {
        ui::json::render(&mut out, &report)?;
    } else {
        let width = cli
            .width
            .unwrap_or_else(|| ui::layout::terminal_width(app.config().layout.fallback_width));
        let options = app.render_options(width, out.is_terminal());
        ui::draw(&mut out, &report.memory, &report.ranking, &options)?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(top) = cli.top {
        config.general.top = top;
    }
    if let Some(ref color) = cli.color {
        config.general.color = color.clone();
    }
    if cli.no_clear {
        config.general.clear_screen = false;
    }
    tracing::debug!(path = ?cli.config.clone().or_else(config::config_path), "loaded config");

    config
}
