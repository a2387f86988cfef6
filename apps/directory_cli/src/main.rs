use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use directory_core::{
    ListController, LoadState, SimulatedUserRepository, UnavailableUserDataProvider,
    UserDataProvider,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod screen;

use config::load_settings;

const CLEAR_LINE: &str = "\r\x1b[2K";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Loads the user directory and prints it as a list")]
struct Args {
    #[arg(long, default_value = "directory.toml")]
    config: PathBuf,
    /// Overrides the simulated network latency.
    #[arg(long)]
    latency_ms: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Wire a provider that always fails instead of the simulated repository.
    #[arg(long)]
    simulate_failure: bool,
}

fn build_provider(simulate_failure: bool) -> Arc<dyn UserDataProvider> {
    if simulate_failure {
        Arc::new(UnavailableUserDataProvider::default())
    } else {
        Arc::new(SimulatedUserRepository::new())
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(latency_ms) = args.latency_ms {
        settings.load_latency_ms = latency_ms;
    }
    info!(
        load_latency_ms = settings.load_latency_ms,
        simulate_failure = args.simulate_failure,
        "starting user directory"
    );

    // One provider for the whole run, injected into the screen's controller.
    let provider = build_provider(args.simulate_failure);
    let controller = ListController::new(provider, settings.controller_config());

    // Spinner frames only make sense on a terminal; otherwise print the
    // final screen once.
    let animate = args.format == OutputFormat::Text && io::stdout().is_terminal();
    let mut stdout = io::stdout();
    if animate {
        print!("{}", render::render_header());
        stdout.flush()?;
    }

    let settled = screen::wait_until_settled(&controller, settings.spinner_tick(), |frame| {
        if !animate {
            return Ok(());
        }
        let mut stdout = io::stdout();
        write!(stdout, "\r{}", render::loading_line(frame))?;
        stdout.flush()
    })
    .await?
    .ok_or_else(|| anyhow!("controller stopped before the user load settled"))?;

    match (&settled, args.format) {
        (_, OutputFormat::Text) if animate => {
            println!("{CLEAR_LINE}{}", render::render_body(&settled, 0));
        }
        (_, OutputFormat::Text) => {
            print!("{}", render::render_screen(&settled, 0));
        }
        (LoadState::Loaded(records), OutputFormat::Json) => {
            println!("{}", render::render_json(records)?);
        }
        (LoadState::Failed(err), OutputFormat::Json) => {
            eprintln!("{err}");
        }
        (LoadState::Empty | LoadState::Loading, OutputFormat::Json) => {}
    }
    stdout.flush()?;

    if let Some(err) = settled.error() {
        warn!(error = %err, "user load failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
