use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use flow_validator::parse::{self, RoutingGraph};
use flow_validator::report::{self, ERROR_GLYPH};
use flow_validator::validate_flow;
use tracing::{Level, debug, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit code when the flow has one or more errors. Warnings never fail a run.
const EXIT_INVALID: u8 = 1;
/// Exit code when the input could not be read or parsed.
const EXIT_UNREADABLE: u8 = 2;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Pre-flight validator for multi-screen Flow JSON documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the Flow JSON file
    flow_path: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text", env = "FLOW_VALIDATE_FORMAT")]
    format: Format,

    /// Print the routing graph as Graphviz DOT after the report
    #[arg(long)]
    graph: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    init_tracing(cli.log_json, level);

    let flow = match parse::load(&cli.flow_path) {
        Ok(flow) => flow,
        Err(e) => {
            error!(path = %cli.flow_path.display(), "input could not be parsed");
            eprintln!("{} {}", ERROR_GLYPH, e);
            return ExitCode::from(EXIT_UNREADABLE);
        }
    };
    debug!(path = %cli.flow_path.display(), "flow loaded");

    let result = validate_flow(&flow);

    match cli.format {
        Format::Text => print!("{}", report::render_text(&result)),
        Format::Json => match report::render_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} Failed to render report: {}", ERROR_GLYPH, e);
                return ExitCode::from(EXIT_UNREADABLE);
            }
        },
    }

    if cli.graph {
        let graph = RoutingGraph::build(&flow);
        println!("{}", graph.to_dot());
        for screen in graph.unreachable_from_entry() {
            warn!(screen, "screen is not reachable from the entry screen");
        }
    }

    if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}

/// Logs go to stderr so stdout stays a clean report.
fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
