use std::path::PathBuf;

use clap::Parser;
use glotta_drv::{Config, Session};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compile a source file through the whole pipeline, emitting `.sym`,
/// `.int`, and `.asm` next to it.
#[derive(Parser, Debug)]
#[command(name = "glotta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiles a source file to RISC-V assembly")]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Dump tokens, the AST, and per-phase timing to stderr
    #[arg(short, long)]
    debug: bool,

    /// Raise the log level; repeat for more detail (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Basename for the emitted artifacts (defaults to the input's stem)
    #[arg(long)]
    emit: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug, cli.verbose);

    let config = Config {
        input_file: cli.input,
        debug: cli.debug,
        output_stem: cli.emit,
    };

    Session::new(config).compile().map_err(|e| anyhow::anyhow!("{:#}", e))
}

fn init_logging(debug: bool, verbose: u8) {
    let level = match (debug, verbose) {
        (true, _) | (_, 2..) => "debug",
        (false, 1) => "info",
        (false, 0) => "warn",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_target(false))
        .init();
}
