use std::io::Write;
use std::time::Instant;

use clap::ArgGroup;
use clap::Parser;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use graphdot::{GraphdotOptions, RenderArgs, run_main};
use graphdot_error::{Error, Result};

#[derive(Parser, Debug)]
#[command(
    name = "graphdot",
    about = "graphdot: turn graph documents into DOT scripts and pictures",
    version,
    group = ArgGroup::new("inputs").required(true).args(["files", "dirs"])
)]
pub struct Cli {
    /// Graph documents to serialize (repeatable)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    files: Vec<String>,

    /// Directories to scan recursively for .json graph documents (repeatable)
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    dirs: Vec<String>,

    /// Override the graph name written in the header
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    #[command(flatten)]
    render: RenderArgs,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = GraphdotOptions {
        files: args.files,
        dirs: args.dirs,
        output: args.output.clone(),
        name: args.name,
        render: args.render,
    };

    match run_main(&opts) {
        Ok(Some(output)) => {
            if let Some(ref path) = args.output {
                std::fs::write(path, &output).map_err(|e| {
                    Error::write_failed(path.clone())
                        .with_operation("main::run")
                        .set_source(e)
                })?;
                tracing::info!(path = %path, "output written");
            } else {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&output)?;
                stdout.flush()?;
            }
        }
        Ok(None) => {
            // Output went to the viewer
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            return Err(e);
        }
    }

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
