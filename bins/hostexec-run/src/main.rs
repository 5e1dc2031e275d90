use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use hostexec_process::{run_direct, run_direct_redirected, run_shell};

/// hostexec command runner
#[derive(Parser, Debug)]
#[command(name = "hostexec-run")]
#[command(about = "Run commands through the hostexec execution layer", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: RunCommand,
}

#[derive(Subcommand, Debug)]
enum RunCommand {
    /// Run a full command line through the shell
    Shell {
        /// Command line handed to /bin/sh -c unparsed
        line: String,
    },
    /// Run an executable directly by absolute path, bypassing the shell
    Exec {
        /// Redirect the command's standard output to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Absolute path of the executable (no PATH search is performed)
        path: String,

        /// Arguments passed to the executable
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = initialize_logging(args.debug) {
        eprintln!("failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match &args.command {
        RunCommand::Shell { line } => run_shell(line),
        RunCommand::Exec {
            output: Some(file),
            path,
            args,
        } => run_direct_redirected(file, path, args),
        RunCommand::Exec {
            output: None,
            path,
            args,
        } => run_direct(path, args),
    };

    match result {
        Ok(outcome) if outcome.success => {
            info!("command succeeded");
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            error!("command failed: {}", outcome.class);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("command could not be launched: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn initialize_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
