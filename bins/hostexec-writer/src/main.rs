use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, error};

/// Permission bits for files created by the writer.
const WRITER_FILE_MODE: u32 = 0o660;

/// hostexec file writer
#[derive(Parser, Debug)]
#[command(name = "hostexec-writer")]
#[command(about = "Create or truncate a file and write a string to it", long_about = None)]
struct Args {
    /// Path of the file to create or truncate
    file: PathBuf,

    /// String written to the file, byte for byte, with no trailing newline
    text: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    // The documented contract is exit code 1 for any argument problem, so
    // clap's own exit status must not surface. Help and version keep their
    // normal behavior.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    initialize_logging(args.debug);

    match write_file(&args.file, &args.text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(WRITER_FILE_MODE)
        .open(path)
        .map_err(|e| {
            error!("open of {} failed: {}", path.display(), e);
            e
        })?;

    // write_all retries short writes until every byte is handed to the file
    file.write_all(text.as_bytes()).map_err(|e| {
        error!("write to {} failed: {}", path.display(), e);
        e
    })?;

    debug!("wrote \"{}\" to \"{}\"", text, path.display());
    Ok(())
}

fn initialize_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
