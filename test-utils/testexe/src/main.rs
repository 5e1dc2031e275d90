use clap::Parser;
use std::io::Write;

/// Test executable for hostexec end-to-end testing
#[derive(Parser, Debug)]
#[command(name = "testexe")]
#[command(about = "Scriptable child process for execution-layer testing", long_about = None)]
struct Args {
    /// Print the program name (argv[0]) as the first output line
    #[arg(long)]
    print_argv0: bool,

    /// Print each value on its own output line, in order
    #[arg(long = "echo", value_name = "VALUE")]
    echo: Vec<String>,

    /// Exit with this code after producing output
    #[arg(long, default_value = "0")]
    exit_code: i32,

    /// Raise this signal number instead of exiting normally
    #[arg(long)]
    raise_signal: Option<i32>,
}

fn main() {
    let args = Args::parse();

    if args.print_argv0 {
        let argv0 = std::env::args().next().unwrap_or_default();
        println!("{}", argv0);
    }

    for value in &args.echo {
        println!("{}", value);
    }

    if let Some(signo) = args.raise_signal {
        // Flush first so redirected output is not lost when the signal hits
        std::io::stdout().flush().expect("flush stdout");

        let signal = nix::sys::signal::Signal::try_from(signo).expect("valid signal number");
        nix::sys::signal::raise(signal).expect("raise signal");
        unreachable!("signal {} did not terminate the process", signo);
    }

    std::process::exit(args.exit_code);
}
