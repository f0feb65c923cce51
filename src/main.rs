use clap::Parser;
use rainfall_analyser::cli::{self, Args};
use rainfall_analyser::text_stream::ReaderSource;
use std::io;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(error) = cli::setup_logging(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }

    let stdin = io::stdin();
    let mut console_in = ReaderSource::new(stdin.lock());
    let mut console_out = io::stdout();

    match cli::run_session(&args, &mut console_in, &mut console_out) {
        Ok(Some(_result)) => {
            // Success - nothing is printed after the prompt
            process::exit(0);
        }
        Ok(None) => {
            // Failure already reported on stdout as "ERROR: ..."
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
