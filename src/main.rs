use clap::Parser;
use palmer_stats::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; every option has a survey default, so
    // a bare invocation runs the standard Adelie/Biscoe survey
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
