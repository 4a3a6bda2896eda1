//! perceplearn binary: trains the vanilla and averaged models.

use std::process;

use clap::Parser;

use percept::cli::{LearnArgs, init_logging, run_learn};

fn main() {
    // Parse command line arguments using clap
    let args = LearnArgs::parse();

    init_logging(args.verbosity.log_level());

    if let Err(e) = run_learn(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
