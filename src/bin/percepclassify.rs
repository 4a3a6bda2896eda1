//! percepclassify binary: labels reviews with a trained model.

use std::process;

use clap::Parser;

use percept::cli::{ClassifyArgs, init_logging, run_classify};

fn main() {
    // Parse command line arguments using clap
    let args = ClassifyArgs::parse();

    init_logging(args.verbosity.log_level());

    if let Err(e) = run_classify(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
