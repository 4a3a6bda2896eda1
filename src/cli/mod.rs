//! Command line glue shared by the `perceplearn` and `percepclassify` binaries.

pub mod args;
pub mod commands;
pub mod output;

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;

/// Initialize logging to stderr with a `[LEVEL] message` format.
///
/// `RUST_LOG` is ignored so the level always follows the command line flags.
pub fn init_logging(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}
