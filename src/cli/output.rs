//! Output files written by the CLI commands.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{PerceptError, Result};
use crate::ml::perceptron::{Predictions, TrainingSummary};

/// File name of the vanilla perceptron model.
pub const VANILLA_MODEL_FILE: &str = "vanillamodel.txt";

/// File name of the averaged perceptron model.
pub const AVERAGED_MODEL_FILE: &str = "averagedmodel.txt";

/// Default file name of the classification output.
pub const PREDICTIONS_FILE: &str = "percepoutput.txt";

/// Write one `<identifier> <True|Fake> <Pos|Neg>` line per prediction.
pub fn write_predictions<W: Write>(writer: &mut W, predictions: &Predictions) -> Result<()> {
    for prediction in predictions.iter() {
        writeln!(writer, "{prediction}")?;
    }
    Ok(())
}

/// Write predictions to a file, replacing any existing content.
pub fn write_predictions_file<P: AsRef<Path>>(path: P, predictions: &Predictions) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PerceptError::io_at(path, e))?;
    let mut writer = BufWriter::new(file);
    write_predictions(&mut writer, predictions)?;
    writer.flush()?;

    info!("Wrote {} predictions to {}", predictions.len(), path.display());
    Ok(())
}

/// One-line human readable description of a training run.
pub fn format_summary(summary: &TrainingSummary) -> String {
    format!(
        "{} perceptron: {} epochs, {} steps, {} authenticity updates, {} sentiment updates",
        summary.trainer,
        summary.epochs,
        summary.steps,
        summary.authenticity_updates,
        summary.sentiment_updates
    )
}
