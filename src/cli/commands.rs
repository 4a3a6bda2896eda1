//! Command implementations for the percept binaries.

use std::fs;
use std::time::Instant;

use log::info;

use crate::cli::args::{ClassifyArgs, LearnArgs};
use crate::cli::output::{format_summary, write_predictions_file};
use crate::error::{PerceptError, Result};
use crate::ml::corpus::{load_inference_data, load_training_data};
use crate::ml::perceptron::{
    AveragedPerceptron, Classifier, Model, Predictions, Trainer, TrainerConfig, TrainingSet,
    VanillaPerceptron,
};

/// Train both perceptron variants and write their model files.
pub fn run_learn(args: &LearnArgs) -> Result<()> {
    let config = TrainerConfig::default().with_epochs(args.epochs);
    config.validate()?;

    let start_time = Instant::now();
    let records = load_training_data(&args.train_file)?;
    let data = TrainingSet::from_records(&records)?;
    info!(
        "Loaded {} training records from {} ({} vocabulary words)",
        data.len(),
        args.train_file.display(),
        data.vocabulary().len()
    );

    if !args.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&args.output_dir)
            .map_err(|e| PerceptError::io_at(&args.output_dir, e))?;
    }

    let trainers: [(Box<dyn Trainer>, _); 2] = [
        (
            Box::new(VanillaPerceptron::new(config)),
            args.vanilla_model_path(),
        ),
        (
            Box::new(AveragedPerceptron::new(config)),
            args.averaged_model_path(),
        ),
    ];

    for (trainer, path) in trainers {
        let trained = trainer.train(&data)?;
        info!("{}", format_summary(&trained.summary));
        trained.model.save(&path)?;
    }

    info!("Training finished in {} ms", start_time.elapsed().as_millis());
    Ok(())
}

/// Classify every record of the data file and write the predictions.
pub fn run_classify(args: &ClassifyArgs) -> Result<Predictions> {
    let start_time = Instant::now();
    let model = Model::load(&args.model_file)?;
    let records = load_inference_data(&args.data_file)?;

    let classifier = Classifier::new(model);
    let predictions = classifier.classify(&records)?;
    write_predictions_file(&args.output, &predictions)?;

    info!(
        "Classification finished in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::cli::args::VerbosityArgs;

    fn learn_args(train_file: PathBuf, output_dir: PathBuf, epochs: usize) -> LearnArgs {
        LearnArgs {
            train_file,
            output_dir,
            epochs,
            verbosity: VerbosityArgs::default(),
        }
    }

    #[test]
    fn test_learn_then_classify() {
        let dir = TempDir::new().unwrap();
        let train_file = dir.path().join("train.txt");
        fs::write(
            &train_file,
            "r1 True Pos great great movie\nr2 Fake Neg awful plot\n",
        )
        .unwrap();

        let args = learn_args(train_file, dir.path().join("models"), 30);
        run_learn(&args).unwrap();
        assert!(args.vanilla_model_path().exists());
        assert!(args.averaged_model_path().exists());

        let data_file = dir.path().join("dev.txt");
        fs::write(&data_file, "d1 ? ? great movie\nd2 ? ? awful\n").unwrap();

        let classify = ClassifyArgs {
            model_file: args.vanilla_model_path(),
            data_file,
            output: dir.path().join("out.txt"),
            verbosity: VerbosityArgs::default(),
        };
        let predictions = run_classify(&classify).unwrap();

        assert_eq!(predictions.len(), 2);
        let written = fs::read_to_string(&classify.output).unwrap();
        assert_eq!(written, "d1 True Pos\nd2 Fake Neg\n");
    }

    #[test]
    fn test_learn_rejects_zero_epochs() {
        let dir = TempDir::new().unwrap();
        let train_file = dir.path().join("train.txt");
        fs::write(&train_file, "r1 True Pos good\n").unwrap();

        let result = run_learn(&learn_args(train_file, dir.path().to_path_buf(), 0));
        assert!(matches!(result, Err(PerceptError::InvalidConfig(_))));
    }

    #[test]
    fn test_learn_output_dir_error_names_path() {
        let dir = TempDir::new().unwrap();
        let train_file = dir.path().join("train.txt");
        fs::write(&train_file, "r1 True Pos good\n").unwrap();
        // A regular file where the model directory should go
        let output_dir = train_file.join("models");

        let err = run_learn(&learn_args(train_file, output_dir.clone(), 30)).unwrap_err();

        assert!(matches!(err, PerceptError::Io(_)));
        assert!(err.to_string().contains(&output_dir.display().to_string()));
    }

    #[test]
    fn test_classify_missing_model() {
        let dir = TempDir::new().unwrap();
        let classify = ClassifyArgs {
            model_file: dir.path().join("missing.txt"),
            data_file: dir.path().join("dev.txt"),
            output: dir.path().join("out.txt"),
            verbosity: VerbosityArgs::default(),
        };

        assert!(matches!(
            run_classify(&classify),
            Err(PerceptError::ModelFile(_))
        ));
        assert!(!classify.output.exists());
    }
}
