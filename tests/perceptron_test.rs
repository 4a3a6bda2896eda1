//! Integration tests for training, model files and classification.

use std::fs;

use percept::error::{PerceptError, Result};
use percept::ml::corpus::{RecordParser, load_inference_data, load_training_data};
use percept::ml::features::{FeatureVector, InferenceExtractor};
use percept::ml::perceptron::{
    AveragedPerceptron, Classifier, Model, Trainer, TrainerConfig, TrainingSet, VanillaPerceptron,
};
use serde_json::Value;
use tempfile::TempDir;

const TRAINING_DATA: &str = "\
r1 True Pos Great hotel, the staff were friendly!
r2 Fake Neg Terrible stay. Would NOT recommend the hotel to anyone.
r3 True Neg The room was dirty and the 2 beds were broken
r4 Fake Pos Amazing amazing AMAZING luxury experience in Chicago!!!
";

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

fn training_set(content: &str) -> Result<TrainingSet> {
    let records = RecordParser::new().parse_training(content)?;
    TrainingSet::from_records(&records)
}

#[test]
fn test_train_save_load_classify() -> Result<()> {
    let dir = TempDir::new()?;
    let train_file = dir.path().join("train-labeled.txt");
    fs::write(&train_file, TRAINING_DATA)?;

    let records = load_training_data(&train_file)?;
    assert_eq!(records.len(), 4);
    let data = TrainingSet::from_records(&records)?;

    for trainer in [
        Box::new(VanillaPerceptron::new(TrainerConfig::default())) as Box<dyn Trainer>,
        Box::new(AveragedPerceptron::new(TrainerConfig::default())),
    ] {
        let trained = trainer.train(&data)?;
        let path = dir.path().join(format!("{}model.txt", trainer.name()));
        trained.model.save(&path)?;

        let loaded = Model::load(&path)?;
        assert_eq!(loaded.vocabulary(), trained.model.vocabulary());

        // The training records are linearly separable on both heads.
        let classifier = Classifier::new(loaded);
        let predictions = classifier.classify(&records)?;
        let lines: Vec<_> = predictions.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            lines,
            vec!["r1 True Pos", "r2 Fake Neg", "r3 True Neg", "r4 Fake Pos"]
        );
    }

    Ok(())
}

#[test]
fn test_model_file_layout() -> Result<()> {
    let data = training_set(TRAINING_DATA)?;
    let trained = VanillaPerceptron::new(TrainerConfig::default()).train(&data)?;

    let json: Value = serde_json::from_str(&trained.model.to_json()?)?;
    let object = json.as_object().unwrap();
    let keys: Vec<_> = object.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 5);
    for key in ["vocabulary", "w1", "b1", "w2", "b2"] {
        assert!(object.contains_key(key), "missing {key}");
    }

    let vocabulary: Vec<_> = object["vocabulary"]
        .as_array()
        .unwrap()
        .iter()
        .map(|word| word.as_str().unwrap())
        .collect();
    let mut sorted = vocabulary.clone();
    sorted.sort_unstable();
    assert_eq!(vocabulary, sorted);

    // Stop words, digits and punctuation never reach the vocabulary.
    for word in ["the", "would", "not", "2", "hotel,", ""] {
        assert!(!vocabulary.contains(&word), "unexpected {word:?}");
    }
    assert!(vocabulary.contains(&"hotel"));
    assert!(vocabulary.contains(&"chicago"));

    for head in ["w1", "w2"] {
        let weights = object[head].as_object().unwrap();
        let mut words: Vec<_> = weights.keys().map(String::as_str).collect();
        words.sort_unstable();
        assert_eq!(words, vocabulary);
    }

    Ok(())
}

#[test]
fn test_averaged_uses_final_counter() -> Result<()> {
    // Updates happen at counter 1 (r1) and 2 (r2) only, and
    // c_final = 1 + epochs * records = 5.
    let data = training_set("r1 True Pos great great movie\nr2 Fake Neg awful plot\n")?;
    let trained = AveragedPerceptron::new(TrainerConfig::default().with_epochs(2)).train(&data)?;

    assert_eq!(trained.summary.steps, 4);
    let head = trained.model.authenticity();
    assert_close(head.weight("great").unwrap(), 2.0 - 2.0 / 5.0);
    assert_close(head.weight("movie").unwrap(), 1.0 - 1.0 / 5.0);
    assert_close(head.weight("awful").unwrap(), -1.0 + 1.0 / 5.0 * 2.0);
    assert_close(head.weight("plot").unwrap(), -1.0 + 1.0 / 5.0 * 2.0);
    assert_close(head.bias(), 1.0 / 5.0);
    assert_eq!(trained.model.sentiment(), head);

    Ok(())
}

#[test]
fn test_single_epoch_vanilla_weights() -> Result<()> {
    let data = training_set("id1 True Pos great great movie\n")?;
    let trained = VanillaPerceptron::new(TrainerConfig::default().with_epochs(1)).train(&data)?;

    let head = trained.model.authenticity();
    assert_eq!(head.weight("great"), Some(2.0));
    assert_eq!(head.weight("movie"), Some(1.0));
    assert_eq!(head.bias(), 1.0);

    Ok(())
}

#[test]
fn test_duplicate_identifiers_use_last_record() -> Result<()> {
    let data = training_set("a True Pos good\nb Fake Neg bad\na Fake Neg awful\n")?;

    assert_eq!(data.len(), 3);
    assert_eq!(data.distinct_len(), 2);
    assert!(data.vocabulary().contains("good"));

    let identifiers: Vec<_> = data.iter().map(|e| e.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["a", "b", "a"]);
    assert!(data.iter().all(|e| !e.features.contains("good")));

    Ok(())
}

#[test]
fn test_inference_on_unseen_words() -> Result<()> {
    let dir = TempDir::new()?;
    let model_file = dir.path().join("model.txt");
    fs::write(
        &model_file,
        r#"{"vocabulary":["good"],"w1":{"good":1},"b1":0,"w2":{"good":1},"b2":0}"#,
    )?;
    let data_file = dir.path().join("dev.txt");
    fs::write(&data_file, "id2 x x good\nid3 x x unseen words\n")?;

    let classifier = Classifier::new(Model::load(&model_file)?);
    let records = load_inference_data(&data_file)?;
    let predictions = classifier.classify(&records)?;

    assert_eq!(predictions.get("id2").unwrap().to_string(), "id2 True Pos");
    assert_eq!(predictions.get("id3").unwrap().to_string(), "id3 True Pos");
    assert_eq!(classifier.model().vocabulary().len(), 1);

    Ok(())
}

#[test]
fn test_blank_line_in_data_file() -> Result<()> {
    let dir = TempDir::new()?;
    let data_file = dir.path().join("dev.txt");
    fs::write(&data_file, "id1 x x good\n\nid2 x x bad\n")?;

    let err = load_inference_data(&data_file).unwrap_err();
    assert!(matches!(err, PerceptError::InputFormat(_)));
    assert!(err.to_string().contains("line 2"));

    Ok(())
}

#[test]
fn test_fractions_and_superscripts() -> Result<()> {
    let data = training_set("r1 True Pos ½ price ² 3\n")?;

    let words: Vec<_> = data.vocabulary().iter().collect();
    assert_eq!(words, vec!["price", "½"]);

    Ok(())
}

#[test]
fn test_extraction_is_idempotent() -> Result<()> {
    let extractor = InferenceExtractor::new();
    let review = "Great great! MOVIE 1999 ... isn't the";

    let first = extractor.extract(review)?;
    let second = extractor.extract(review)?;

    assert_eq!(first, second);
    let expected: FeatureVector = ["great", "great", "movie"].into_iter().collect();
    assert_eq!(first, expected);

    Ok(())
}
