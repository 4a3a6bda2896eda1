//! Criterion benchmarks for percept.
//!
//! Covers the three hot paths of a training and classification run:
//! - Feature extraction through the review analyzer
//! - Vanilla and averaged perceptron training
//! - Classification of unlabeled records

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use percept::ml::corpus::{Authenticity, Labels, Record, Sentiment};
use percept::ml::features::{InferenceExtractor, TrainingExtractor};
use percept::ml::perceptron::{
    AveragedPerceptron, Classifier, Trainer, TrainerConfig, TrainingSet, VanillaPerceptron,
};

/// Generate labeled review records for benchmarking.
fn generate_test_records(count: usize) -> Vec<Record> {
    let words = [
        "Great", "hotel", "room", "was", "clean,", "staff", "friendly!", "the", "location",
        "terrible", "noisy", "2", "nights", "would", "NOT", "recommend.", "breakfast", "stay",
        "Chicago", "downtown", "view", "(lovely)", "bed", "dirty", "manager", "rude", "price",
        "value", "quiet", "pool",
    ];

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let review_length = 20 + (i % 60); // Variable length reviews
        let mut tokens = Vec::with_capacity(review_length);

        for j in 0..review_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            tokens.push(words[word_idx].to_string());
        }

        let labels = Labels {
            authenticity: if i % 2 == 0 { Authenticity::True } else { Authenticity::Fake },
            sentiment: if i % 3 == 0 { Sentiment::Neg } else { Sentiment::Pos },
        };
        records.push(Record::labeled(format!("r{i}"), labels, tokens.join(" ")));
    }

    records
}

/// Benchmark feature extraction.
fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");

    let records = generate_test_records(1000);
    let extractor = InferenceExtractor::new();

    group.bench_function("extract_single_record", |b| {
        b.iter(|| {
            let result = extractor.extract(black_box(records[0].review.as_str()));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("extract_batch_with_vocabulary", |b| {
        b.iter_with_setup(TrainingExtractor::new, |mut extractor| {
            for record in records.iter().take(100) {
                let result = extractor.extract(black_box(record.review.as_str()));
                let _ = black_box(result);
            }
            black_box(extractor.into_vocabulary())
        })
    });

    group.finish();
}

/// Benchmark both training algorithms.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20); // Full training runs are slow

    let records = generate_test_records(500);
    let data = TrainingSet::from_records(&records).unwrap();
    let config = TrainerConfig::default();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("vanilla_30_epochs", |b| {
        let trainer = VanillaPerceptron::new(config);
        b.iter(|| black_box(trainer.train(black_box(&data)).unwrap()))
    });

    group.bench_function("averaged_30_epochs", |b| {
        let trainer = AveragedPerceptron::new(config);
        b.iter(|| black_box(trainer.train(black_box(&data)).unwrap()))
    });

    group.finish();
}

/// Benchmark classification with a trained model.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let records = generate_test_records(1000);
    let data = TrainingSet::from_records(&records[..500]).unwrap();
    let trained = AveragedPerceptron::new(TrainerConfig::default())
        .train(&data)
        .unwrap();
    let classifier = Classifier::new(trained.model);

    group.throughput(Throughput::Elements(500));
    group.bench_function("classify_batch", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&records[500..])).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_feature_extraction,
    bench_training,
    bench_classification
);
criterion_main!(benches);
