//! End-to-end pipeline scenarios: corpus in, artifacts out, predictions
//! stable across persistence.

use std::sync::Arc;

use sentimen::analysis::Normalizer;
use sentimen::dataset::{self, RawSample};
use sentimen::error::SentimenError;
use sentimen::feature::{vectorize, VocabularyBuilder, VocabularyMap};
use sentimen::metrics::evaluate;
use sentimen::pipeline::{self, Prediction, SentimentPipeline, TrainingOptions};
use sentimen::svm::{ClassifierModel, SvmClassifier, TrainConfig};

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn labeled_corpus() -> Vec<RawSample> {
    let positive = [
        "i love this product, great quality",
        "great product, love the build quality",
        "this is great, love it so much",
        "love love love, great purchase",
        "great seller, love the packaging",
    ];
    let negative = [
        "i hate this product, awful quality",
        "awful product, hate the build quality",
        "this is awful, hate it so much",
        "hate hate hate, awful purchase",
        "awful seller, hate the packaging",
    ];
    let neutral = [
        "the product arrived in a box",
        "the package arrived on monday",
        "the box arrived with the product",
        "arrived monday in standard packaging",
        "standard box, product arrived",
    ];

    let mut samples = Vec::new();
    for text in positive {
        samples.push(RawSample::new(text, "positive"));
    }
    for text in negative {
        samples.push(RawSample::new(text, "negative"));
    }
    for text in neutral {
        samples.push(RawSample::new(text, "neutral"));
    }
    samples
}

#[test]
fn balancing_one_sample_per_label() {
    let samples = vec![
        RawSample::new("i love this", "positive"),
        RawSample::new("i hate this", "negative"),
        RawSample::new("it is ok", "neutral"),
    ];
    let balanced = dataset::balance(samples);

    assert_eq!(balanced.len(), 3);
    for label in ["positive", "negative", "neutral"] {
        assert_eq!(balanced.iter().filter(|s| s.label == label).count(), 1);
    }
}

#[test]
fn vocabulary_and_vectorization_scenarios() {
    // maxSize=2 over ["great","great","bad"] -> {"great":0,"bad":1}
    let corpus = vec![strings(&["great", "great", "bad"])];
    let vocab = VocabularyBuilder::new(2).build(&corpus);
    assert_eq!(vocab.get("great"), Some(0));
    assert_eq!(vocab.get("bad"), Some(1));

    // ["great","awful"] against that map -> [1, 0]
    assert_eq!(vectorize(&strings(&["great", "awful"]), &vocab), vec![1, 0]);
}

#[test]
fn untrained_model_refuses_to_predict() {
    let classifier = SvmClassifier::new();
    let err = classifier.predict(&[vec![1, 0, 0]]).unwrap_err();
    assert!(matches!(err, SentimenError::ModelNotTrained(_)));
}

#[test]
fn full_pipeline_train_predict_evaluate() {
    let artifacts = pipeline::train(
        labeled_corpus(),
        &Normalizer::new(),
        &TrainingOptions::default(),
    )
    .unwrap();

    assert_eq!(
        artifacts.model.labels(),
        &["negative", "neutral", "positive"]
    );
    assert_eq!(artifacts.model.machines().len(), 3);
    assert_eq!(artifacts.vocabulary.len(), artifacts.model.n_features());

    let pipeline = SentimentPipeline::new(
        Normalizer::new(),
        Arc::new(artifacts.vocabulary),
        Arc::new(artifacts.model),
    )
    .unwrap();

    assert_eq!(
        pipeline.predict_one("what a great product, i love it").unwrap(),
        Prediction::Label("positive".to_string())
    );
    assert_eq!(
        pipeline.predict_one("awful thing, i hate it").unwrap(),
        Prediction::Label("negative".to_string())
    );
    assert_eq!(
        pipeline.predict_one("#@! 42").unwrap(),
        Prediction::Undetermined
    );

    // The evaluator agrees with batch predictions on the training texts.
    let texts: Vec<String> = labeled_corpus().iter().map(|s| s.text.clone()).collect();
    let truth: Vec<String> = labeled_corpus().iter().map(|s| s.label.clone()).collect();
    let predicted: Vec<String> = pipeline
        .predict_batch(&texts)
        .unwrap()
        .into_iter()
        .map(|p| match p {
            Prediction::Label(label) => label,
            Prediction::Undetermined => "undetermined".to_string(),
        })
        .collect();

    let report = evaluate(&truth, &predicted).unwrap();
    assert!(report.accuracy > 0.9, "accuracy was {}", report.accuracy);
}

#[test]
fn artifacts_round_trip_through_files() {
    let artifacts = pipeline::train(
        labeled_corpus(),
        &Normalizer::new(),
        &TrainingOptions::default(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let vocab_path = dir.path().join("vocab.json");
    let model_path = dir.path().join("model.bin");

    std::fs::write(&vocab_path, artifacts.vocabulary.to_json().unwrap()).unwrap();
    std::fs::write(&model_path, artifacts.model.to_bytes().unwrap()).unwrap();

    let vocabulary =
        VocabularyMap::from_json(&std::fs::read_to_string(&vocab_path).unwrap()).unwrap();
    let model = ClassifierModel::from_bytes(&std::fs::read(&model_path).unwrap()).unwrap();

    let original = SentimentPipeline::new(
        Normalizer::new(),
        Arc::new(artifacts.vocabulary),
        Arc::new(artifacts.model),
    )
    .unwrap();
    let restored =
        SentimentPipeline::new(Normalizer::new(), Arc::new(vocabulary), Arc::new(model)).unwrap();

    let probes = [
        "great quality, love it",
        "awful, i hate this",
        "the box arrived",
        "gk bagus banget",
        "",
    ];
    for probe in probes {
        assert_eq!(
            original.predict_one(probe).unwrap(),
            restored.predict_one(probe).unwrap(),
            "round trip diverged on {probe:?}"
        );
    }
}

#[test]
fn corrupt_artifacts_are_rejected() {
    let err = VocabularyMap::from_json(r#"{"a":0,"b":3}"#).unwrap_err();
    assert!(matches!(err, SentimenError::CorruptArtifact(_)));

    let err = ClassifierModel::from_bytes(b"not a model").unwrap_err();
    assert!(matches!(err, SentimenError::CorruptArtifact(_)));
}

#[test]
fn csv_corpus_to_trained_model() {
    let csv = "Comment,Sentiment\n\
               \"i love this product, great quality\",positive\n\
               broken row\n\
               \"awful product, i hate it\",negative\n\
               \"great stuff, love the quality\",positive\n\
               \"i hate this awful thing\",negative\n";
    let samples = dataset::read_corpus(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 4);

    let artifacts = pipeline::train(
        samples,
        &Normalizer::new(),
        &TrainingOptions {
            svm: TrainConfig::default().with_max_passes(5000),
            ..TrainingOptions::default()
        },
    )
    .unwrap();
    assert_eq!(artifacts.model.labels(), &["negative", "positive"]);
}
