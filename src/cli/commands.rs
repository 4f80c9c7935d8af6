//! Command implementations for the sentimen CLI.

use std::fs;
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use std::time::Instant;

use rand::prelude::*;

use crate::analysis::Normalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{self, RawSample};
use crate::error::Result;
use crate::feature::{vectorize_batch, VocabularyMap};
use crate::metrics::evaluate;
use crate::pipeline::{self, SentimentPipeline, TrainingOptions};
use crate::svm::{ClassifierModel, TrainConfig};

/// Execute a CLI command.
pub fn execute_command(args: SentimenArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate_model(evaluate_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
    }
}

/// Train a classifier and persist both artifacts.
fn train(args: TrainArgs, cli_args: &SentimenArgs) -> Result<()> {
    if cli_args.verbosity() > 0 {
        println!("Training from: {}", args.corpus.display());
    }

    let started = Instant::now();
    let samples = dataset::load_corpus(&args.corpus)?;
    let samples_loaded = samples.len();

    let options = TrainingOptions {
        max_vocab: args.max_vocab,
        svm: TrainConfig::default()
            .with_c(args.c)
            .with_tolerance(args.tolerance)
            .with_max_passes(args.max_passes),
        raw_corpus: args.raw,
    };

    let artifacts = pipeline::train(samples, &Normalizer::new(), &options)?;

    fs::write(&args.vocab_out, artifacts.vocabulary.to_json()?)?;
    fs::write(&args.model_out, artifacts.model.to_bytes()?)?;

    let report = TrainReport {
        samples_loaded,
        labels: artifacts.model.labels().to_vec(),
        vocabulary_size: artifacts.vocabulary.len(),
        sub_models: artifacts.model.machines().len(),
        approximate: artifacts.model.is_approximate(),
        duration_ms: started.elapsed().as_millis() as u64,
        vocab_path: args.vocab_out.display().to_string(),
        model_path: args.model_out.display().to_string(),
    };

    output_result("Training complete", &report, cli_args)
}

/// Evaluate persisted artifacts against a labeled corpus sample.
fn evaluate_model(args: EvaluateArgs, cli_args: &SentimenArgs) -> Result<()> {
    let vocabulary = VocabularyMap::from_json(&fs::read_to_string(&args.vocab)?)?;
    let model = ClassifierModel::from_bytes(&fs::read(&args.model)?)?;
    if cli_args.verbosity() > 0 {
        println!(
            "Loaded vocabulary ({} terms) and model ({} labels)",
            vocabulary.len(),
            model.labels().len()
        );
    }

    let mut samples = dataset::load_corpus(&args.corpus)?;
    samples.shuffle(&mut rand::rng());
    samples.truncate(args.sample);

    let normalizer = Normalizer::new();
    let mut corpus: Vec<Vec<String>> = Vec::new();
    let mut truth: Vec<String> = Vec::new();
    let mut undetermined = 0usize;
    for RawSample { text, label } in samples {
        let tokens = pipeline::tokenize(&text, &normalizer, args.raw);
        if tokens.is_empty() {
            undetermined += 1;
            continue;
        }
        corpus.push(tokens);
        truth.push(label);
    }

    let vectors = vectorize_batch(&corpus, &vocabulary);
    let predicted = model.predict(&vectors)?;
    let evaluation = evaluate(&truth, &predicted)?;

    let report = EvaluationReport {
        samples_evaluated: truth.len(),
        undetermined,
        evaluation,
    };
    output_result("Evaluation complete", &report, cli_args)
}

/// Classify ad-hoc texts or a file of texts.
fn predict(args: PredictArgs, cli_args: &SentimenArgs) -> Result<()> {
    let vocabulary = VocabularyMap::from_json(&fs::read_to_string(&args.vocab)?)?;
    let model = ClassifierModel::from_bytes(&fs::read(&args.model)?)?;
    let pipeline =
        SentimentPipeline::new(Normalizer::new(), Arc::new(vocabulary), Arc::new(model))?;

    let mut texts = args.texts;
    if let Some(path) = &args.file {
        let reader = BufReader::new(fs::File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                texts.push(line);
            }
        }
    }

    let predictions = pipeline.predict_batch(&texts)?;
    let report = PredictionReport {
        predictions: texts
            .into_iter()
            .zip(predictions)
            .map(|(text, prediction)| PredictionRow { text, prediction })
            .collect(),
    };
    output_result("Predictions", &report, cli_args)
}
