//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentimenArgs};
use crate::error::Result;
use crate::metrics::Evaluation;
use crate::pipeline::Prediction;

/// Result structure for a training run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainReport {
    pub samples_loaded: usize,
    pub labels: Vec<String>,
    pub vocabulary_size: usize,
    pub sub_models: usize,
    pub approximate: bool,
    pub duration_ms: u64,
    pub vocab_path: String,
    pub model_path: String,
}

/// Result structure for an evaluation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub samples_evaluated: usize,
    pub undetermined: usize,
    pub evaluation: Evaluation,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionRow {
    pub text: String,
    pub prediction: Prediction,
}

/// Result structure for a prediction run.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predictions: Vec<PredictionRow>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanRender>(
    message: &str,
    result: &T,
    args: &SentimenArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            result.render_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SentimenArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Human-readable rendering for a report type.
pub trait HumanRender {
    fn render_human(&self);
}

impl HumanRender for TrainReport {
    fn render_human(&self) {
        println!("Samples:      {}", self.samples_loaded);
        println!("Labels:       {}", self.labels.join(", "));
        println!("Vocabulary:   {} terms -> {}", self.vocabulary_size, self.vocab_path);
        println!("Sub-models:   {} -> {}", self.sub_models, self.model_path);
        if self.approximate {
            println!("Note:         some sub-models stopped at the pass cap");
        }
        println!("Duration:     {} ms", self.duration_ms);
    }
}

impl HumanRender for EvaluationReport {
    fn render_human(&self) {
        println!(
            "Accuracy: {:.2}% ({} samples, {} undetermined)",
            self.evaluation.accuracy * 100.0,
            self.samples_evaluated,
            self.undetermined
        );
        println!();
        println!("Confusion matrix (rows = true, columns = predicted):");
        print!("{:>12}", "");
        for label in self.evaluation.confusion.labels() {
            print!("{label:>12}");
        }
        println!();
        for truth in self.evaluation.confusion.labels() {
            print!("{truth:>12}");
            for predicted in self.evaluation.confusion.labels() {
                print!("{:>12}", self.evaluation.confusion.get(truth, predicted));
            }
            println!();
        }
        println!();
        for (label, metrics) in &self.evaluation.per_class {
            println!(
                "{label:>12} | precision {:6.2}% | recall {:6.2}% | F1 {:6.2}%",
                metrics.precision * 100.0,
                metrics.recall * 100.0,
                metrics.f1 * 100.0
            );
        }
    }
}

impl HumanRender for PredictionReport {
    fn render_human(&self) {
        for row in &self.predictions {
            let label = match &row.prediction {
                Prediction::Label(label) => label.as_str(),
                Prediction::Undetermined => "(undetermined)",
            };
            println!("{label:>15}  {}", row.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_report_serializes() {
        let report = TrainReport {
            samples_loaded: 9,
            labels: vec!["negative".to_string(), "positive".to_string()],
            vocabulary_size: 42,
            sub_models: 1,
            approximate: false,
            duration_ms: 7,
            vocab_path: "vocab.json".to_string(),
            model_path: "model.bin".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"vocabulary_size\":42"));
    }

    #[test]
    fn test_prediction_row_serializes_undetermined() {
        let row = PredictionRow {
            text: "???".to_string(),
            prediction: Prediction::Undetermined,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("undetermined"));
    }
}
