use serde::{Serialize, Deserialize};

use crate::layers::linear::Layer;
use crate::rules::rule::LearningRule;

/// Per-rule aggregates across all runs of an experiment.
///
/// The three vectors are parallel and in run order: entry `r` holds run
/// `r`'s test accuracy, misclassified test indices, and per-epoch
/// validation-accuracy history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule: LearningRule,
    pub accuracies: Vec<f64>,
    pub wrong_indices: Vec<Vec<usize>>,
    pub val_history: Vec<Vec<f64>>,
    /// Trained layers, kept only when the experiment was asked to retain
    /// them.  Not serialized; trained weights have no persistence format.
    #[serde(skip)]
    pub layers: Option<Vec<Layer>>,
}

impl RuleResult {
    pub(crate) fn new(rule: LearningRule, retain: bool) -> RuleResult {
        RuleResult {
            rule,
            accuracies: Vec::new(),
            wrong_indices: Vec::new(),
            val_history: Vec::new(),
            layers: if retain { Some(Vec::new()) } else { None },
        }
    }

    /// Test accuracy averaged over runs.
    pub fn mean_accuracy(&self) -> f64 {
        if self.accuracies.is_empty() {
            return 0.0;
        }
        self.accuracies.iter().sum::<f64>() / self.accuracies.len() as f64
    }

    /// Validation history averaged across runs, one entry per epoch.
    pub fn mean_val_history(&self) -> Vec<f64> {
        let Some(first) = self.val_history.first() else {
            return Vec::new();
        };
        let runs = self.val_history.len() as f64;
        (0..first.len())
            .map(|e| self.val_history.iter().map(|h| h[e]).sum::<f64>() / runs)
            .collect()
    }
}

/// Results of comparing the three learning rules under identical conditions.
///
/// `rules` is in canonical order: Hebbian, Hebbian-decay, Oja.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentResults {
    pub rules: Vec<RuleResult>,
}

impl ExperimentResults {
    pub fn by_rule(&self, rule: LearningRule) -> Option<&RuleResult> {
        self.rules.iter().find(|r| r.rule == rule)
    }

    /// Serializes the aggregates (not any retained layers) to a
    /// pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
