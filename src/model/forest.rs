//! Bagged decision-tree ensemble
//!
//! The corpus of historical labels is eight rows, so the "forest" is
//! deliberately small machinery: axis-aligned Gini splits, bootstrap row
//! sampling, and a random feature subset per split, all driven by a seeded
//! RNG so fitting is reproducible. Inference averages per-tree leaf class
//! distributions and reports the argmax class with its mean probability.

use super::{
    training_set, Features, Prediction, Suggestion, SuggestionModel, TrainingRow, NUM_CLASSES,
    NUM_FEATURES,
};
use crate::config::ModelConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Features considered per split: floor(sqrt(NUM_FEATURES))
const FEATURES_PER_SPLIT: usize = 2;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        probs: [f64; NUM_CLASSES],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone)]
struct Tree {
    root: Node,
}

/// The fitted suggestion classifier.
///
/// Immutable after `fit`; construct it once and pass a reference into
/// whatever needs inference. It carries no interior mutability, so sharing
/// across threads needs no synchronization.
pub struct SuggestionForest {
    trees: Vec<Tree>,
}

impl SuggestionForest {
    /// Fit the ensemble over the fixed training table.
    pub fn fit(config: &ModelConfig) -> Self {
        Self::fit_rows(&training_set(), config)
    }

    fn fit_rows(rows: &[TrainingRow], config: &ModelConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let trees = (0..config.trees)
            .map(|_| Tree::fit(rows, config.min_samples_split, &mut rng))
            .collect();
        Self { trees }
    }

    /// Number of trees in the ensemble
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Mean class distribution across trees
    fn class_probs(&self, features: &Features) -> [f64; NUM_CLASSES] {
        let x = features.as_array();
        let mut sums = [0.0; NUM_CLASSES];
        for tree in &self.trees {
            let probs = tree.predict(&x);
            for (sum, p) in sums.iter_mut().zip(probs.iter()) {
                *sum += p;
            }
        }
        let n = self.trees.len().max(1) as f64;
        sums.map(|s| s / n)
    }
}

impl SuggestionModel for SuggestionForest {
    fn predict(&self, features: &Features) -> Prediction {
        let probs = self.class_probs(features);

        // First maximum wins ties, keeping the argmax deterministic
        let (code, confidence) = probs
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, p)| {
                if p > best.1 {
                    (i, p)
                } else {
                    best
                }
            });

        let suggestion = Suggestion::from_code(code).unwrap_or(Suggestion::DontPut);
        Prediction {
            suggestion,
            confidence,
        }
    }
}

impl Tree {
    /// Fit one tree on a bootstrap sample of the rows
    fn fit(rows: &[TrainingRow], min_samples_split: usize, rng: &mut StdRng) -> Self {
        let sample: Vec<TrainingRow> = (0..rows.len())
            .map(|_| rows[rng.gen_range(0..rows.len())])
            .collect();
        let root = grow(&sample, min_samples_split, rng);
        Self { root }
    }

    fn predict(&self, x: &[f64; NUM_FEATURES]) -> [f64; NUM_CLASSES] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { probs } => return *probs,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn class_counts(rows: &[TrainingRow]) -> [usize; NUM_CLASSES] {
    let mut counts = [0; NUM_CLASSES];
    for row in rows {
        counts[row.label.code()] += 1;
    }
    counts
}

fn leaf(counts: &[usize; NUM_CLASSES], total: usize) -> Node {
    let n = total.max(1) as f64;
    Node::Leaf {
        probs: counts.map(|c| c as f64 / n),
    }
}

fn gini(counts: &[usize; NUM_CLASSES], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum::<f64>()
}

fn grow(rows: &[TrainingRow], min_samples_split: usize, rng: &mut StdRng) -> Node {
    let counts = class_counts(rows);
    let is_pure = counts.iter().filter(|&&c| c > 0).count() <= 1;
    if is_pure || rows.len() < min_samples_split {
        return leaf(&counts, rows.len());
    }

    // Random feature subset first; fall back to every feature if the subset
    // happens to carry no separating value.
    let subset = rand::seq::index::sample(rng, NUM_FEATURES, FEATURES_PER_SPLIT).into_vec();
    let all: Vec<usize> = (0..NUM_FEATURES).collect();

    let split = best_split(rows, &subset).or_else(|| best_split(rows, &all));
    let Some((feature, threshold)) = split else {
        // Identical feature vectors with mixed labels; nothing separates them
        return leaf(&counts, rows.len());
    };

    let (left_rows, right_rows): (Vec<TrainingRow>, Vec<TrainingRow>) = rows
        .iter()
        .copied()
        .partition(|row| row.features.as_array()[feature] <= threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(grow(&left_rows, min_samples_split, rng)),
        right: Box::new(grow(&right_rows, min_samples_split, rng)),
    }
}

/// Best (feature, threshold) over the candidate features by weighted Gini.
///
/// Thresholds are midpoints between consecutive distinct values, so both
/// sides of any returned split are non-empty.
fn best_split(rows: &[TrainingRow], features: &[usize]) -> Option<(usize, f64)> {
    let total = rows.len();
    let mut best: Option<(usize, f64, f64)> = None;

    for &feature in features {
        let mut values: Vec<f64> = rows.iter().map(|r| r.features.as_array()[feature]).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        values.dedup();

        for pair in values.windows(2) {
            let threshold = (pair[0] + pair[1]) / 2.0;

            let mut left = [0usize; NUM_CLASSES];
            let mut right = [0usize; NUM_CLASSES];
            for row in rows {
                if row.features.as_array()[feature] <= threshold {
                    left[row.label.code()] += 1;
                } else {
                    right[row.label.code()] += 1;
                }
            }
            let left_total: usize = left.iter().sum();
            let right_total = total - left_total;

            let weighted = (left_total as f64 * gini(&left, left_total)
                + right_total as f64 * gini(&right, right_total))
                / total as f64;

            if best.map_or(true, |(_, _, score)| weighted < score) {
                best = Some((feature, threshold, weighted));
            }
        }
    }

    best.map(|(feature, threshold, _)| (feature, threshold))
}
