//! Undersampling class balancer.
//!
//! Majority classes are cut down to the size of the smallest class so that
//! label imbalance does not bias training. This step is randomized per run
//! on purpose; only the cardinality invariants are guaranteed.

use ahash::AHashMap;
use rand::prelude::*;

use crate::dataset::RawSample;

/// Balance a labeled sample set by uniform random undersampling.
///
/// Groups samples by label, shuffles each group, truncates every group to
/// the smallest group's size, then shuffles the concatenated result once
/// more so training never sees label-contiguous runs.
///
/// Guarantees, for a non-empty input with label set `L` and per-label
/// minimum count `m`:
///
/// - output length == `m * |L|`
/// - every label occurs exactly `m` times in the output
///
/// The exact sample identities are not reproducible across runs.
pub fn balance(samples: Vec<RawSample>) -> Vec<RawSample> {
    let mut grouped: AHashMap<String, Vec<RawSample>> = AHashMap::new();
    for sample in samples {
        grouped.entry(sample.label.clone()).or_default().push(sample);
    }

    let Some(min_count) = grouped.values().map(Vec::len).min() else {
        return Vec::new();
    };

    let mut rng = rand::rng();
    let mut balanced = Vec::with_capacity(min_count * grouped.len());
    for (label, mut group) in grouped {
        log::debug!("label {label}: {} samples, keeping {min_count}", group.len());
        group.shuffle(&mut rng);
        group.truncate(min_count);
        balanced.extend(group);
    }

    balanced.shuffle(&mut rng);
    balanced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> Vec<RawSample> {
        let mut samples = Vec::new();
        for i in 0..10 {
            samples.push(RawSample::new(format!("positive text {i}"), "positive"));
        }
        for i in 0..7 {
            samples.push(RawSample::new(format!("negative text {i}"), "negative"));
        }
        for i in 0..3 {
            samples.push(RawSample::new(format!("neutral text {i}"), "neutral"));
        }
        samples
    }

    fn label_count(samples: &[RawSample], label: &str) -> usize {
        samples.iter().filter(|s| s.label == label).count()
    }

    #[test]
    fn test_balance_cardinality() {
        let balanced = balance(sample_set());

        assert_eq!(balanced.len(), 3 * 3);
        assert_eq!(label_count(&balanced, "positive"), 3);
        assert_eq!(label_count(&balanced, "negative"), 3);
        assert_eq!(label_count(&balanced, "neutral"), 3);
    }

    #[test]
    fn test_balance_single_sample_per_label() {
        let samples = vec![
            RawSample::new("i love this", "positive"),
            RawSample::new("i hate this", "negative"),
            RawSample::new("it is ok", "neutral"),
        ];
        let balanced = balance(samples);

        assert_eq!(balanced.len(), 3);
        assert_eq!(label_count(&balanced, "positive"), 1);
        assert_eq!(label_count(&balanced, "negative"), 1);
        assert_eq!(label_count(&balanced, "neutral"), 1);
    }

    #[test]
    fn test_balance_empty_input() {
        assert!(balance(Vec::new()).is_empty());
    }

    #[test]
    fn test_balance_keeps_samples_from_input() {
        let input = sample_set();
        let balanced = balance(input.clone());
        for sample in &balanced {
            assert!(input.contains(sample));
        }
    }
}
