//! Impurity Metric
//!
//! Gini impurity and the label-frequency helpers the tree builder and
//! leaves are built from. All functions operate on an index-subset of the
//! label vector, so partitions never have to be materialized.
use hashbrown::HashMap;

/// Count the occurrences of each distinct label among the rows named by
/// `index`. Labels are keyed by their bit patterns, since `f64` is not
/// hashable directly.
pub fn label_counts(y: &[f64], index: &[usize]) -> HashMap<u64, usize> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &i in index {
        *counts.entry(y[i].to_bits()).or_insert(0) += 1;
    }
    counts
}

/// Gini impurity, `1 - Σ pᵢ²`, over the empirical label frequencies of the
/// rows named by `index`.
///
/// Result is in `[0, 1 - 1/k]` for `k` distinct labels, and exactly 0 when
/// all labels are equal. `index` must be non-empty; the splitter guarantees
/// it never hands an empty partition to this function.
pub fn gini_impurity(y: &[f64], index: &[usize]) -> f64 {
    debug_assert!(!index.is_empty(), "impurity of an empty partition is undefined");
    // Summing the squared counts as integers keeps the result independent
    // of map iteration order, so identical partitions always produce
    // bit-identical impurities.
    let n = index.len() as f64;
    let sum_sq: usize = label_counts(y, index).values().map(|c| c * c).sum();
    1.0 - sum_sq as f64 / (n * n)
}

/// The most frequent label among the rows named by `index`, with count ties
/// broken by the smallest label value. The full scan with an explicit
/// comparator keeps the result independent of map iteration order.
pub fn majority_label(y: &[f64], index: &[usize]) -> f64 {
    debug_assert!(!index.is_empty(), "majority label of an empty partition is undefined");
    let mut best_label = f64::INFINITY;
    let mut best_count = 0;
    for (bits, count) in label_counts(y, index) {
        let label = f64::from_bits(bits);
        if count > best_count || (count == best_count && label < best_label) {
            best_label = label;
            best_count = count;
        }
    }
    best_label
}

/// The `(label, count)` pairs of the rows named by `index`, sorted
/// ascending by label value so leaf contents are deterministic.
pub fn distribution(y: &[f64], index: &[usize]) -> Vec<(f64, usize)> {
    let mut dist: Vec<(f64, usize)> = label_counts(y, index)
        .into_iter()
        .map(|(bits, count)| (f64::from_bits(bits), count))
        .collect();
    dist.sort_by(|a, b| a.0.total_cmp(&b.0));
    dist
}
