use crate::data::Matrix;
use crate::metric::{distribution, majority_label};
use crate::node::Node;
use crate::splitter::{best_split, SplitInfo};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A fitted decision tree.
///
/// Owns its root node exclusively; the whole structure is dropped as one
/// unit. Immutable after `fit`, so it can be shared read-only across
/// concurrent predictions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Tree {
    pub root: Node,
    /// Width of the training data; predictions must match it.
    pub n_features: usize,
    /// Realized depth of the tree, bounded by the fit depth budget.
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    /// Grow a tree on the labeled rows of `data`.
    ///
    /// `y` must hold one label per matrix row. The recursion stops at pure
    /// partitions, at `max_depth`, and on partitions no candidate threshold
    /// can divide; all three emit leaves, so every path through the fitted
    /// tree ends in a prediction.
    pub fn fit(data: &Matrix<f64>, y: &[f64], max_depth: usize) -> Self {
        let root = build_node(data, y, data.index.clone(), max_depth);
        let depth = root.depth();
        let n_leaves = root.n_leaves();
        Tree {
            root,
            n_features: data.cols,
            depth,
            n_leaves,
        }
    }

    /// Route one row from the root to a leaf and return its label.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label, .. } => return *label,
                Node::Internal {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    fn predict_row_idx(&self, data: &Matrix<f64>, row: usize) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label, .. } => return *label,
                Node::Internal {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if *data.get(row, *feature) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn predict_single_threaded(&self, data: &Matrix<f64>) -> Vec<f64> {
        data.index.iter().map(|i| self.predict_row_idx(data, *i)).collect()
    }

    fn predict_parallel(&self, data: &Matrix<f64>) -> Vec<f64> {
        data.index
            .par_iter()
            .map(|i| self.predict_row_idx(data, *i))
            .collect()
    }

    /// Predict a label for every row, in input order. Parallel and serial
    /// traversal produce identical output; the tree is read-only here.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Vec<f64> {
        if parallel {
            self.predict_parallel(data)
        } else {
            self.predict_single_threaded(data)
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

fn leaf(y: &[f64], index: &[usize], label: f64) -> Node {
    Node::Leaf {
        label,
        distribution: distribution(y, index),
    }
}

fn build_node(data: &Matrix<f64>, y: &[f64], index: Vec<usize>, depth: usize) -> Node {
    // The splitter never produces an empty partition, so recursion cannot
    // reach one.
    debug_assert!(!index.is_empty(), "recursed into an empty partition");

    let first = y[index[0]];
    if index.iter().all(|&i| y[i] == first) {
        return leaf(y, &index, first);
    }

    if depth == 0 {
        let label = majority_label(y, &index);
        return leaf(y, &index, label);
    }

    match best_split(data, y, &index) {
        None => {
            let label = majority_label(y, &index);
            leaf(y, &index, label)
        }
        Some(SplitInfo {
            feature,
            threshold,
            left,
            right,
            ..
        }) => {
            // Disjoint partitions; results are identical to sequential
            // execution regardless of scheduling.
            let (left, right) = rayon::join(
                || build_node(data, y, left, depth - 1),
                || build_node(data, y, right, depth - 1),
            );
            Node::Internal {
                feature,
                threshold,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
    }
}
