use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a fitted decision tree.
///
/// An `Internal` node always owns exactly two children; recursive teardown
/// of the whole subtree is the automatic drop of the boxes. A `Leaf` keeps
/// the full label distribution of the training rows that reached it, with
/// the mode precomputed into `label` at build time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Node {
    Leaf {
        /// The predicted label: the mode of `distribution`, count ties
        /// broken by the smallest label value.
        label: f64,
        /// Label counts of the training rows in this leaf, sorted
        /// ascending by label.
        distribution: Vec<(f64, usize)>,
    },
    Internal {
        /// 0-based index of the feature column the node tests.
        feature: usize,
        /// Rows with `value <= threshold` are routed left, the rest right.
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of edges on the longest path to a leaf; 0 for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, indent: usize) -> fmt::Result {
        match self {
            Node::Leaf { label, distribution } => {
                let count: usize = distribution.iter().map(|(_, c)| c).sum();
                writeln!(f, "{:indent$}leaf={},count={}", "", label, count)
            }
            Node::Internal {
                feature,
                threshold,
                left,
                right,
            } => {
                writeln!(f, "{:indent$}[f{} <= {}]", "", feature, threshold)?;
                left.fmt_indented(f, indent + 2)?;
                right.fmt_indented(f, indent + 2)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
