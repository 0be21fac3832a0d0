//! Synthetic Two-Class Training
//! ============================
//! Generates a seeded uniform-random dataset with binary labels, fits a
//! depth-bounded decision tree, and reports training accuracy on the
//! first 100 samples.
//!
//! ```bash
//! cargo run --release --example synthetic
//! ```

use cartree::{DecisionTreeClassifier, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;

/// Accuracy = correct / total
fn accuracy(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let correct = y_true.iter().zip(y_pred).filter(|&(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}

fn main() -> Result<(), Box<dyn Error>> {
    let n_samples = 500;
    let n_features = 8;
    let max_depth = 5;

    // ------------------------------------------------------------------
    // 1. Generate a synthetic dataset (features in [0, 10), labels 0/1)
    // ------------------------------------------------------------------
    let mut rng = StdRng::seed_from_u64(42);
    let rows: Vec<Vec<f64>> = (0..n_samples)
        .map(|_| (0..n_features).map(|_| rng.gen_range(0.0..10.0)).collect())
        .collect();
    let y: Vec<f64> = (0..n_samples).map(|_| rng.gen_range(0..2) as f64).collect();

    let data = Matrix::from_rows(&rows)?;
    println!("Generated {n_samples} samples with {n_features} features.");

    // ------------------------------------------------------------------
    // 2. Fit the decision tree
    // ------------------------------------------------------------------
    let mut model = DecisionTreeClassifier::default();
    model.fit(&data, &y, max_depth)?;

    let tree = model.get_prediction_tree()?;
    println!("Trained a tree with {} leaves at depth {}.", tree.n_leaves, tree.depth);

    // ------------------------------------------------------------------
    // 3. Predict the first 100 samples and report accuracy
    // ------------------------------------------------------------------
    let test = Matrix::from_rows(&rows[..100])?;
    let preds = model.predict(&test, true)?;

    println!("Train accuracy (first 100): {:.2}%", accuracy(&y[..100], &preds) * 100.0);
    println!("First 10 predictions: {:?}", &preds[..10]);

    Ok(())
}
