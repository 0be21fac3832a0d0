use crate::data::Matrix;
use crate::errors::CartreeError;
use crate::tree::Tree;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

/// Decision tree classifier object.
///
/// Holds the fitted tree (if any), execution configuration, and free-form
/// model metadata.
#[derive(Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    /// Number of threads to use during training and prediction. All
    /// available cores when `None`.
    pub num_threads: Option<usize>,
    /// The fitted tree; `None` until `fit` succeeds.
    pub tree: Option<Tree>,
    /// Free-form key-value metadata carried with the model.
    pub metadata: HashMap<String, String>,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        DecisionTreeClassifier {
            num_threads: None,
            tree: None,
            metadata: HashMap::new(),
        }
    }
}

impl DecisionTreeClassifier {
    /// Set the number of threads on the classifier.
    /// * `num_threads` - Number of threads to be used during training and
    ///   prediction.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Fit the decision tree on a provided dataset.
    ///
    /// Replaces any previously fitted tree. A failed fit reports an error
    /// immediately and leaves the previous model state untouched.
    ///
    /// * `data` - The feature matrix, one row per sample.
    /// * `y` - The labels, one per row of `data`.
    /// * `max_depth` - Depth budget for the recursion; 0 produces a single
    ///   majority-label leaf.
    pub fn fit(&mut self, data: &Matrix<f64>, y: &[f64], max_depth: usize) -> Result<(), CartreeError> {
        validate_fit_data(data, y)?;

        let start = Instant::now();
        let n_threads_available = std::thread::available_parallelism().unwrap().get();
        let num_threads = self.num_threads.unwrap_or(n_threads_available);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .unwrap();

        let tree = pool.install(|| Tree::fit(data, y, max_depth));
        info!(
            "Trained a decision tree with {0} leaves at depth {1} in {2:.3} seconds.",
            tree.n_leaves,
            tree.depth,
            start.elapsed().as_secs_f64()
        );
        self.tree = Some(tree);

        Ok(())
    }

    /// Get a reference to the fitted tree.
    pub fn get_prediction_tree(&self) -> Result<&Tree, CartreeError> {
        self.tree.as_ref().ok_or(CartreeError::UntrainedModel)
    }

    /// Insert metadata
    /// * `key` - String value for the metadata key.
    /// * `value` - value to assign to the metadata key.
    pub fn insert_metadata(&mut self, key: String, value: String) {
        self.metadata.insert(key, value);
    }

    /// Get Metadata
    /// * `key` - Get the associated value for the metadata key.
    pub fn get_metadata(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }
}

fn validate_fit_data(data: &Matrix<f64>, y: &[f64]) -> Result<(), CartreeError> {
    if data.rows == 0 || data.cols == 0 {
        return Err(CartreeError::InvalidInput(
            "the training matrix is empty".to_string(),
        ));
    }
    if y.len() != data.rows {
        return Err(CartreeError::InvalidInput(format!(
            "{} labels provided for {} rows",
            y.len(),
            data.rows
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_model() -> (DecisionTreeClassifier, Matrix<f64>, Vec<f64>) {
        let data = Matrix::from_rows(&[
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 1.0],
            vec![4.0, 1.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 1.0, 1.0];
        (DecisionTreeClassifier::default(), data, y)
    }

    #[test]
    fn test_fit_and_predict() {
        let (mut model, data, y) = two_class_model();
        model.fit(&data, &y, 2).unwrap();
        let test = Matrix::from_rows(&[vec![1.0, 0.0], vec![4.0, 1.0]]).unwrap();
        let preds = model.predict(&test, false).unwrap();
        assert_eq!(preds, vec![0.0, 1.0]);
    }

    #[test]
    fn test_fit_empty_matrix() {
        let (mut model, _, _) = two_class_model();
        let data = Matrix::new(Vec::new(), 0, 0);
        let res = model.fit(&data, &[], 2);
        assert!(matches!(res, Err(CartreeError::InvalidInput(_))));
        assert!(model.tree.is_none());
    }

    #[test]
    fn test_fit_ragged_rows_rejected() {
        // Ragged host input never reaches fit; the matrix constructor
        // rejects it.
        let res = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(res, Err(CartreeError::InvalidInput(_))));
    }

    #[test]
    fn test_fit_label_count_mismatch() {
        let (mut model, data, _) = two_class_model();
        let res = model.fit(&data, &[0.0, 1.0], 2);
        assert!(matches!(res, Err(CartreeError::InvalidInput(_))));
    }

    #[test]
    fn test_failed_fit_keeps_previous_tree() {
        let (mut model, data, y) = two_class_model();
        model.fit(&data, &y, 2).unwrap();
        let before = model.tree.clone();
        assert!(model.fit(&data, &[0.0], 2).is_err());
        assert_eq!(model.tree, before);
    }

    #[test]
    fn test_fit_with_bounded_threads() {
        let (_, data, y) = two_class_model();
        let mut single = DecisionTreeClassifier::default().set_num_threads(Some(1));
        let mut many = DecisionTreeClassifier::default().set_num_threads(Some(4));
        single.fit(&data, &y, 3).unwrap();
        many.fit(&data, &y, 3).unwrap();
        assert_eq!(single.tree, many.tree);
    }

    #[test]
    fn test_metadata_round_trip() {
        let (mut model, _, _) = two_class_model();
        model.insert_metadata("trained_on".to_string(), "synthetic".to_string());
        assert_eq!(model.get_metadata("trained_on"), Some("synthetic".to_string()));
        assert_eq!(model.get_metadata("missing"), None);
    }
}
