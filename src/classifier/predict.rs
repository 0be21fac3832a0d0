//! Prediction Methods
//!
//! Validated prediction entry points for the classifier.
use crate::classifier::DecisionTreeClassifier;
use crate::data::Matrix;
use crate::errors::CartreeError;

impl DecisionTreeClassifier {
    /// Generate predictions for the given data, one label per row, in
    /// input order.
    ///
    /// The tree is read-only here, so repeated calls with identical inputs
    /// return identical output.
    ///
    /// * `data` - The feature matrix; must have the training width.
    /// * `parallel` - If `true`, rows are predicted in parallel using Rayon.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<f64>, CartreeError> {
        let tree = self.get_prediction_tree()?;
        if data.cols != tree.n_features {
            return Err(CartreeError::DimensionMismatch {
                expected: tree.n_features,
                actual: data.cols,
            });
        }
        Ok(tree.predict(data, parallel))
    }

    /// Predict the label of a single row.
    ///
    /// * `row` - One sample; must have the training width.
    pub fn predict_one(&self, row: &[f64]) -> Result<f64, CartreeError> {
        let tree = self.get_prediction_tree()?;
        if row.len() != tree.n_features {
            return Err(CartreeError::DimensionMismatch {
                expected: tree.n_features,
                actual: row.len(),
            });
        }
        Ok(tree.predict_row(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_model() -> DecisionTreeClassifier {
        let data = Matrix::from_rows(&[
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 1.0],
            vec![4.0, 1.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 1.0, 1.0];
        let mut model = DecisionTreeClassifier::default();
        model.fit(&data, &y, 2).unwrap();
        model
    }

    #[test]
    fn test_predict_untrained() {
        let model = DecisionTreeClassifier::default();
        let data = Matrix::from_rows(&[vec![1.0, 0.0]]).unwrap();
        assert!(matches!(
            model.predict(&data, false),
            Err(CartreeError::UntrainedModel)
        ));
        assert!(matches!(
            model.predict_one(&[1.0, 0.0]),
            Err(CartreeError::UntrainedModel)
        ));
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let model = fitted_model();
        let narrow = Matrix::from_rows(&[vec![1.0]]).unwrap();
        assert!(matches!(
            model.predict(&narrow, false),
            Err(CartreeError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            model.predict_one(&[1.0, 2.0, 3.0]),
            Err(CartreeError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_predict_length_and_order() {
        let model = fitted_model();
        let data = Matrix::from_rows(&[
            vec![4.0, 1.0],
            vec![1.0, 0.0],
            vec![3.0, 1.0],
            vec![2.0, 0.0],
            vec![9.0, 9.0],
        ])
        .unwrap();
        let preds = model.predict(&data, false).unwrap();
        assert_eq!(preds.len(), data.rows);
        assert_eq!(preds, vec![1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_predict_idempotent() {
        let model = fitted_model();
        let data = Matrix::from_rows(&[vec![1.0, 0.0], vec![4.0, 1.0]]).unwrap();
        let first = model.predict(&data, false).unwrap();
        let second = model.predict(&data, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_one_matches_predict() {
        let model = fitted_model();
        let data = Matrix::from_rows(&[vec![2.0, 0.0], vec![3.0, 1.0]]).unwrap();
        let preds = model.predict(&data, false).unwrap();
        assert_eq!(model.predict_one(&[2.0, 0.0]).unwrap(), preds[0]);
        assert_eq!(model.predict_one(&[3.0, 1.0]).unwrap(), preds[1]);
    }
}
