use crate::classifier::DecisionTreeClassifier;
use crate::errors::CartreeError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save a model as a json object to a file.
    ///
    /// * `path` - Path to save the model.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), CartreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| CartreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a model as a json object
    fn json_dump(&self) -> Result<String, CartreeError> {
        serde_json::to_string(self).map_err(|e| CartreeError::UnableToWrite(e.to_string()))
    }

    /// Load a model from a Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, CartreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| CartreeError::UnableToRead(e.to_string()))
    }

    /// Load a model from a path to a json model object.
    ///
    /// * `path` - Path to load the model from.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, CartreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| CartreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for DecisionTreeClassifier {}
