//! Model serialization and persistence
//!
//! A trained model is written as a JSON envelope: the `SvmModel` itself
//! plus metadata (library version, creation timestamp, training
//! parameters). Loading reconstructs a fully functional predictor without
//! re-running training.

use crate::core::{Result, SolverConfig, SvmError};
use crate::model::SvmModel;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// On-disk representation of a trained model
#[derive(Serialize, Deserialize)]
pub struct ModelFile {
    /// The trained model artifact
    pub model: SvmModel,
    /// Model metadata for tracking and validation
    pub metadata: ModelMetadata,
}

/// Model metadata for tracking and validation
#[derive(Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Library version used to create the model
    pub library_version: String,
    /// Number of support vectors
    pub n_support_vectors: usize,
    /// Training parameters used
    pub training_params: TrainingParams,
    /// Creation timestamp
    pub created_at: String,
}

/// Training parameters for reference
#[derive(Serialize, Deserialize)]
pub struct TrainingParams {
    pub c: f64,
    pub tol: f64,
    pub max_stalled_passes: usize,
}

impl From<&SolverConfig> for TrainingParams {
    fn from(config: &SolverConfig) -> Self {
        Self {
            c: config.c,
            tol: config.tol,
            max_stalled_passes: config.max_stalled_passes,
        }
    }
}

impl ModelFile {
    /// Wrap a trained model with metadata for persistence
    pub fn new(model: SvmModel, config: &SolverConfig) -> Self {
        let n_support_vectors = model.n_support_vectors();
        Self {
            model,
            metadata: ModelMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                n_support_vectors,
                training_params: TrainingParams::from(config),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save the model to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(SvmError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| SvmError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load a model from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmError::IoError)?;
        let reader = BufReader::new(file);
        let model_file = serde_json::from_reader(reader)
            .map_err(|e| SvmError::SerializationError(e.to_string()))?;
        Ok(model_file)
    }

    /// Take the model out of the envelope
    pub fn into_model(self) -> SvmModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DenseMatrix;
    use crate::kernel::KernelKind;
    use crate::optimizer::SvmOptimizer;
    use tempfile::NamedTempFile;

    fn trained_model() -> (SvmModel, SolverConfig) {
        let x = DenseMatrix::from_rows(&[
            vec![2.0, 2.0],
            vec![2.0, 1.0],
            vec![-1.0, -1.0],
            vec![-1.0, 0.0],
        ])
        .unwrap();
        let y = [1.0, 1.0, 0.0, 0.0];
        let config = SolverConfig::default();
        let model = SvmOptimizer::new(KernelKind::Linear, config.clone())
            .with_seed(17)
            .train(&x, &y)
            .unwrap();
        (model, config)
    }

    #[test]
    fn test_metadata_captures_training_params() {
        let (model, config) = trained_model();
        let file = ModelFile::new(model, &config);

        assert_eq!(file.metadata.training_params.c, config.c);
        assert_eq!(file.metadata.training_params.tol, config.tol);
        assert_eq!(
            file.metadata.n_support_vectors,
            file.model.n_support_vectors()
        );
    }

    #[test]
    fn test_round_trip_preserves_predictions() -> Result<()> {
        let (model, config) = trained_model();
        let test_set = DenseMatrix::from_rows(&[
            vec![3.0, 1.0],
            vec![-2.0, 0.5],
            vec![0.5, 0.5],
            vec![-0.5, -2.0],
        ])
        .unwrap();

        let before: Vec<f64> = model
            .predictor()?
            .predict(&test_set)?
            .iter()
            .map(|p| p.label)
            .collect();

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        ModelFile::new(model, &config).save(temp_file.path())?;
        let restored = ModelFile::load(temp_file.path())?.into_model();

        let after: Vec<f64> = restored
            .predictor()?
            .predict(&test_set)?
            .iter()
            .map(|p| p.label)
            .collect();

        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = ModelFile::load("/nonexistent/model.json");
        assert!(matches!(result, Err(SvmError::IoError(_))));
    }
}
