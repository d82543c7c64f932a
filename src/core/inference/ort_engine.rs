//! ONNX Runtime execution backend.
//!
//! [`OrtEngine`] maps a model file into memory, hands the bytes to an ONNX
//! Runtime session, and executes single-image forward passes. The model is
//! treated as a black box: the engine discovers tensor names from session
//! metadata and never inspects the graph.

use crate::core::constants::INFERENCE_BATCH_SIZE;
use crate::core::errors::{ClassifyError, ClassifyResult};
use crate::core::inference::InferenceEngine;
use crate::core::tensor::{InputTensor, ScoreVector};
use memmap2::Mmap;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::value::TensorRef;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An [`InferenceEngine`] backed by an ONNX Runtime session.
///
/// The model file stays memory-mapped for the lifetime of the engine, so
/// the bytes are paged in on demand rather than read up front.
pub struct OrtEngine {
    session: Session,
    input_name: String,
    output_name: String,
    model_path: PathBuf,
    model_name: String,
    mmap: Mmap,
}

impl std::fmt::Debug for OrtEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtEngine")
            .field("model_name", &self.model_name)
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_bytes", &self.mmap.len())
            .finish()
    }
}

impl OrtEngine {
    /// Loads a model file and prepares a session for it.
    ///
    /// Tensor names are discovered from the model's own metadata.
    pub fn load(model_path: impl AsRef<Path>) -> ClassifyResult<Self> {
        Self::load_with_input_name(model_path, None)
    }

    /// Loads a model file with an explicit input tensor name.
    ///
    /// Use this when the model declares multiple inputs or when its
    /// metadata names the wrong one.
    pub fn load_with_input_name(
        model_path: impl AsRef<Path>,
        input_name: Option<&str>,
    ) -> ClassifyResult<Self> {
        let path = model_path.as_ref();
        let file = File::open(path).map_err(|e| {
            ClassifyError::initialization(format!("opening model file '{}'", path.display()), e)
        })?;
        // SAFETY: the mapping is read-only and the model file must not be
        // truncated or rewritten while the engine holds it.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| {
            ClassifyError::initialization(format!("mapping model file '{}'", path.display()), e)
        })?;

        let session = Session::builder()?
            .with_log_level(LogLevel::Error)?
            .commit_from_memory(&mmap)
            .map_err(|e| {
                ClassifyError::initialization(
                    format!("creating session for '{}'", path.display()),
                    e,
                )
            })?;

        let input_name = match input_name {
            Some(name) => name.to_string(),
            None => session
                .inputs
                .first()
                .map(|i| i.name.clone())
                .ok_or_else(|| ClassifyError::invalid_input("model declares no inputs"))?,
        };
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ClassifyError::invalid_input("model declares no outputs"))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        debug!(
            model = %model_name,
            bytes = mmap.len(),
            input = %input_name,
            output = %output_name,
            "model session ready"
        );

        Ok(OrtEngine {
            session,
            input_name,
            output_name,
            model_path: path.to_path_buf(),
            model_name,
            mmap,
        })
    }

    /// Returns the path of the loaded model file.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the model name derived from the file stem.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the size of the mapped model in bytes.
    pub fn model_size(&self) -> usize {
        self.mmap.len()
    }
}

impl InferenceEngine for OrtEngine {
    fn run_inference(&mut self, input: &InputTensor) -> ClassifyResult<ScoreVector> {
        let input_shape = input.shape().to_vec();
        if input_shape[0] != INFERENCE_BATCH_SIZE {
            return Err(ClassifyError::invalid_input(format!(
                "expected batch size {}, got {}",
                INFERENCE_BATCH_SIZE, input_shape[0]
            )));
        }

        let input_tensor = TensorRef::from_array_view(input.view()).map_err(|e| {
            ClassifyError::engine_fault(
                format!("converting input tensor with shape {input_shape:?}"),
                e,
            )
        })?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| {
                ClassifyError::engine_fault(format!("executing model '{}'", self.model_name), e)
            })?;

        let (output_shape, output_data) = outputs[self.output_name.as_str()]
            .try_extract_tensor::<u8>()
            .map_err(|e| {
                ClassifyError::engine_fault(
                    format!("extracting output '{}' as u8", self.output_name),
                    e,
                )
            })?;

        let dims: &[i64] = output_shape;
        if dims.len() != 2 || dims[0] as usize != INFERENCE_BATCH_SIZE {
            return Err(ClassifyError::invalid_input(format!(
                "model '{}': expected output shape [1, num_classes], got {:?}",
                self.model_name, dims
            )));
        }

        Ok(output_data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_rejects_missing_file() {
        let result = OrtEngine::load("no_such_model.onnx");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ClassifyError::Initialization { .. }
        ));
    }

    #[test]
    fn load_rejects_invalid_model_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not an onnx model").unwrap();
        file.flush().unwrap();

        assert!(OrtEngine::load(file.path()).is_err());
    }
}
