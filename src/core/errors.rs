//! Error types for the classification pipeline.
//!
//! All fallible operations in this crate return [`ClassifyError`]. The
//! variants separate the two failure domains named by the public API:
//! everything that can go wrong while assembling a classifier
//! ([`ClassifyError::Initialization`]) and everything that can go wrong
//! while executing one ([`ClassifyError::EngineFault`] and friends).

use thiserror::Error;

/// A specialized `Result` type for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// The error type for classifier construction and inference.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Classifier assembly failed before any inference ran.
    ///
    /// Raised when the model file cannot be mapped, the label table cannot
    /// be read, or the engine rejects the model bytes.
    #[error("initialization error: {context}")]
    Initialization {
        /// What was being assembled when the failure occurred.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The inference engine failed while executing a model.
    #[error("engine fault: {context}")]
    EngineFault {
        /// What the engine was doing when the failure occurred.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An image could not be decoded.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Input data did not satisfy an operation's contract.
    ///
    /// Raised for dimension mismatches, empty buffers, and other caller
    /// mistakes that are detectable before touching the engine.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// An ONNX Runtime session error.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// A tensor shape error from ndarray.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// An I/O error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl ClassifyError {
    /// Creates an initialization error with context.
    pub fn initialization(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ClassifyError::Initialization {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Creates an engine fault with context.
    pub fn engine_fault(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ClassifyError::EngineFault {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Creates an invalid input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ClassifyError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a configuration error from a message.
    pub fn config_error(message: impl Into<String>) -> Self {
        ClassifyError::ConfigError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialization_error_carries_context() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such model");
        let err = ClassifyError::initialization("mapping model file", source);
        let message = err.to_string();
        assert!(message.contains("initialization error"));
        assert!(message.contains("mapping model file"));
    }

    #[test]
    fn engine_fault_carries_context() {
        let source = std::io::Error::other("execution aborted");
        let err = ClassifyError::engine_fault("running session", source);
        assert!(err.to_string().contains("running session"));
    }

    #[test]
    fn invalid_input_formats_message() {
        let err = ClassifyError::invalid_input("expected 224x224, got 100x100");
        assert_eq!(
            err.to_string(),
            "invalid input: expected 224x224, got 100x100"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ClassifyError = io.into();
        assert!(matches!(err, ClassifyError::Io(_)));
    }

    #[test]
    fn source_chain_is_preserved() {
        let source = std::io::Error::other("mmap failed");
        let err = ClassifyError::initialization("mapping model file", source);
        let chained = std::error::Error::source(&err);
        assert!(chained.is_some());
        assert!(chained.unwrap().to_string().contains("mmap failed"));
    }
}
