//! Inference engine abstractions.
//!
//! This module defines the [`InferenceEngine`] trait that the classifier
//! drives, along with the ONNX Runtime implementation used in production.
//! The trait keeps the engine opaque: callers hand it a quantized input
//! tensor and receive raw byte scores, with no visibility into graph
//! structure or execution strategy.

pub mod ort_engine;

pub use ort_engine::OrtEngine;

use crate::core::errors::ClassifyResult;
use crate::core::tensor::{InputTensor, ScoreVector};

/// A model execution backend.
///
/// Implementations own whatever state the underlying runtime needs and
/// expose a single synchronous entry point. Execution takes `&mut self`
/// so the backend never has to lock internally; callers that want to share
/// an engine across threads wrap it themselves.
pub trait InferenceEngine {
    /// Runs the model on one quantized input tensor.
    ///
    /// Returns one byte score per class, in class-index order. The batch
    /// dimension of `input` is always 1.
    fn run_inference(&mut self, input: &InputTensor) -> ClassifyResult<ScoreVector>;
}
