//! Tensor aliases for the quantized classification pipeline.
//!
//! The engine consumes and produces unsigned byte tensors. These aliases
//! pin the layouts so the encoder, the engine, and the ranker agree on
//! shapes without repeating dimension comments at every call site.

use ndarray::Array4;

/// A quantized input tensor in NHWC layout.
///
/// The dimensions are `(batch, height, width, channels)` where batch is
/// always 1 and channels is always 3 (R, G, B).
pub type InputTensor = Array4<u8>;

/// The raw byte scores produced by one inference call.
///
/// One byte per class, in class-index order. A byte divided by 255 is the
/// class confidence.
pub type ScoreVector = Vec<u8>;
