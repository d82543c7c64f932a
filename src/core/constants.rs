//! Constants shared across the classification pipeline.
//!
//! This module defines the default values used by the encoder, the ranker,
//! and the surrounding glue: input geometry, result bounds, and the
//! quantization scale of the engine's byte scores.

/// The default side length for classification input bitmaps.
///
/// Quantized classification models in the MobileNet family expect square
/// inputs of this size.
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// The default number of top results returned by the ranker.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// The default confidence threshold for emitting a recognition.
///
/// Scores at or below this value are discarded before ranking.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.1;

/// The number of channels encoded per pixel (R, G, B; alpha is discarded).
pub const IMAGE_CHANNELS: usize = 3;

/// The batch dimension of every input tensor.
///
/// The engine contract covers exactly one image per call.
pub const INFERENCE_BATCH_SIZE: usize = 1;

/// The scale dividing a raw byte score into a confidence in [0, 1].
pub const QUANT_SCALE: f32 = 255.0;

/// The default threshold for parallel processing.
///
/// Image batches larger than this are loaded through the rayon thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;
