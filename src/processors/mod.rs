//! Processing stages surrounding the inference engine.
//!
//! This module holds the two deterministic halves of the pipeline: the
//! encoder that turns bitmaps into quantized input tensors and the ranker
//! that turns raw byte scores into labeled recognitions.
//!
//! # Modules
//!
//! * `encode` - Pixel encoding from ARGB bitmaps to input tensors
//! * `rank` - Score ranking, thresholding, and label resolution

pub mod encode;
pub mod rank;

pub use encode::{PixelEncoder, pack_argb};
pub use rank::ResultRanker;
