//! # Quant Classify
//!
//! A Rust library for single-image classification with quantized ONNX
//! models. Feed it a bitmap; get back ranked, labeled recognitions.
//!
//! ## Features
//!
//! - Pixel encoding from ARGB bitmaps to flat byte tensors
//! - Memory-mapped model loading with ONNX Runtime execution
//! - Confidence thresholding and top-k ranking with label resolution
//! - Pluggable inference backends for testing the pipeline without a model
//!
//! ## Components
//!
//! - **Pixel Encoder**: Turn a square bitmap into the quantized input
//!   tensor the model expects
//! - **Inference Engine**: Execute the model as a black box, bytes in and
//!   bytes out
//! - **Result Ranker**: Scale raw scores to confidences, threshold, sort,
//!   and attach labels
//!
//! ## Modules
//!
//! * [`classifier`] - The classifier facade and its builder
//! * [`core`] - Configuration, errors, tensors, and the engine trait
//! * [`domain`] - Label tables and recognition records
//! * [`processors`] - The encoding and ranking stages
//! * [`utils`] - Image loading and resizing helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quant_classify::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut classifier = ImageClassifier::builder()
//!     .score_threshold(0.1)
//!     .max_results(3)
//!     .build("models/mobilenet_quant.onnx", "models/labels.txt")?;
//!
//! let image = load_image(Path::new("photo.jpg"))?;
//! let input = resize_to_square(&image, classifier.input_size());
//! for recognition in classifier.recognize(&input)? {
//!     println!("{recognition}");
//! }
//!
//! classifier.close();
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod core;
pub mod domain;
pub mod processors;
pub mod utils;

pub use classifier::{ImageClassifier, ImageClassifierBuilder};

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use quant_classify::prelude::*;
/// ```
///
/// Included items focus on the most common tasks:
/// - The classifier and its builder (`ImageClassifier`, `ImageClassifierBuilder`)
/// - Results (`Recognition`)
/// - Essential error and result types (`ClassifyError`, `ClassifyResult`)
/// - Basic image handling (`load_image`, `resize_to_square`)
///
/// For advanced customization (engine backends, encoder and ranker stages),
/// import directly from the respective modules (e.g., `quant_classify::core`,
/// `quant_classify::processors`).
pub mod prelude {
    pub use crate::classifier::{ImageClassifier, ImageClassifierBuilder};

    pub use crate::core::{ClassifierConfig, ClassifyError, ClassifyResult, RankerConfig};

    pub use crate::domain::Recognition;

    pub use crate::utils::{load_image, load_images, resize_to_square};
}
