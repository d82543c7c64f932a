//! The image classifier facade.
//!
//! [`ImageClassifier`] wires the pipeline stages together: the pixel
//! encoder, the inference engine, and the result ranker. One call to
//! [`recognize`](ImageClassifier::recognize) takes a bitmap through all
//! three stages and returns ranked recognitions.
//!
//! The classifier is generic over its engine so the deterministic stages
//! can be exercised against canned backends; production code uses the
//! default [`OrtEngine`].

use crate::core::config::ClassifierConfig;
use crate::core::errors::{ClassifyError, ClassifyResult};
use crate::core::inference::{InferenceEngine, OrtEngine};
use crate::core::tensor::InputTensor;
use crate::domain::labels::LabelTable;
use crate::domain::recognition::Recognition;
use crate::processors::encode::PixelEncoder;
use crate::processors::rank::ResultRanker;
use image::RgbaImage;
use std::path::Path;
use tracing::{debug, info};

/// A single-image classifier over an opaque inference engine.
pub struct ImageClassifier<E = OrtEngine> {
    engine: E,
    encoder: PixelEncoder,
    ranker: ResultRanker,
    labels: LabelTable,
}

impl ImageClassifier<OrtEngine> {
    /// Returns a builder for assembling a classifier from files on disk.
    pub fn builder() -> ImageClassifierBuilder {
        ImageClassifierBuilder::new()
    }
}

impl<E: InferenceEngine> ImageClassifier<E> {
    /// Assembles a classifier from an already constructed engine.
    pub fn from_parts(
        engine: E,
        labels: LabelTable,
        config: &ClassifierConfig,
    ) -> ClassifyResult<Self> {
        config.validate()?;
        Ok(ImageClassifier {
            engine,
            encoder: PixelEncoder::new(config.input_size),
            ranker: ResultRanker::new(config.ranker.clone()),
            labels,
        })
    }

    /// Classifies one bitmap and returns ranked recognitions.
    ///
    /// The bitmap must match the configured input size on both sides.
    /// The returned list is sorted by descending confidence and may be
    /// empty when nothing clears the threshold.
    pub fn recognize(&mut self, image: &RgbaImage) -> ClassifyResult<Vec<Recognition>> {
        let tensor = self.encoder.encode(image)?;
        self.infer(&tensor)
    }

    /// Classifies a row-major buffer of packed ARGB words.
    pub fn recognize_pixels(
        &mut self,
        pixels: &[u32],
        width: u32,
        height: u32,
    ) -> ClassifyResult<Vec<Recognition>> {
        let tensor = self.encoder.encode_pixels(pixels, width, height)?;
        self.infer(&tensor)
    }

    fn infer(&mut self, tensor: &InputTensor) -> ClassifyResult<Vec<Recognition>> {
        let scores = self.engine.run_inference(tensor)?;
        let results = self.ranker.rank(&scores, &self.labels);
        debug!(
            classes = scores.len(),
            results = results.len(),
            "ranked scores"
        );
        Ok(results)
    }

    /// Returns the label table the classifier resolves names against.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Returns the input side length the classifier expects.
    pub fn input_size(&self) -> u32 {
        self.encoder.input_size()
    }

    /// Releases the engine and everything it holds.
    ///
    /// Consuming `self` makes a second call, or a call concurrent with
    /// `recognize`, impossible. Dropping the classifier has the same
    /// effect; this method only makes the release explicit at the call
    /// site.
    pub fn close(self) {
        debug!("releasing classifier resources");
    }
}

/// Builder for [`ImageClassifier`] instances backed by [`OrtEngine`].
#[derive(Debug, Default)]
pub struct ImageClassifierBuilder {
    config: ClassifierConfig,
}

impl ImageClassifierBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        ImageClassifierBuilder {
            config: ClassifierConfig::default(),
        }
    }

    /// Sets the expected input side length.
    pub fn input_size(mut self, size: u32) -> Self {
        self.config.input_size = size;
        self
    }

    /// Sets the minimum confidence for emitted recognitions.
    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.config.ranker.score_threshold = threshold;
        self
    }

    /// Sets the maximum number of recognitions per image.
    pub fn max_results(mut self, count: usize) -> Self {
        self.config.ranker.max_results = count;
        self
    }

    /// Overrides the model's input tensor name.
    pub fn input_name(mut self, name: impl Into<String>) -> Self {
        self.config.input_name = Some(name.into());
        self
    }

    /// Replaces the whole configuration at once.
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the model and label files and assembles the classifier.
    pub fn build(
        self,
        model_path: impl AsRef<Path>,
        label_path: impl AsRef<Path>,
    ) -> ClassifyResult<ImageClassifier<OrtEngine>> {
        self.config.validate()?;

        let label_path = label_path.as_ref();
        let labels = LabelTable::from_file(label_path).map_err(|e| {
            ClassifyError::initialization(
                format!("reading label table '{}'", label_path.display()),
                e,
            )
        })?;

        let engine = OrtEngine::load_with_input_name(
            model_path.as_ref(),
            self.config.input_name.as_deref(),
        )?;

        info!(
            model = %engine.model_name(),
            labels = labels.len(),
            input_size = self.config.input_size,
            "classifier ready"
        );

        ImageClassifier::from_parts(engine, labels, &self.config)
    }
}
