//! Pixel encoding for quantized classification models.
//!
//! The encoder turns a square bitmap into the flat byte tensor the engine
//! consumes: pixels in row-major order, three bytes per pixel (R, G, B),
//! alpha discarded. For callers holding packed ARGB words, each 32-bit
//! value carries alpha in bits 24-31, red in 16-23, green in 8-15, and
//! blue in 0-7.

use crate::core::constants::{DEFAULT_INPUT_SIZE, IMAGE_CHANNELS, INFERENCE_BATCH_SIZE};
use crate::core::errors::{ClassifyError, ClassifyResult};
use crate::core::tensor::InputTensor;
use image::RgbaImage;

/// Packs alpha, red, green, and blue bytes into one ARGB word.
pub fn pack_argb(alpha: u8, red: u8, green: u8, blue: u8) -> u32 {
    (u32::from(alpha) << 24) | (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
}

/// Encodes square bitmaps into quantized NHWC input tensors.
#[derive(Debug, Clone)]
pub struct PixelEncoder {
    input_size: u32,
}

impl Default for PixelEncoder {
    fn default() -> Self {
        PixelEncoder::new(DEFAULT_INPUT_SIZE)
    }
}

impl PixelEncoder {
    /// Creates an encoder for square inputs of the given side length.
    pub fn new(input_size: u32) -> Self {
        PixelEncoder { input_size }
    }

    /// Returns the side length this encoder expects.
    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Encodes an RGBA bitmap into an input tensor.
    ///
    /// The bitmap must already be resized to `input_size` on both sides;
    /// mismatched dimensions are rejected rather than silently cropped.
    pub fn encode(&self, image: &RgbaImage) -> ClassifyResult<InputTensor> {
        let (width, height) = image.dimensions();
        self.check_dimensions(width, height)?;

        let size = self.input_size as usize;
        let mut data = Vec::with_capacity(size * size * IMAGE_CHANNELS);
        for pixel in image.pixels() {
            let [red, green, blue, _alpha] = pixel.0;
            data.push(red);
            data.push(green);
            data.push(blue);
        }

        let tensor =
            InputTensor::from_shape_vec((INFERENCE_BATCH_SIZE, size, size, IMAGE_CHANNELS), data)?;
        Ok(tensor)
    }

    /// Encodes a row-major buffer of packed ARGB words into an input tensor.
    ///
    /// This is the entry point for callers that already hold raw pixel
    /// words instead of a decoded image.
    pub fn encode_pixels(
        &self,
        pixels: &[u32],
        width: u32,
        height: u32,
    ) -> ClassifyResult<InputTensor> {
        self.check_dimensions(width, height)?;

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ClassifyError::invalid_input(format!(
                "pixel buffer holds {} words, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        let size = self.input_size as usize;
        let mut data = Vec::with_capacity(size * size * IMAGE_CHANNELS);
        for &word in pixels {
            data.push(((word >> 16) & 0xFF) as u8);
            data.push(((word >> 8) & 0xFF) as u8);
            data.push((word & 0xFF) as u8);
        }

        let tensor =
            InputTensor::from_shape_vec((INFERENCE_BATCH_SIZE, size, size, IMAGE_CHANNELS), data)?;
        Ok(tensor)
    }

    fn check_dimensions(&self, width: u32, height: u32) -> ClassifyResult<()> {
        if width != self.input_size || height != self.input_size {
            return Err(ClassifyError::invalid_input(format!(
                "expected a {size}x{size} bitmap, got {width}x{height}",
                size = self.input_size
            )));
        }
        Ok(())
    }
}
