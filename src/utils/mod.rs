//! Utility functions for the classification pipeline.
//!
//! This module provides image loading and resizing helpers used by the
//! classifier and its callers.

pub mod image;

pub use image::{
    dynamic_to_rgba, load_image, load_images, load_images_with_threshold, resize_to_square,
};
