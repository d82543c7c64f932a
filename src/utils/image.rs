//! Utility functions for image loading and resizing.
//!
//! This module provides functions for loading images from disk and shaping
//! them for the classifier. Loading normalizes every source format to RGBA
//! so the encoder sees one pixel layout regardless of what was on disk.

use crate::core::constants::DEFAULT_PARALLEL_THRESHOLD;
use crate::core::errors::{ClassifyError, ClassifyResult};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Converts a DynamicImage to an RgbaImage.
///
/// Formats without an alpha channel gain a fully opaque one; the encoder
/// discards it either way.
pub fn dynamic_to_rgba(img: DynamicImage) -> RgbaImage {
    img.to_rgba8()
}

/// Loads an image from a file path and converts it to RgbaImage.
///
/// # Arguments
///
/// * `path` - A reference to the path of the image file to load
///
/// # Errors
///
/// Returns [`ClassifyError::ImageLoad`] if the image cannot be decoded
/// from the specified path.
pub fn load_image(path: &Path) -> ClassifyResult<RgbaImage> {
    let img = image::open(path).map_err(ClassifyError::ImageLoad)?;
    Ok(dynamic_to_rgba(img))
}

/// Resizes an image to a square of the given side length.
///
/// Uses bilinear filtering, which matches how camera previews are scaled
/// on capture devices. An image already at the target size is returned
/// unchanged.
pub fn resize_to_square(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.width() == size && image.height() == size {
        return image.clone();
    }
    image::imageops::resize(image, size, size, FilterType::Triangle)
}

/// Loads a batch of images from file paths.
///
/// Uses parallel loading when the number of paths exceeds the default
/// parallel threshold.
pub fn load_images<P: AsRef<Path> + Send + Sync>(paths: &[P]) -> ClassifyResult<Vec<RgbaImage>> {
    load_images_with_threshold(paths, None)
}

/// Loads a batch of images with a custom parallel threshold.
///
/// # Arguments
///
/// * `paths` - A slice of paths to the image files to load
/// * `parallel_threshold` - An optional threshold for parallel loading.
///   If `None`, [`DEFAULT_PARALLEL_THRESHOLD`] is used.
///
/// # Errors
///
/// Returns the first decode error encountered; no partial batch is
/// returned.
pub fn load_images_with_threshold<P: AsRef<Path> + Send + Sync>(
    paths: &[P],
    parallel_threshold: Option<usize>,
) -> ClassifyResult<Vec<RgbaImage>> {
    let threshold = parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);

    if paths.len() > threshold {
        use rayon::prelude::*;
        paths.par_iter().map(|p| load_image(p.as_ref())).collect()
    } else {
        paths.iter().map(|p| load_image(p.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn resize_changes_dimensions() {
        let image = RgbaImage::new(10, 6);
        let resized = resize_to_square(&image, 4);
        assert_eq!(resized.dimensions(), (4, 4));
    }

    #[test]
    fn resize_is_identity_at_target_size() {
        let mut image = RgbaImage::new(4, 4);
        image.put_pixel(1, 1, Rgba([9, 9, 9, 255]));
        let resized = resize_to_square(&image, 4);
        assert_eq!(resized, image);
    }

    #[test]
    fn load_image_missing_path_is_an_error() {
        assert!(load_image(Path::new("no_such_image.png")).is_err());
    }

    #[test]
    fn load_images_empty_slice_is_ok() {
        let paths: Vec<&Path> = Vec::new();
        let images = load_images(&paths).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn parallel_batch_preserves_path_order() {
        let dir = tempdir().unwrap();
        let mut paths = Vec::new();
        for value in 0..3u8 {
            let path = dir.path().join(format!("pixel_{value}.png"));
            RgbaImage::from_pixel(2, 2, Rgba([value, 0, 0, 255]))
                .save(&path)
                .unwrap();
            paths.push(path);
        }

        // A threshold of 1 pushes this batch onto the parallel branch.
        let images = load_images_with_threshold(&paths, Some(1)).unwrap();

        assert_eq!(images.len(), 3);
        for (value, image) in images.iter().enumerate() {
            assert_eq!(image.get_pixel(0, 0).0[0], value as u8);
        }
    }

    #[test]
    fn parallel_batch_fails_on_a_bad_path() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
            .save(&good)
            .unwrap();

        let paths = vec![good.clone(), good, dir.path().join("missing.png")];
        assert!(load_images_with_threshold(&paths, Some(1)).is_err());
    }
}
