//! Image Classification Example
//!
//! This example demonstrates how to use the quant-classify library to rank
//! the most likely classes for one or more images using a quantized ONNX
//! model and a plain-text label file.
//!
//! Usage:
//! ```
//! cargo run --example classify_image -- --model-path <model> --label-path <labels> <image_paths>...
//! ```
//!
//! Pass `--json` to print machine-readable results instead of log lines.

use clap::Parser;
use quant_classify::core::init_tracing;
use quant_classify::prelude::*;
use std::path::Path;
use tracing::{error, info};

/// Command-line arguments for the image classification example
#[derive(Parser)]
#[command(name = "classify_image")]
#[command(about = "Image Classification Example - ranks the top classes for each image")]
struct Args {
    /// Path to the quantized ONNX model file
    #[arg(short, long)]
    model_path: String,

    /// Path to the label file, one label per line
    #[arg(short, long)]
    label_path: String,

    /// Optional JSON configuration file overriding the defaults
    #[arg(short, long)]
    config: Option<String>,

    /// Print results as JSON instead of log lines
    #[arg(long)]
    json: bool,

    /// Image file paths to process
    #[arg(required = true)]
    images: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    init_tracing();

    let args = Args::parse();

    info!("Image Classification Example");

    // Verify that the model and label files exist
    if !Path::new(&args.model_path).exists() {
        error!("Model file not found: {}", args.model_path);
        return Err("Model file not found".into());
    }
    if !Path::new(&args.label_path).exists() {
        error!("Label file not found: {}", args.label_path);
        return Err("Label file not found".into());
    }

    // Filter out non-existent image files and log errors for missing files
    let existing_images: Vec<String> = args
        .images
        .iter()
        .filter(|path| {
            let exists = Path::new(path).exists();
            if !exists {
                error!("Image file not found: {}", path);
            }
            exists
        })
        .cloned()
        .collect();

    if existing_images.is_empty() {
        error!("No valid image files found");
        return Err("No valid image files found".into());
    }

    // Load the configuration file if one was given, otherwise use defaults
    let config = match &args.config {
        Some(path) => ClassifierConfig::from_file(path)?,
        None => ClassifierConfig::default(),
    };

    let mut classifier = ImageClassifier::builder()
        .with_config(config)
        .build(&args.model_path, &args.label_path)?;

    // Decode the whole batch up front; larger batches load in parallel
    let images = load_images(&existing_images)?;

    for (i, (image_path, image)) in existing_images.iter().zip(images).enumerate() {
        info!(
            "Processing image {} of {}: {}",
            i + 1,
            existing_images.len(),
            image_path
        );

        // Scale to the model's input size before encoding
        let input = resize_to_square(&image, classifier.input_size());

        match classifier.recognize(&input) {
            Ok(results) => {
                if args.json {
                    // Machine-readable mode prints [] when nothing clears
                    // the threshold
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else if results.is_empty() {
                    info!("   No class cleared the confidence threshold");
                } else {
                    for recognition in &results {
                        info!("   {recognition}");
                    }
                }
            }
            Err(e) => {
                error!("Classification failed for {}: {}", image_path, e);
                continue;
            }
        }
    }

    // Release the engine explicitly once all images are processed
    classifier.close();

    info!("Example completed!");
    Ok(())
}
