//! NSFW model loading and inference.
//!
//! This module provides the main [`NsfwModel`] struct for loading the ONNX
//! classification model and scoring images.

use std::path::Path;

use image::DynamicImage;
use ndarray::Array1;
use ort::session::Session;
use ort::value::TensorRef;

use crate::config::ClassifyConfig;
use crate::download::{try_download_model, DEFAULT_MODEL};
use crate::error::{NsfwError, Result};
use crate::label::Label;
use crate::preprocessing::{image_to_tensor, INPUT_SIZE};
use crate::scores::Scores;

/// NSFW classification model.
///
/// Wraps an ONNX Runtime session over the MobileNetV2 NSFW classifier and
/// provides methods for scoring images.
///
/// # Example
///
/// ```no_run
/// use nsfw_inference::NsfwModel;
///
/// let mut model = NsfwModel::load("nsfw_mobilenet2.224x224.onnx").unwrap();
/// let scores = model.classify("image.jpg").unwrap();
/// println!("top label: {}", scores.top1());
/// ```
pub struct NsfwModel {
    /// ONNX Runtime session.
    session: Session,
    /// Input tensor name.
    input_name: String,
    /// Output tensor name.
    output_name: String,
    /// Classification configuration.
    config: ClassifyConfig,
}

impl NsfwModel {
    /// Load the NSFW model from an ONNX file.
    ///
    /// If the path names the default model and the file is absent, it is
    /// downloaded automatically; any other missing path is an error.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    ///
    /// # Errors
    ///
    /// Returns an error if the model can't be found, downloaded, or loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, ClassifyConfig::default())
    }

    /// Load the default model, downloading it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or the session setup fails.
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_MODEL)
    }

    /// Load the NSFW model with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    /// * `config` - Custom classification configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model can't be found, downloaded, or loaded.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: ClassifyConfig) -> Result<Self> {
        let path = path.as_ref();

        // Known default model is fetched on first use, like the original
        // detector library does.
        let path = if path.exists() {
            path.to_path_buf()
        } else {
            try_download_model(path)?
        };

        #[allow(unused_mut)]
        let mut builder = Session::builder().map_err(|e| {
            NsfwError::ModelLoad(format!("Failed to create session builder: {e}"))
        })?;

        // Hardware acceleration (feature-gated execution providers)
        #[cfg(feature = "coreml")]
        {
            use ort::execution_providers::CoreMLExecutionProvider;
            builder = builder
                .with_execution_providers([CoreMLExecutionProvider::default().build()])
                .map_err(|e| {
                    NsfwError::ModelLoad(format!("Failed to register CoreML EP: {e}"))
                })?;
        }

        #[cfg(feature = "cuda")]
        {
            use ort::execution_providers::CUDAExecutionProvider;
            builder = builder
                .with_execution_providers([CUDAExecutionProvider::default().build()])
                .map_err(|e| NsfwError::ModelLoad(format!("Failed to register CUDA EP: {e}")))?;
        }

        let session = builder
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| NsfwError::ModelLoad(format!("Failed to set optimization level: {e}")))?
            .with_intra_threads(config.num_threads)
            .map_err(|e| NsfwError::ModelLoad(format!("Failed to set intra-thread count: {e}")))?
            .commit_from_file(&path)
            .map_err(|e| NsfwError::ModelLoad(format!("Failed to load model: {e}")))?;

        let input_name = session
            .inputs()
            .first()
            .map(|i| i.name().to_string())
            .unwrap_or_else(|| "input".to_string());

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .unwrap_or_else(|| "predictions".to_string());

        Ok(Self {
            session,
            input_name,
            output_name,
            config,
        })
    }

    /// Classify an image file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image can't be loaded or inference fails.
    pub fn classify<P: AsRef<Path>>(&mut self, path: P) -> Result<Scores> {
        let path = path.as_ref();

        let img = image::open(path).map_err(|e| {
            NsfwError::Image(format!("Failed to load image {}: {e}", path.display()))
        })?;

        self.classify_image(&img)
    }

    /// Classify a decoded [`DynamicImage`].
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails or the model output does not
    /// match the expected label set.
    pub fn classify_image(&mut self, image: &DynamicImage) -> Result<Scores> {
        let target_size = self.config.imgsz.unwrap_or(INPUT_SIZE);
        let tensor = image_to_tensor(image, target_size);

        // Input must be contiguous for a zero-copy tensor view.
        let input_contiguous = tensor.as_standard_layout();
        let input_tensor = TensorRef::from_array_view(&input_contiguous)
            .map_err(|e| NsfwError::Inference(format!("Failed to create input tensor: {e}")))?;

        let inputs = ort::inputs![&self.input_name => input_tensor];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| NsfwError::Inference(format!("Inference failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            NsfwError::Inference(format!("Output '{}' not found", self.output_name))
        })?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| NsfwError::Inference(format!("Failed to extract output: {e}")))?;

        if data.len() != Label::ALL.len() {
            return Err(NsfwError::Inference(format!(
                "Expected {} class scores, model returned {}",
                Label::ALL.len(),
                data.len()
            )));
        }

        Ok(Scores::new(Array1::from_vec(data.to_vec())))
    }

    /// Get the classification configuration.
    #[must_use]
    pub const fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Get the model's expected input size as (height, width).
    #[must_use]
    pub fn imgsz(&self) -> (usize, usize) {
        self.config.imgsz.unwrap_or(INPUT_SIZE)
    }
}

impl std::fmt::Debug for NsfwModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NsfwModel")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("imgsz", &self.imgsz())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_without_download() {
        // Non-default names never hit the network.
        let result = NsfwModel::load("nonexistent_custom.onnx");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), NsfwError::ModelLoad(_)));
    }
}
