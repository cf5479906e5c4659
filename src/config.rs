//! Classification configuration.
//!
//! This module defines the [`ClassifyConfig`] struct, which controls the
//! parameters of a classification run: the NSFW decision threshold, the
//! model input size override, and ONNX Runtime threading.

/// Default NSFW decision threshold.
///
/// Matches the `NSFW_THRESHOLD` default used by the moderation callers of
/// the original detector.
pub const DEFAULT_THRESHOLD: f32 = 0.7;

/// Configuration for NSFW classification.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use nsfw_inference::ClassifyConfig;
///
/// let config = ClassifyConfig::new()
///     .with_threshold(0.8)
///     .with_threads(4);
/// ```
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Combined explicit-probability threshold for the NSFW verdict (0.0 to 1.0).
    pub threshold: f32,
    /// Explicit input image size (height, width).
    /// If `None`, the model's expected input size is used.
    pub imgsz: Option<(usize, usize)>,
    /// Number of intra-op threads for ONNX Runtime.
    /// Setting this to `0` lets ONNX Runtime choose.
    pub num_threads: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            imgsz: None,
            num_threads: 0,
        }
    }
}

impl ClassifyConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the NSFW verdict threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Combined explicit probability required for an NSFW
    ///   verdict (0.0 to 1.0).
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the model input size.
    ///
    /// # Arguments
    ///
    /// * `height` - The target image height.
    /// * `width` - The target image width.
    #[must_use]
    pub const fn with_imgsz(mut self, height: usize, width: usize) -> Self {
        self.imgsz = Some((height, width));
        self
    }

    /// Set the number of intra-op threads for inference.
    ///
    /// # Arguments
    ///
    /// * `threads` - The number of threads. Set to `0` for auto-configuration.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClassifyConfig::default();
        assert!((config.threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.imgsz, None);
        assert_eq!(config.num_threads, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = ClassifyConfig::new()
            .with_threshold(0.9)
            .with_imgsz(224, 224)
            .with_threads(8);

        assert!((config.threshold - 0.9).abs() < f32::EPSILON);
        assert_eq!(config.imgsz, Some((224, 224)));
        assert_eq!(config.num_threads, 8);
    }
}
