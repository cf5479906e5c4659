//! Error types for the classifier.

use std::fmt;
use std::path::Path;

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, NsfwError>;

/// Main error type for the classifier.
#[derive(Debug)]
pub enum NsfwError {
    /// Wrong command-line usage (missing or surplus image path).
    Usage,
    /// The given path does not name an existing regular file.
    FileNotFound(String),
    /// Error loading or downloading the ONNX model.
    ModelLoad(String),
    /// Error during model inference.
    Inference(String),
    /// Error decoding or processing the image.
    Image(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl NsfwError {
    /// Build a [`NsfwError::FileNotFound`] for `path`.
    pub fn file_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::FileNotFound(path.as_ref().display().to_string())
    }
}

impl fmt::Display for NsfwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The Portuguese texts are wire contract: consumers of the JSON
            // error object match on them.
            Self::Usage => write!(f, "Forneça o caminho da imagem como argumento"),
            Self::FileNotFound(path) => write!(f, "Arquivo não encontrado: {path}"),
            Self::ModelLoad(msg) => write!(f, "Model load error: {msg}"),
            Self::Inference(msg) => write!(f, "Inference error: {msg}"),
            Self::Image(msg) => write!(f, "Image error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for NsfwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NsfwError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for NsfwError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NsfwError::ModelLoad("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = NsfwError::Inference("test".to_string());
        assert_eq!(err.to_string(), "Inference error: test");
    }

    #[test]
    fn test_contract_error_texts() {
        assert_eq!(
            NsfwError::Usage.to_string(),
            "Forneça o caminho da imagem como argumento"
        );
        assert_eq!(
            NsfwError::file_not_found("missing.jpg").to_string(),
            "Arquivo não encontrado: missing.jpg"
        );
    }

    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = NsfwError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
