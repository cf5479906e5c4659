#![allow(clippy::multiple_crate_versions)]

//! # NSFW Inference Library
//!
//! NSFW image classification in Rust, wrapping the pretrained MobileNetV2
//! NSFW model (224x224 input, five labels) behind a safe API and a small
//! CLI that prints one line of JSON.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use nsfw_inference::NsfwModel;
//!
//! fn main() -> Result<(), nsfw_inference::NsfwError> {
//!     // Downloads the default model on first use.
//!     let mut model = NsfwModel::load_default()?;
//!
//!     let scores = model.classify("image.jpg")?;
//!     println!("top label: {} ({:.2})", scores.top1(), scores.top1conf());
//!     if scores.is_nsfw(0.7) {
//!         println!("flagged as NSFW");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Classify an image; the result is one line of JSON on stdout
//! nsfw-inference image.jpg
//!
//! # {"drawings": 0.01, "hentai": 0.0, "neutral": 0.97, "porn": 0.01, "sexy": 0.01}
//! ```
//!
//! Every failure (bad arguments, missing file, undecodable image, model or
//! inference error) prints `{"error": "<message>"}` to stdout and exits
//! with code 1.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | [`NsfwModel`] for loading the ONNX model and classifying images |
//! | [`label`] | The fixed five-label set ([`Label`]) |
//! | [`scores`] | Output container ([`Scores`]) with the NSFW verdict |
//! | [`config`] | [`ClassifyConfig`] builder |
//! | [`preprocessing`] | Image validation and tensor conversion |
//! | [`download`] | Auto-download of the default model |
//! | [`output`] | The one-line JSON stdout contract |
//! | [`error`] | Error types ([`NsfwError`], [`Result`]) |

// Modules
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod label;
pub mod model;
pub mod output;
pub mod preprocessing;
pub mod scores;

// Re-export main types for convenience
pub use config::ClassifyConfig;
pub use error::{NsfwError, Result};
pub use label::Label;
pub use model::NsfwModel;
pub use scores::Scores;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "nsfw-inference");
    }
}
