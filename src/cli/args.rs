use clap::Parser;

use crate::config::DEFAULT_THRESHOLD;
use crate::download::DEFAULT_MODEL;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about = "Classify an image for NSFW content and print JSON scores")]
#[command(after_help = r#"Output:
    One line of JSON on stdout. On success, the label -> score mapping:
        {"drawings": 0.01, "hentai": 0.0, "neutral": 0.97, "porn": 0.01, "sexy": 0.01}
    On any failure, an error object and exit code 1:
        {"error": "Arquivo não encontrado: missing.jpg"}

Examples:
    nsfw-inference image.jpg
    nsfw-inference image.jpg --threshold 0.8 --verbose
    nsfw-inference image.jpg --model models/nsfw_mobilenet2.224x224.onnx"#)]
pub struct Cli {
    /// Path to the image to classify
    pub image: String,

    /// Path to the ONNX model file (downloaded automatically if absent)
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Combined explicit-probability threshold for the NSFW verdict
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Number of intra-op inference threads (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Show diagnostic output on stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_args_defaults() {
        let args = Cli::parse_from(["nsfw-inference", "image.jpg"]);
        assert_eq!(args.image, "image.jpg");
        assert_eq!(args.model, DEFAULT_MODEL);
        assert!((args.threshold - DEFAULT_THRESHOLD).abs() < f32::EPSILON);
        assert_eq!(args.threads, 0);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_custom() {
        let args = Cli::parse_from([
            "nsfw-inference",
            "photo.png",
            "--model",
            "custom.onnx",
            "--threshold",
            "0.9",
            "--verbose",
        ]);
        assert_eq!(args.image, "photo.png");
        assert_eq!(args.model, "custom.onnx");
        assert!((args.threshold - 0.9).abs() < f32::EPSILON);
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_image_is_error() {
        assert!(Cli::try_parse_from(["nsfw-inference"]).is_err());
    }

    #[test]
    fn test_surplus_positional_is_error() {
        assert!(Cli::try_parse_from(["nsfw-inference", "a.jpg", "b.jpg"]).is_err());
    }
}
