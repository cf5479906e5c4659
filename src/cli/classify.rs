use std::path::Path;
use std::time::Instant;

use crate::cli::args::Cli;
use crate::config::ClassifyConfig;
use crate::error::{NsfwError, Result};
use crate::model::NsfwModel;
use crate::preprocessing::check_image;
use crate::scores::Scores;
use crate::{verbose, warn};

/// Run the classification pipeline for a validated argument set.
///
/// Validation order matches the output contract: file existence first, then
/// a cheap decode sanity pass, then model load (with auto-download) and
/// inference. The sanity pass discards its handle; the model re-opens the
/// file itself.
///
/// # Errors
///
/// Returns an error for a missing file, an undecodable image, or any model
/// load/inference failure. The caller converts every error into the JSON
/// error object.
pub fn run(args: &Cli) -> Result<Scores> {
    let path = Path::new(&args.image);

    if !path.is_file() {
        return Err(NsfwError::file_not_found(path));
    }

    check_image(path)?;

    let threshold = if (0.0..=1.0).contains(&args.threshold) {
        args.threshold
    } else {
        warn!(
            "threshold {} outside [0, 1], using default {}",
            args.threshold,
            crate::config::DEFAULT_THRESHOLD
        );
        crate::config::DEFAULT_THRESHOLD
    };

    let config = ClassifyConfig::new()
        .with_threshold(threshold)
        .with_threads(args.threads);

    verbose!("Loading model '{}'", args.model);
    let mut model = NsfwModel::load_with_config(&args.model, config)?;

    let start = Instant::now();
    let scores = model.classify(path)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    verbose!(
        "{}: top1 {} ({:.2}), nsfw_score {:.2} ({}), {:.1}ms",
        args.image,
        scores.top1(),
        scores.top1conf(),
        scores.nsfw_score(),
        if scores.is_nsfw(threshold) { "nsfw" } else { "safe" },
        elapsed_ms
    );

    Ok(scores)
}
