//! Model downloading utilities.
//!
//! The default classification model is fetched automatically from its
//! release page when it is not found locally, mirroring the auto-download
//! behavior of the original detector library.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{NsfwError, Result};

/// Default NSFW classification model name.
pub const DEFAULT_MODEL: &str = "nsfw_mobilenet2.224x224.onnx";

/// URL for downloading the default model.
const DEFAULT_MODEL_URL: &str =
    "https://github.com/GantMan/nsfw_model/releases/download/1.1.0/nsfw_mobilenet2.224x224.onnx";

/// Connection timeout in seconds.
const CONNECT_TIMEOUT: u64 = 30;

/// Read timeout in seconds.
const READ_TIMEOUT: u64 = 300;

/// Minimum interval between progress updates, in seconds.
const MIN_UPDATE_INTERVAL: f64 = 0.1;

/// Format bytes as a human-readable string (e.g., "10.4MB").
fn format_bytes(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    if bytes >= GB {
        format!("{:.1}GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes / KB)
    } else {
        format!("{bytes:.0}B")
    }
}

/// Print a progress line to stderr, overwriting the previous one.
///
/// Progress goes to stderr only: stdout is reserved for the JSON result.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn report_progress(desc: &str, downloaded: u64, total: u64, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        downloaded as f64 / elapsed
    } else {
        0.0
    };

    if total > 0 {
        let percent = ((downloaded as f64 / total as f64).min(1.0) * 100.0) as u8;
        eprint!(
            "\r\x1b[K{desc}: {percent}% {}/{} {}/s",
            format_bytes(downloaded as f64),
            format_bytes(total as f64),
            format_bytes(rate)
        );
    } else {
        eprint!(
            "\r\x1b[K{desc}: {} {}/s",
            format_bytes(downloaded as f64),
            format_bytes(rate)
        );
    }
    std::io::stderr().flush().ok();
}

/// Download a file from `url` to `dest`.
///
/// Streams to a `.part` temporary file in the destination directory, then
/// renames atomically so a partial download never masquerades as a model.
fn download_file(url: &str, dest: &Path) -> Result<()> {
    let config = ureq::Agent::config_builder()
        .timeout_connect(Some(Duration::from_secs(CONNECT_TIMEOUT)))
        .timeout_recv_body(Some(Duration::from_secs(READ_TIMEOUT)))
        .build();
    let agent = ureq::Agent::new_with_config(config);

    let response = agent.get(url).call().map_err(|e| {
        let msg = match &e {
            ureq::Error::Timeout(_) => format!("Connection timed out while downloading {url}"),
            ureq::Error::Io(io_err) => format!("Network error downloading {url}: {io_err}"),
            _ => format!("Failed to download {url}: {e}"),
        };
        NsfwError::ModelLoad(msg)
    })?;

    let total_size: u64 = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s: &str| s.parse().ok())
        .unwrap_or(0);

    let temp_path = dest.with_extension("part");
    let _ = fs::remove_file(&temp_path);

    let temp_file = File::create(&temp_path).map_err(|e| {
        NsfwError::ModelLoad(format!(
            "Failed to create temp file {}: {e}",
            temp_path.display()
        ))
    })?;
    let mut writer = BufWriter::new(temp_file);
    let mut reader = response.into_body().into_reader();

    let desc = format!("Downloading {} to '{}'", url, dest.display());
    let mut buffer = [0u8; 65536];
    let mut downloaded: u64 = 0;
    let start_time = Instant::now();
    let mut last_update = Instant::now();

    let download_result: Result<()> = (|| {
        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| NsfwError::ModelLoad(format!("Failed to read from network: {e}")))?;

            if bytes_read == 0 {
                break;
            }

            writer.write_all(&buffer[..bytes_read]).map_err(|e| {
                NsfwError::ModelLoad(format!("Failed to write to temp file: {e}"))
            })?;

            downloaded += bytes_read as u64;

            let now = Instant::now();
            if now.duration_since(last_update).as_secs_f64() >= MIN_UPDATE_INTERVAL {
                last_update = now;
                report_progress(&desc, downloaded, total_size, start_time.elapsed().as_secs_f64());
            }
        }

        writer
            .flush()
            .map_err(|e| NsfwError::ModelLoad(format!("Failed to flush temp file: {e}")))?;

        Ok(())
    })();

    if let Err(e) = download_result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    report_progress(&desc, downloaded, total_size, start_time.elapsed().as_secs_f64());
    eprintln!();

    fs::rename(&temp_path, dest).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        NsfwError::ModelLoad(format!(
            "Failed to move downloaded file to {}: {e}",
            dest.display()
        ))
    })?;

    Ok(())
}

/// Attempt to download a model if it matches the known downloadable model.
///
/// Only the default `nsfw_mobilenet2.224x224.onnx` model is auto-fetched;
/// any other missing path is an error so that a typo never triggers a
/// surprise network fetch. Downloads to the directory named by `model_path`
/// (the current directory when given a bare filename).
///
/// # Errors
///
/// Returns an error if the model is not the known downloadable one or the
/// download fails.
pub fn try_download_model<P: AsRef<Path>>(model_path: P) -> Result<PathBuf> {
    let path = model_path.as_ref();
    let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if filename != DEFAULT_MODEL {
        return Err(NsfwError::ModelLoad(format!(
            "Model file not found: {}. Auto-download is supported for: {DEFAULT_MODEL}",
            path.display(),
        )));
    }

    let dest_path = path.to_path_buf();
    download_file(DEFAULT_MODEL_URL, &dest_path)?;

    Ok(dest_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_returns_error() {
        let result = try_download_model("unknown_model.onnx");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Auto-download is supported for"));
    }

    #[test]
    fn test_unknown_model_in_directory_returns_error() {
        let result = try_download_model("models/other.onnx");
        assert!(result.is_err());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500.0), "500B");
        assert_eq!(format_bytes(1024.0), "1.0KB");
        assert_eq!(format_bytes(1_048_576.0), "1.0MB");
        assert_eq!(format_bytes(1_073_741_824.0), "1.0GB");
    }
}
