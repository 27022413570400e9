//! Compression service implementation.
//!
//! The CompressionService runs one Ghostscript pass per request. Metadata is
//! applied in the same pass through a temporary pdfmark file; if that pass
//! fails, the document is compressed again without metadata so the caller
//! still gets a result.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::error::CompressError;
use super::ghostscript::Ghostscript;
use super::level::CompressionLevel;
use super::metadata::DocumentMetadata;
use crate::core::config::CompressionConfig;

/// A single compression job.
#[derive(Debug, Clone)]
pub struct CompressionRequest {
    /// Source PDF.
    pub input: PathBuf,

    /// Destination of the compressed PDF.
    pub output: PathBuf,

    /// Ghostscript preset.
    pub level: CompressionLevel,

    /// Metadata to write, possibly empty.
    pub metadata: DocumentMetadata,
}

impl CompressionRequest {
    /// Request writing `<stem>_compressed<ext>` next to the input.
    pub fn beside_input(
        input: impl Into<PathBuf>,
        level: CompressionLevel,
        metadata: DocumentMetadata,
    ) -> Self {
        let input = input.into();
        Self {
            output: default_output_path(&input),
            input,
            level,
            metadata,
        }
    }
}

/// Outcome of a compression job.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionReport {
    pub output: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
    /// Whether the requested metadata made it into the output.
    pub metadata_applied: bool,
}

impl CompressionReport {
    /// Size reduction in percent (negative if the file grew).
    pub fn reduction_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_size as f64 / self.original_size as f64) * 100.0
    }

    /// One-line size summary, e.g. `120.00 KB -> 60.00 KB (50.0%)`.
    pub fn summary(&self) -> String {
        format!(
            "{:.2} KB -> {:.2} KB ({:.1}%)",
            self.original_size as f64 / 1024.0,
            self.compressed_size as f64 / 1024.0,
            self.reduction_percent()
        )
    }
}

/// Service compressing PDFs with Ghostscript.
#[derive(Debug, Clone)]
pub struct CompressionService {
    config: CompressionConfig,
}

impl CompressionService {
    /// Create a new CompressionService with the given configuration.
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// The service configuration.
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Locate Ghostscript according to the configuration.
    pub fn ghostscript(&self) -> Result<Ghostscript, CompressError> {
        Ghostscript::discover(self.config.ghostscript.as_deref())
    }

    /// Compress `request.input` into `request.output`.
    ///
    /// Blocks until Ghostscript exits; async callers should run this on a
    /// blocking worker.
    #[instrument(skip_all, fields(input = %request.input.display(), level = request.level.value()))]
    pub fn compress(&self, request: &CompressionRequest) -> Result<CompressionReport, CompressError> {
        if !request.input.is_file() {
            return Err(CompressError::InputNotFound(request.input.clone()));
        }

        let gs = self.ghostscript()?;
        info!(
            "Compressing {} at level {}",
            request.input.display(),
            request.level
        );

        let marks_path = pdfmarks_path(&request.output);
        let marks = match request.metadata.to_pdfmark() {
            Some(content) => match fs::write(&marks_path, content) {
                Ok(()) => Some(marks_path.as_path()),
                Err(e) => {
                    warn!("Could not write metadata file, skipping metadata: {}", e);
                    None
                }
            },
            None => None,
        };

        let args = Ghostscript::compress_args(request.level, &request.input, &request.output, marks);
        let first_pass = gs.run(&args);

        if marks.is_some() {
            if let Err(e) = fs::remove_file(&marks_path) {
                warn!("Failed to remove {}: {}", marks_path.display(), e);
            }
        }

        let metadata_applied = match first_pass {
            Ok(()) => marks.is_some(),
            Err(e) if marks.is_some() => {
                warn!("Compression with metadata failed ({}), retrying without metadata", e);
                let args =
                    Ghostscript::compress_args(request.level, &request.input, &request.output, None);
                gs.run(&args)?;
                false
            }
            Err(e) => return Err(e),
        };

        let report = CompressionReport {
            output: request.output.clone(),
            original_size: fs::metadata(&request.input)?.len(),
            compressed_size: fs::metadata(&request.output)?.len(),
            metadata_applied,
        };

        info!("Compressed {}: {}", request.input.display(), report.summary());
        Ok(report)
    }
}

/// `<stem>_compressed<ext>` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let file_name = match input.extension() {
        Some(ext) => format!("{}_compressed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_compressed", stem),
    };
    input.with_file_name(file_name)
}

fn pdfmarks_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".pdfmarks");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_with(ghostscript: Option<PathBuf>) -> CompressionService {
        CompressionService::new(CompressionConfig {
            ghostscript,
            ..CompressionConfig::default()
        })
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/docs/report.pdf")),
            PathBuf::from("/tmp/docs/report_compressed.pdf")
        );
        assert_eq!(
            default_output_path(Path::new("scan")),
            PathBuf::from("scan_compressed")
        );
    }

    #[test]
    fn test_report_summary() {
        let report = CompressionReport {
            output: PathBuf::from("out.pdf"),
            original_size: 2048,
            compressed_size: 512,
            metadata_applied: false,
        };
        assert_eq!(report.reduction_percent(), 75.0);
        assert_eq!(report.summary(), "2.00 KB -> 0.50 KB (75.0%)");
    }

    #[test]
    fn test_missing_input() {
        let service = service_with(None);
        let request = CompressionRequest::beside_input(
            "/nonexistent/file.pdf",
            CompressionLevel::default(),
            DocumentMetadata::default(),
        );
        let err = service.compress(&request).unwrap_err();
        assert!(matches!(err, CompressError::InputNotFound(_)));
    }

    /// Fake Ghostscript copying the input (second to last argument when no
    /// pdfmarks are passed) to the `-sOutputFile=` target.
    #[cfg(unix)]
    fn fake_ghostscript(dir: &Path, fail_with_marks: bool) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
out=""
last=""
for arg in "$@"; do
  case "$arg" in
    -sOutputFile=*) out="${{arg#-sOutputFile=}}" ;;
    -*) ;;
    *) if [ -z "$input" ]; then input="$arg"; else last="$arg"; fi ;;
  esac
done
if [ -n "$last" ] && [ "{fail}" = "yes" ]; then
  echo "pdfmark error" >&2
  exit 3
fi
head -c 10 "$input" > "$out"
"#,
            fail = if fail_with_marks { "yes" } else { "no" }
        );
        let path = dir.join("fake-gs");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_compress_with_fake_ghostscript() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.pdf");
        fs::write(&input, vec![b'x'; 100]).unwrap();

        let service = service_with(Some(fake_ghostscript(dir.path(), false)));
        let request = CompressionRequest::beside_input(
            &input,
            CompressionLevel::Screen,
            DocumentMetadata {
                title: Some("Report".to_string()),
                ..Default::default()
            },
        );

        let report = service.compress(&request).unwrap();
        assert_eq!(report.original_size, 100);
        assert_eq!(report.compressed_size, 10);
        assert!(report.metadata_applied);
        assert!(dir.path().join("report_compressed.pdf").is_file());
        assert!(!pdfmarks_path(&request.output).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_metadata_failure_keeps_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("report.pdf");
        fs::write(&input, vec![b'x'; 50]).unwrap();

        let service = service_with(Some(fake_ghostscript(dir.path(), true)));
        let request = CompressionRequest::beside_input(
            &input,
            CompressionLevel::default(),
            DocumentMetadata {
                author: Some("Ada".to_string()),
                ..Default::default()
            },
        );

        let report = service.compress(&request).unwrap();
        assert!(!report.metadata_applied);
        assert!(report.output.is_file());
    }
}
