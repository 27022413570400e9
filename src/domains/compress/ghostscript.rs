//! Ghostscript discovery and invocation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use super::error::CompressError;
use super::level::CompressionLevel;

/// Executable names searched on `PATH`, in order.
#[cfg(windows)]
const CANDIDATES: &[&str] = &["gswin64c", "gswin32c"];
#[cfg(not(windows))]
const CANDIDATES: &[&str] = &["gs"];

/// A located Ghostscript executable.
#[derive(Debug, Clone)]
pub struct Ghostscript {
    executable: PathBuf,
}

impl Ghostscript {
    /// Locate Ghostscript.
    ///
    /// An explicit `override_path` wins: it may be a path to the executable
    /// or a name to look up on `PATH`. Otherwise the platform candidates are
    /// searched in order.
    pub fn discover(override_path: Option<&Path>) -> Result<Self, CompressError> {
        if let Some(path) = override_path {
            let executable = if path.is_file() {
                Some(path.to_path_buf())
            } else {
                which::which(path).ok()
            };
            return executable.map(Self::new).ok_or_else(|| {
                CompressError::GhostscriptNotFound {
                    tried: path.display().to_string(),
                }
            });
        }

        CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(Self::new)
            .ok_or_else(|| CompressError::GhostscriptNotFound {
                tried: CANDIDATES.join(", "),
            })
    }

    /// Wrap a known executable path.
    pub fn new(executable: PathBuf) -> Self {
        debug!("Using Ghostscript at {}", executable.display());
        Self { executable }
    }

    /// Path of the executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Arguments for a `pdfwrite` pass over `input`.
    ///
    /// A pdfmark file, when given, is processed after the input so its
    /// `DOCINFO` entries override the ones carried over from the source.
    pub fn compress_args(
        level: CompressionLevel,
        input: &Path,
        output: &Path,
        pdfmarks: Option<&Path>,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-sDEVICE=pdfwrite".into(),
            "-dCompatibilityLevel=1.4".into(),
            format!("-dPDFSETTINGS={}", level.pdf_settings()).into(),
            "-dNOPAUSE".into(),
            "-dQUIET".into(),
            "-dBATCH".into(),
        ];

        let mut output_arg = OsString::from("-sOutputFile=");
        output_arg.push(output);
        args.push(output_arg);
        args.push(input.into());

        if let Some(marks) = pdfmarks {
            args.push(marks.into());
        }
        args
    }

    /// Run Ghostscript with the given arguments, waiting for it to exit.
    pub fn run(&self, args: &[OsString]) -> Result<(), CompressError> {
        info!("Running {} with {} arguments", self.executable.display(), args.len());

        let output = Command::new(&self.executable).args(args).output()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            Err(CompressError::GhostscriptFailed { code, stderr })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_args_order() {
        let args = Ghostscript::compress_args(
            CompressionLevel::Ebook,
            Path::new("in.pdf"),
            Path::new("out.pdf"),
            None,
        );
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(
            args,
            vec![
                "-sDEVICE=pdfwrite",
                "-dCompatibilityLevel=1.4",
                "-dPDFSETTINGS=/ebook",
                "-dNOPAUSE",
                "-dQUIET",
                "-dBATCH",
                "-sOutputFile=out.pdf",
                "in.pdf",
            ]
        );
    }

    #[test]
    fn test_compress_args_with_pdfmarks_last() {
        let args = Ghostscript::compress_args(
            CompressionLevel::default(),
            Path::new("in.pdf"),
            Path::new("out.pdf"),
            Some(Path::new("out.pdf.pdfmarks")),
        );
        assert_eq!(args.last().unwrap(), "out.pdf.pdfmarks");
        assert!(args.iter().any(|a| a == "-dPDFSETTINGS=/printer"));
    }

    #[test]
    fn test_discover_missing_override() {
        let err = Ghostscript::discover(Some(Path::new("/nonexistent/bin/gs-missing"))).unwrap_err();
        assert!(matches!(err, CompressError::GhostscriptNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let fake = dir.path().join("gs");
        std::fs::write(&fake, "#!/bin/sh\n").unwrap();

        let gs = Ghostscript::discover(Some(&fake)).unwrap();
        assert_eq!(gs.executable(), fake.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_failure() {
        let gs = Ghostscript::new(PathBuf::from("false"));
        let err = gs.run(&[]).unwrap_err();
        assert!(matches!(err, CompressError::GhostscriptFailed { code: 1, .. }));
    }
}
