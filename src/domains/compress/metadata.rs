//! Document metadata and its Ghostscript `DOCINFO` pdfmark encoding.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Accepted input layouts, tried in order after a `T` separator is
/// replaced with a space.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Metadata to write into the compressed document.
///
/// Dates are kept as entered and converted when the pdfmark is built, so an
/// invalid date only drops that one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
}

impl DocumentMetadata {
    /// Build metadata from raw (possibly empty) form or CLI values.
    pub fn from_raw(
        title: Option<String>,
        author: Option<String>,
        subject: Option<String>,
        created: Option<String>,
        modified: Option<String>,
    ) -> Self {
        Self {
            title: non_empty(title),
            author: non_empty(author),
            subject: non_empty(subject),
            created: non_empty(created),
            modified: non_empty(modified),
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.created.is_none()
            && self.modified.is_none()
    }

    /// Use `fallback` as title when none was given.
    pub fn with_default_title(mut self, fallback: &str) -> Self {
        if self.title.is_none() && !fallback.is_empty() {
            self.title = Some(fallback.to_string());
        }
        self
    }

    /// Render the `DOCINFO` pdfmark, or `None` if nothing would be written.
    pub fn to_pdfmark(&self) -> Option<String> {
        let mut entries = Vec::new();

        let text_fields = [
            ("/Title", &self.title),
            ("/Author", &self.author),
            ("/Subject", &self.subject),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                entries.push(format!("{} {}", key, pdf_string(value)));
            }
        }

        let date_fields = [("/CreationDate", &self.created), ("/ModDate", &self.modified)];
        for (key, value) in date_fields {
            let Some(raw) = value else { continue };
            match format_pdf_date(raw) {
                Some(date) => entries.push(format!("{} ({})", key, date)),
                None => warn!(
                    "Ignoring invalid date for {}: '{}' (use YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS])",
                    key, raw
                ),
            }
        }

        if entries.is_empty() {
            return None;
        }

        Some(format!("[ {}\n  /DOCINFO pdfmark\n", entries.join("\n  ")))
    }
}

/// Convert a human date into the PDF date format `D:YYYYMMDDHHmmSS`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD HH:MM:SS`, with
/// either a space or `T` between date and time. Returns `None` for anything
/// else.
pub fn format_pdf_date(input: &str) -> Option<String> {
    let normalized = input.trim().replacen('T', " ", 1);
    if normalized.is_empty() {
        return None;
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(format!("D:{}", parsed.format("%Y%m%d%H%M%S")))
}

/// Encode text as a PostScript string literal.
///
/// ASCII text is written as `(...)` with `\`, `(` and `)` escaped. Anything
/// else becomes a UTF-16BE hex string with a byte order mark, which PDF
/// readers decode as Unicode.
fn pdf_string(value: &str) -> String {
    if value.is_ascii() && !value.chars().any(|c| c.is_ascii_control()) {
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push('(');
        for c in value.chars() {
            if matches!(c, '\\' | '(' | ')') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push(')');
        return escaped;
    }

    let mut hex = String::from("<FEFF");
    for unit in value.encode_utf16() {
        hex.push_str(&format!("{:04X}", unit));
    }
    hex.push('>');
    hex
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_pdf_date_variants() {
        assert_eq!(format_pdf_date("2024-03-05").as_deref(), Some("D:20240305000000"));
        assert_eq!(
            format_pdf_date("2024-03-05 14:30").as_deref(),
            Some("D:20240305143000")
        );
        assert_eq!(
            format_pdf_date("2024-03-05T14:30").as_deref(),
            Some("D:20240305143000")
        );
        assert_eq!(
            format_pdf_date("2024-03-05 14:30:15").as_deref(),
            Some("D:20240305143015")
        );
    }

    #[test]
    fn test_format_pdf_date_rejects_garbage() {
        assert_eq!(format_pdf_date(""), None);
        assert_eq!(format_pdf_date("05/03/2024"), None);
        assert_eq!(format_pdf_date("2024-13-01"), None);
    }

    #[test]
    fn test_pdf_string_escaping() {
        assert_eq!(pdf_string("Plain"), "(Plain)");
        assert_eq!(pdf_string("a (b) \\ c"), "(a \\(b\\) \\\\ c)");
        assert_eq!(pdf_string("été"), "<FEFF00E9007400E9>");
    }

    #[test]
    fn test_from_raw_drops_blank_values() {
        let meta = DocumentMetadata::from_raw(
            Some("  ".to_string()),
            Some("Ada".to_string()),
            None,
            Some(String::new()),
            None,
        );
        assert_eq!(meta.title, None);
        assert_eq!(meta.author.as_deref(), Some("Ada"));
        assert_eq!(meta.created, None);
    }

    #[test]
    fn test_default_title() {
        let meta = DocumentMetadata::default().with_default_title("report");
        assert_eq!(meta.title.as_deref(), Some("report"));

        let kept = DocumentMetadata {
            title: Some("Given".to_string()),
            ..Default::default()
        }
        .with_default_title("report");
        assert_eq!(kept.title.as_deref(), Some("Given"));
    }

    #[test]
    fn test_pdfmark_rendering() {
        let meta = DocumentMetadata {
            title: Some("Report".to_string()),
            author: Some("Ada".to_string()),
            created: Some("2024-01-02".to_string()),
            modified: Some("not a date".to_string()),
            ..Default::default()
        };
        assert_eq!(
            meta.to_pdfmark().unwrap(),
            "[ /Title (Report)\n  /Author (Ada)\n  /CreationDate (D:20240102000000)\n  /DOCINFO pdfmark\n"
        );
    }

    #[test]
    fn test_pdfmark_empty() {
        assert!(DocumentMetadata::default().is_empty());
        assert_eq!(DocumentMetadata::default().to_pdfmark(), None);

        let only_bad_date = DocumentMetadata {
            created: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(only_bad_date.to_pdfmark(), None);
    }
}
