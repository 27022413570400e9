//! Compression levels and their Ghostscript presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CompressError;

/// Ghostscript `PDFSETTINGS` preset, ordered from least to most aggressive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CompressionLevel {
    /// Level 0: `/default`.
    Default,
    /// Level 1: `/prepress`, high quality.
    Prepress,
    /// Level 2: `/printer`, the default.
    #[default]
    Printer,
    /// Level 3: `/ebook`, medium quality.
    Ebook,
    /// Level 4: `/screen`, smallest output.
    Screen,
}

impl CompressionLevel {
    /// All levels, indexed by their numeric value.
    pub const ALL: [CompressionLevel; 5] = [
        Self::Default,
        Self::Prepress,
        Self::Printer,
        Self::Ebook,
        Self::Screen,
    ];

    /// Numeric level as used on the command line and in the web form.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The `-dPDFSETTINGS` value for this level.
    pub fn pdf_settings(self) -> &'static str {
        match self {
            Self::Default => "/default",
            Self::Prepress => "/prepress",
            Self::Printer => "/printer",
            Self::Ebook => "/ebook",
            Self::Screen => "/screen",
        }
    }

    /// Short human-readable description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Prepress => "Prepress (high quality)",
            Self::Printer => "Printer (balanced)",
            Self::Ebook => "Ebook (medium quality)",
            Self::Screen => "Screen (smallest file)",
        }
    }

    /// Parse a form value, falling back to the default level.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl TryFrom<u8> for CompressionLevel {
    type Error = CompressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CompressError::invalid_level(value.to_string()))
    }
}

impl From<CompressionLevel> for u8 {
    fn from(level: CompressionLevel) -> Self {
        level.value()
    }
}

impl FromStr for CompressionLevel {
    type Err = CompressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| CompressError::invalid_level(s))?;
        Self::try_from(value)
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.pdf_settings())
    }
}
