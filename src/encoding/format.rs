use std::fmt;

/// Output formats every generation request is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QrFormat {
    Png,
    Svg,
    Eps,
    Pdf,
}

/// Format of the inline preview image. Rendered for every request and
/// returned as a data URI, never written to the store.
pub const PREVIEW_FORMAT: QrFormat = QrFormat::Png;

impl QrFormat {
    /// Every format a request fans out to, in response order.
    pub const ALL: [QrFormat; 4] = [QrFormat::Png, QrFormat::Svg, QrFormat::Eps, QrFormat::Pdf];

    pub fn extension(self) -> &'static str {
        match self {
            QrFormat::Png => "png",
            QrFormat::Svg => "svg",
            QrFormat::Eps => "eps",
            QrFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            QrFormat::Png => "image/png",
            QrFormat::Svg => "image/svg+xml",
            QrFormat::Eps => "application/postscript",
            QrFormat::Pdf => "application/pdf",
        }
    }

    /// Maps a file extension back to its format. Artifact ids embed the
    /// extension, so this is how stored files recover their format.
    pub fn from_extension(ext: &str) -> Option<QrFormat> {
        match ext {
            "png" => Some(QrFormat::Png),
            "svg" => Some(QrFormat::Svg),
            "eps" => Some(QrFormat::Eps),
            "pdf" => Some(QrFormat::Pdf),
            _ => None,
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats_have_distinct_extensions() {
        let extensions: Vec<_> = QrFormat::ALL.iter().map(|f| f.extension()).collect();
        assert_eq!(extensions, vec!["png", "svg", "eps", "pdf"]);
    }

    #[test]
    fn test_extension_roundtrip() {
        for format in QrFormat::ALL {
            assert_eq!(QrFormat::from_extension(format.extension()), Some(format));
        }
        assert_eq!(QrFormat::from_extension("txt"), None);
        assert_eq!(QrFormat::from_extension(""), None);
    }

    #[test]
    fn test_display_matches_extension() {
        assert_eq!(QrFormat::Eps.to_string(), "eps");
        assert_eq!(format!("{}", QrFormat::Png), "png");
    }
}
