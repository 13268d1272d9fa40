use log::debug;
use qirust::helper;
use qirust::qrcode::{EncodeTextOptions, QrCode, QrCodeEcc, Version};

use crate::encoding::encoder_trait::Encoder;
use crate::encoding::format::QrFormat;
use crate::encoding::matrix::QrMatrix;
use crate::encoding::{pdf, postscript, raster};
use crate::error_handling::types::EncodeError;

/// QR encoder backed by the `qirust` symbol generator.
///
/// Holds only render settings, so one instance is shared freely across
/// concurrent encode calls. Version and mask selection are left to the
/// generator (smallest fitting version, automatic mask).
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    ecc: QrCodeEcc,
    border: i32,
    scale: u32,
}

impl QrEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            ecc: QrCodeEcc::Medium,
            border: 4,
            scale: 8,
        }
    }
}

impl Encoder for QrEncoder {
    fn encode(&self, text: &str, format: QrFormat) -> Result<Vec<u8>, EncodeError> {
        let mut outbuffer = vec![0u8; Version::MAX.buffer_len()];
        let mut tempbuffer = vec![0u8; Version::MAX.buffer_len()];
        let qr = QrCode::encode_text(
            text,
            &mut tempbuffer,
            &mut outbuffer,
            EncodeTextOptions {
                ecl: self.ecc,
                minversion: Version::MIN,
                maxversion: Version::MAX,
                mask: None,
                boostecl: true,
            },
        )
        .map_err(|e| EncodeError::DataTooLong(e.to_string()))?;

        let bytes = match format {
            QrFormat::Png => {
                raster::render_png(&QrMatrix::from_symbol(&qr), self.border, self.scale)?
            }
            QrFormat::Svg => helper::to_svg_string(&qr, self.border).into_bytes(),
            QrFormat::Eps => postscript::render_eps(&QrMatrix::from_symbol(&qr), self.border),
            QrFormat::Pdf => pdf::render_pdf(&QrMatrix::from_symbol(&qr), self.border),
        };
        debug!(
            "Rendered {}x{} symbol as {} ({} byte(s))",
            qr.size(),
            qr.size(),
            format,
            bytes.len()
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_png_output_has_magic() {
        let encoder = QrEncoder::new();
        let bytes = encoder.encode("https://example.com", QrFormat::Png).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_svg_output_is_xml() {
        let encoder = QrEncoder::new();
        let bytes = encoder.encode("https://example.com", QrFormat::Svg).unwrap();
        assert!(bytes.starts_with(b"<?xml"));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("<svg"));
    }

    #[test]
    fn test_eps_output_has_header() {
        let encoder = QrEncoder::new();
        let bytes = encoder.encode("https://example.com", QrFormat::Eps).unwrap();
        assert!(bytes.starts_with(b"%!PS-Adobe-3.0 EPSF-3.0"));
    }

    #[test]
    fn test_pdf_output_has_header() {
        let encoder = QrEncoder::new();
        let bytes = encoder.encode("https://example.com", QrFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let encoder = QrEncoder::new();
        let text = "a".repeat(5000);
        let err = encoder.encode(&text, QrFormat::Png).unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong(_)));
    }

    #[test]
    fn test_same_input_same_format_is_deterministic() {
        let encoder = QrEncoder::new();
        let first = encoder.encode("https://example.com", QrFormat::Svg).unwrap();
        let second = encoder.encode("https://example.com", QrFormat::Svg).unwrap();
        assert_eq!(first, second);
    }
}
