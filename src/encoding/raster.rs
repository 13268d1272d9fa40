use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Luma};

use crate::encoding::matrix::QrMatrix;
use crate::error_handling::types::EncodeError;

/// Rasterizes the module grid into PNG bytes, `scale` pixels per module,
/// `border` light modules on every side.
pub fn render_png(matrix: &QrMatrix, border: i32, scale: u32) -> Result<Vec<u8>, EncodeError> {
    let side = (matrix.size() + border * 2) as u32 * scale;
    let image = ImageBuffer::from_fn(side, side, |px, py| {
        let x = (px / scale) as i32 - border;
        let y = (py / scale) as i32 - border;
        if matrix.module(x, y) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| EncodeError::RenderFailed(e.to_string()))?;
    Ok(bytes)
}
