use crate::encoding::matrix::QrMatrix;

/// Renders the module grid as an EPS document, one PostScript unit per
/// module. Dark modules become horizontal-run `rectfill`s, y flipped to
/// PostScript's bottom-left origin.
pub fn render_eps(matrix: &QrMatrix, border: i32) -> Vec<u8> {
    let dimension = matrix.size() + border * 2;
    let mut doc = String::new();
    doc.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    doc.push_str(&format!("%%BoundingBox: 0 0 {} {}\n", dimension, dimension));
    doc.push_str("%%EndComments\n");
    doc.push_str("0 setgray\n");
    for y in 0..matrix.size() {
        let mut x = 0;
        while x < matrix.size() {
            if !matrix.module(x, y) {
                x += 1;
                continue;
            }
            let run_start = x;
            while x < matrix.size() && matrix.module(x, y) {
                x += 1;
            }
            let ps_x = run_start + border;
            let ps_y = dimension - 1 - (y + border);
            doc.push_str(&format!("{} {} {} 1 rectfill\n", ps_x, ps_y, x - run_start));
        }
    }
    doc.push_str("%%EOF\n");
    doc.into_bytes()
}
