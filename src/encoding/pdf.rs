use crate::encoding::matrix::QrMatrix;

/// Page points per module. Keeps the single page at a printable size
/// without touching the run coordinates, which stay in module units under
/// a content-stream scale transform.
const POINTS_PER_MODULE: i32 = 4;

/// Renders the module grid as a single-page PDF assembled by hand: catalog,
/// page tree, page and content stream objects plus a cross-reference table
/// with exact byte offsets. Dark modules become horizontal-run `re`/`f`
/// fills, y flipped to PDF's bottom-left origin.
pub fn render_pdf(matrix: &QrMatrix, border: i32) -> Vec<u8> {
    let dimension = matrix.size() + border * 2;
    let page_side = dimension * POINTS_PER_MODULE;

    let mut content = String::new();
    content.push_str(&format!("{0} 0 0 {0} 0 0 cm\n", POINTS_PER_MODULE));
    content.push_str("0 g\n");
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
            let px = run_start + border;
            let py = dimension - 1 - (y + border);
            content.push_str(&format!("{} {} {} 1 re f\n", px, py, x - run_start));
        }
    }

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {0} {0}] /Contents 4 0 R >>",
            page_side
        ),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];

    let mut doc = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(doc.len());
        doc.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
    }
    let xref_offset = doc.len();
    doc.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    // free-list head, then one 20-byte entry per object
    doc.push_str("0000000000 65535 f \n");
    for offset in offsets {
        doc.push_str(&format!("{:010} 00000 n \n", offset));
    }
    doc.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    doc.into_bytes()
}
