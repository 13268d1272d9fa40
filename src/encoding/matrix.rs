use qirust::qrcode::QrCode;

/// Owned copy of a QR symbol's module grid.
///
/// `QrCode` borrows the encoder's scratch buffers, so the modules are copied
/// out once and the renderers work from this snapshot instead.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    size: i32,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn from_symbol(qr: &QrCode) -> Self {
        let size = qr.size();
        let mut modules = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                modules.push(qr.get_module(x, y));
            }
        }
        Self { size, modules }
    }

    /// Symbol side length in modules, border excluded.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Module at (x, y); coordinates outside the symbol read as light.
    pub fn module(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return false;
        }
        self.modules[(y * self.size + x) as usize]
    }
}
