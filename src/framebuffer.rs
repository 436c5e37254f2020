/// Software render target: packed 0xAABBGGRR pixels, row-major with
/// **row 0 at the bottom**. Presentation owns the vertical flip; nothing in
/// here talks to the display API.
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "framebuffer: pixel_at({x},{y}) out of range"
        );
        self.pixels[y * self.width + x]
    }

    /// Fill rows [y0, y1) of column x. Ranges are clamped, empty spans are
    /// a no-op.
    pub fn fill_column(&mut self, x: usize, y0: usize, y1: usize, color: u32) {
        if x >= self.width {
            return;
        }
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}
