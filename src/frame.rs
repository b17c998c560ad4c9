use crate::palette::Palette;

/// The published image: row-major RGBA bytes, 4 per pixel, refreshed in
/// place after every pass and read by the display thread at its own cadence.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub bytes: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, palette: &Palette) -> Self {
        let mut frame = FrameBuffer {
            width,
            height,
            bytes: vec![0; 4 * width * height],
        };
        frame.clear(palette);
        frame
    }

    /// Every pixel back to intensity zero, the pure base color.
    pub fn clear(&mut self, palette: &Palette) {
        let rgba = palette.rgba(0);
        for pixel in self.bytes.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    pub fn set(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let index = 4 * (y * self.width + x);
        self.bytes[index..index + 4].copy_from_slice(&rgba);
    }

    pub fn intensity_at(&self, x: usize, y: usize) -> u8 {
        self.bytes[4 * (y * self.width + x) + 3]
    }

    /// Nearest-neighbor magnification in place: the width/factor by
    /// height/factor block of pixels starting at (offset_x, offset_y) is
    /// blown up so each source pixel fills a factor x factor block. Seeds an
    /// instant zoomed preview while recomputation catches up; touches only
    /// displayed values, never iteration state.
    pub fn zoom_preview(&mut self, offset_x: usize, offset_y: usize, factor: usize) {
        let source = self.bytes.clone();
        let block_w = self.width / factor;
        let block_h = self.height / factor;
        for sy in 0..block_h {
            for sx in 0..block_w {
                let s = 4 * ((offset_y + sy) * self.width + (offset_x + sx));
                for dy in 0..factor {
                    let row = sy * factor + dy;
                    for dx in 0..factor {
                        let d = 4 * (row * self.width + sx * factor + dx);
                        self.bytes[d..d + 4].copy_from_slice(&source[s..s + 4]);
                    }
                }
            }
        }
    }

    /// Composite the frame over the base color into a 0RGB display buffer.
    pub fn composite_into(&self, palette: &Palette, out: &mut [u32]) {
        for (slot, pixel) in out.iter_mut().zip(self.bytes.chunks_exact(4)) {
            *slot = palette.composite(pixel[3]);
        }
    }
}
