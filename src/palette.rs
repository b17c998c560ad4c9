/// Precomputed 256-entry color table blending the interior base color into
/// the escaped endpoint color. Built once at startup, never mutated.
///
/// Color is carried through the frame in the alpha channel only: every frame
/// pixel holds the fixed escaped color with intensity as alpha, and display
/// output composites that alpha over the base color via this table.
pub struct Palette {
    escaped: [u8; 3],
    composited: [u32; 256],
}

impl Palette {
    pub fn new(base: [u8; 3], escaped: [u8; 3]) -> Self {
        let mut composited = [0u32; 256];
        for (i, slot) in composited.iter_mut().enumerate() {
            let mut packed = 0u32;
            for channel in 0..3 {
                let blended = (base[channel] as u32 * (255 - i as u32)
                    + escaped[channel] as u32 * i as u32)
                    / 255;
                packed = (packed << 8) | blended;
            }
            *slot = packed;
        }
        Palette {
            escaped,
            composited,
        }
    }

    /// Frame pixel for an intensity level: fixed escaped color, alpha = intensity.
    pub fn rgba(&self, intensity: u8) -> [u8; 4] {
        [self.escaped[0], self.escaped[1], self.escaped[2], intensity]
    }

    /// Display pixel (0RGB) for an intensity level, composited over the base color.
    pub fn composite(&self, intensity: u8) -> u32 {
        self.composited[intensity as usize]
    }

    pub fn composite_rgb(&self, intensity: u8) -> [u8; 3] {
        let packed = self.composited[intensity as usize];
        [(packed >> 16) as u8, (packed >> 8) as u8, packed as u8]
    }
}

/// Intensity of a pixel that took `count` iterations to escape, as seen on
/// pass `pass`: floor(255 * (pass+1 - count) / (pass+1)), clamped to 0..=255.
/// Quick escapes render near 255 (the escaped endpoint); pixels that held on
/// until count == pass+1 render 0 (the interior endpoint).
pub fn intensity(pass: u16, count: u16) -> u8 {
    let total = pass as u32 + 1;
    let count = (count as u32).min(total);
    (255 * (total - count) / total) as u8
}
