/// Escape-time state for one pixel.
///
/// The iterate z is never stored directly. Instead the three accumulators
/// hold re(z)^2, im(z)^2 and (re(z)+im(z))^2, which is enough to build the
/// next iterate: the cross term 2*re*im equals sum_sq - re_sq - im_sq, so a
/// step costs three multiplies instead of a full complex multiplication.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelState {
    pub re_sq: f64,
    pub im_sq: f64,
    pub sum_sq: f64,
    pub count: u16,
    pub escaped: bool,
}

impl PixelState {
    /// One escape-time step against the point c. Marks the pixel escaped when
    /// the magnitude test fails or `force_escape` is set (final pass of the
    /// budget); an escaped pixel's accumulators and count stop advancing.
    pub fn advance(&mut self, c_re: f64, c_im: f64, force_escape: bool) {
        if self.escaped {
            return;
        }
        self.count += 1;
        if self.re_sq + self.im_sq > 4.0 || force_escape {
            self.escaped = true;
            return;
        }
        let re_next = self.re_sq - self.im_sq + c_re;
        let im_next = self.sum_sq - self.re_sq - self.im_sq + c_im;
        self.re_sq = re_next * re_next;
        self.im_sq = im_next * im_next;
        self.sum_sq = (re_next + im_next) * (re_next + im_next);
    }
}

/// Row-major grid of per-pixel iteration state, sized once per canvas.
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<PixelState>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        PixelGrid {
            width,
            height,
            cells: vec![PixelState::default(); width * height],
        }
    }

    /// Back to the fresh, unescaped baseline. Runs on every zoom event.
    pub fn reset(&mut self) {
        self.cells.fill(PixelState::default());
    }
}
