use crate::config::RenderConfig;
use crate::frame::FrameBuffer;
use crate::grid::PixelGrid;
use crate::palette::Palette;
use crate::viewport::Viewport;

/// Everything the engine and the zoom controller share, owned in one place
/// and passed around behind `Arc<Mutex<RenderSession>>`.
///
/// Mutation happens in whole units only: one full pass under the lock, or
/// one full zoom under the lock. The generation counter is the cancellation
/// token for in-flight pass loops; every zoom event bumps it, and a loop
/// that captured an older value exits silently at its next pass boundary.
pub struct RenderSession {
    pub viewport: Viewport,
    pub grid: PixelGrid,
    pub frame: FrameBuffer,
    pub generation: u64,
}

impl RenderSession {
    pub fn new(config: &RenderConfig, palette: &Palette) -> Self {
        RenderSession {
            viewport: Viewport::full(config),
            grid: PixelGrid::new(config.width, config.height),
            frame: FrameBuffer::new(config.width, config.height, palette),
            generation: 0,
        }
    }
}
