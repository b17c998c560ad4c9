pub mod config;
pub mod controller;
pub mod display;
pub mod engine;
pub mod frame;
pub mod grid;
pub mod palette;
pub mod session;
pub mod snapshot;
pub mod viewport;

pub use config::RenderConfig;
pub use controller::{handle_zoom, ZoomEvent};
pub use display::{spawn_display, InputEvent};
pub use engine::{run_pass, spawn_render_loop};
pub use frame::FrameBuffer;
pub use grid::{PixelGrid, PixelState};
pub use palette::{intensity, Palette};
pub use session::RenderSession;
pub use snapshot::save_frame;
pub use viewport::Viewport;
