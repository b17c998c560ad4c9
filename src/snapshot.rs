use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageBuffer, Rgb};

use crate::palette::Palette;
use crate::session::RenderSession;

/// Writes the currently displayed image (frame composited over the base
/// color) to a timestamped PNG in the working directory.
pub fn save_frame(
    session: &Arc<Mutex<RenderSession>>,
    palette: &Palette,
) -> Result<String, Box<dyn Error>> {
    let (width, height, pixels) = {
        let session = session.lock().unwrap();
        let frame = &session.frame;
        let mut pixels = Vec::with_capacity(3 * frame.width * frame.height);
        for pixel in frame.bytes.chunks_exact(4) {
            pixels.extend_from_slice(&palette.composite_rgb(pixel[3]));
        }
        (frame.width as u32, frame.height as u32, pixels)
    };

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, pixels).ok_or("frame buffer size mismatch")?;
    let stamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let path = format!("mandelzoom-{stamp}.png");
    img.save(&path)?;
    Ok(path)
}
