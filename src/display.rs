use std::sync::{Arc, Mutex};
use std::thread;

use log::warn;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::RenderConfig;
use crate::controller::ZoomEvent;
use crate::palette::Palette;
use crate::session::RenderSession;

/// Events forwarded from the window thread to the main loop.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    Zoom(ZoomEvent),
    Snapshot,
    Closed,
}

/// Spawns the window thread: blits the shared frame at a fixed FPS,
/// compositing alpha over the base color, and translates scroll/keyboard
/// input into events for the controller. The thread owns the minifb window
/// for its whole lifetime; everything else is read through the session lock.
pub fn spawn_display(
    session: Arc<Mutex<RenderSession>>,
    palette: Arc<Palette>,
    config: RenderConfig,
    events: UnboundedSender<InputEvent>,
) {
    thread::spawn(move || {
        let mut window = match Window::new(
            "mandelzoom",
            config.width,
            config.height,
            WindowOptions::default(),
        ) {
            Ok(window) => window,
            Err(e) => {
                warn!("could not open a window: {e}");
                let _ = events.send(InputEvent::Closed);
                return;
            }
        };
        window.set_target_fps(30);

        let mut buffer: Vec<u32> = vec![0; config.width * config.height];
        let mut scroll_active = false;
        let mut title = String::new();

        while window.is_open() && !window.is_key_down(Key::Escape) {
            if window.is_key_pressed(Key::S, KeyRepeat::No) {
                let _ = events.send(InputEvent::Snapshot);
            }

            // MouseMode::Pass keeps out-of-window coordinates; the controller
            // is the one that decides an off-canvas zoom is a no-op.
            if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Pass) {
                if let Some(dy) = gesture_delta(window.get_scroll_wheel(), &mut scroll_active) {
                    // minifb reports wheel-up as positive; DOM-style
                    // deltaY (negative = zoom in) is the inverse.
                    let _ = events.send(InputEvent::Zoom(ZoomEvent {
                        pointer_x: mx,
                        pointer_y: my,
                        delta_y: -dy,
                    }));
                }
            }

            let (center_re, center_im, magnification) = {
                let session = session.lock().unwrap();
                session.frame.composite_into(&palette, &mut buffer);
                let vp = session.viewport;
                (
                    (vp.x_min + vp.x_max) / 2.0,
                    (vp.y_min + vp.y_max) / 2.0,
                    (config.x_max_max - config.x_min_min) / vp.span_x(),
                )
            };

            let next_title = format!(
                "mandelzoom  ({center_re:.6}, {center_im:.6}i)  x{magnification:.0}"
            );
            if next_title != title {
                window.set_title(&next_title);
                title = next_title;
            }

            window
                .update_with_buffer(&buffer, config.width, config.height)
                .unwrap();
        }

        let _ = events.send(InputEvent::Closed);
    });
}

/// One zoom per scroll gesture: the vertical delta is forwarded on the first
/// frame the wheel reports movement, then the gesture is considered held
/// until the wheel goes quiet for a frame, which rearms it. The delta value
/// itself is not compared, so back-to-back gestures with identical deltas
/// each fire.
fn gesture_delta(scroll: Option<(f32, f32)>, active: &mut bool) -> Option<f32> {
    match scroll {
        Some((_, dy)) if !*active && dy != 0.0 => {
            *active = true;
            Some(dy)
        }
        Some(_) => None,
        None => {
            *active = false;
            None
        }
    }
}
