use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};

use crate::config::RenderConfig;
use crate::engine;
use crate::palette::Palette;
use crate::session::RenderSession;
use crate::viewport::Viewport;

/// A zoom gesture from the pointer collaborator: pixel position of the
/// pointer plus the wheel delta. Only the sign of `delta_y` matters:
/// negative zooms in on the pointer, positive resets to the full extent.
#[derive(Clone, Copy, Debug)]
pub struct ZoomEvent {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub delta_y: f32,
}

/// Applies a zoom event: computes the new viewport, invalidates all
/// iteration state, seeds the preview image, bumps the generation (which
/// cancels any in-flight pass loop at its next pass boundary) and relaunches
/// the engine. A pointer outside the canvas is ignored outright.
pub fn handle_zoom(
    session: &Arc<Mutex<RenderSession>>,
    palette: &Arc<Palette>,
    config: &RenderConfig,
    event: ZoomEvent,
) {
    let px = event.pointer_x as f64;
    let py = event.pointer_y as f64;

    let generation = {
        let mut session = session.lock().unwrap();
        let (width, height) = (session.grid.width, session.grid.height);
        if px < 0.0 || px > width as f64 || py < 0.0 || py > height as f64 {
            debug!("zoom at ({px:.0}, {py:.0}) is off-canvas, ignoring");
            return;
        }

        if event.delta_y < 0.0 {
            zoom_in(&mut session, config, px, py);
        } else {
            // Zoom-out is always a full reset to the outer extent.
            session.viewport = Viewport::full(config);
            session.frame.clear(palette);
            info!("zoom out, viewport reset to the outer extent");
        }

        session.grid.reset();
        session.generation += 1;
        session.generation
    };

    engine::spawn_render_loop(
        Arc::clone(session),
        Arc::clone(palette),
        config.max_iterations,
        Duration::from_millis(config.pass_delay_ms),
        generation,
    );
}

fn zoom_in(session: &mut RenderSession, config: &RenderConfig, px: f64, py: f64) {
    let (width, height) = (session.grid.width, session.grid.height);
    let old = session.viewport;
    let (epi_re, epi_im) = old.point_at(px, py, width, height);
    let zoomed = old.zoomed_in(
        epi_re,
        epi_im,
        config.zoom_factor as f64,
        &Viewport::full(config),
    );

    // Seed the frame with a magnified crop of the previous image so the zoom
    // is visible immediately; exact values replace it pass by pass.
    let offset_x = ((zoomed.x_min - old.x_min) / old.span_x() * width as f64) as usize;
    let offset_y = ((old.y_max - zoomed.y_max) / old.span_y() * height as f64) as usize;
    session.frame.zoom_preview(
        offset_x.min(width - width / config.zoom_factor),
        offset_y.min(height - height / config.zoom_factor),
        config.zoom_factor,
    );

    session.viewport = zoomed;
    info!(
        "zoom in at ({epi_re:.6}, {epi_im:.6}i), viewport now {:.6}..{:.6} x {:.6}..{:.6}",
        zoomed.x_min, zoomed.x_max, zoomed.y_min, zoomed.y_max
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Arc<Mutex<RenderSession>>, Arc<Palette>, RenderConfig) {
        let config = RenderConfig {
            width: 16,
            height: 16,
            max_iterations: 4,
            pass_delay_ms: 1,
            ..RenderConfig::default()
        };
        let palette = Arc::new(Palette::new(config.base_color, config.escaped_color));
        let session = Arc::new(Mutex::new(RenderSession::new(&config, &palette)));
        (session, palette, config)
    }

    fn zoom_in_event() -> ZoomEvent {
        ZoomEvent {
            pointer_x: 8.0,
            pointer_y: 8.0,
            delta_y: -1.0,
        }
    }

    #[tokio::test]
    async fn each_zoom_bumps_the_generation() {
        let (session, palette, config) = setup();
        for expected in 1..=5 {
            handle_zoom(&session, &palette, &config, zoom_in_event());
            assert_eq!(session.lock().unwrap().generation, expected);
        }
    }

    #[tokio::test]
    async fn zoom_in_shrinks_the_viewport_by_the_factor() {
        let (session, palette, config) = setup();
        let before = session.lock().unwrap().viewport;
        handle_zoom(&session, &palette, &config, zoom_in_event());
        let after = session.lock().unwrap().viewport;
        let factor = config.zoom_factor as f64;
        assert!((after.span_x() - before.span_x() / factor).abs() < 1e-12);
        assert!((after.span_y() - before.span_y() / factor).abs() < 1e-12);
    }

    #[tokio::test]
    async fn zoom_resets_iteration_state() {
        let (session, palette, config) = setup();
        {
            let mut s = session.lock().unwrap();
            for cell in &mut s.grid.cells {
                cell.advance(10.0, 0.0, false);
            }
        }
        handle_zoom(&session, &palette, &config, zoom_in_event());
        let s = session.lock().unwrap();
        assert!(s.grid.cells.iter().all(|c| c.count == 0 && !c.escaped));
    }

    #[tokio::test]
    async fn zoom_out_restores_the_full_extent() {
        let (session, palette, config) = setup();
        handle_zoom(&session, &palette, &config, zoom_in_event());
        handle_zoom(&session, &palette, &config, zoom_in_event());
        let zoom_out = ZoomEvent {
            pointer_x: 8.0,
            pointer_y: 8.0,
            delta_y: 1.0,
        };
        handle_zoom(&session, &palette, &config, zoom_out);
        let s = session.lock().unwrap();
        assert_eq!(s.viewport, Viewport::full(&config));
    }

    #[tokio::test]
    async fn off_canvas_pointer_is_a_no_op() {
        let (session, palette, config) = setup();
        let off = ZoomEvent {
            pointer_x: -3.0,
            pointer_y: 8.0,
            delta_y: -1.0,
        };
        handle_zoom(&session, &palette, &config, off);
        let s = session.lock().unwrap();
        assert_eq!(s.generation, 0);
        assert_eq!(s.viewport, Viewport::full(&config));
    }

    #[tokio::test]
    async fn zoom_in_seeds_a_magnified_preview() {
        let (session, palette, config) = setup();
        {
            // Paint the whole frame; every preview pixel comes from it.
            let mut s = session.lock().unwrap();
            let rgba = palette.rgba(200);
            for y in 0..16 {
                for x in 0..16 {
                    s.frame.set(x, y, rgba);
                }
            }
        }
        handle_zoom(&session, &palette, &config, zoom_in_event());
        let s = session.lock().unwrap();
        // grid reset but the preview survives in the frame
        assert!(s.grid.cells.iter().all(|c| c.count == 0));
        assert_eq!(s.frame.intensity_at(0, 0), 200);
        assert_eq!(s.frame.intensity_at(15, 15), 200);
    }
}
