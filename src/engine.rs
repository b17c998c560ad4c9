use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;

use crate::palette::{intensity, Palette};
use crate::session::RenderSession;

/// Launches the escape-time loop for one generation: one full pass per tick
/// until the iteration budget is exhausted or a newer zoom supersedes it.
///
/// Each pass runs synchronously under the session lock, so a zoom handler
/// can only ever observe whole-pass states; the sleep between passes is the
/// sole suspension point and the only place a zoom gets serviced.
pub fn spawn_render_loop(
    session: Arc<Mutex<RenderSession>>,
    palette: Arc<Palette>,
    budget: u16,
    delay: Duration,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for pass in 0..budget {
            {
                let mut session = session.lock().unwrap();
                if session.generation != generation {
                    debug!("pass loop for generation {generation} superseded, exiting");
                    return;
                }
                run_pass(&mut session, &palette, pass, budget);
            }
            if pass + 1 < budget {
                tokio::time::sleep(delay).await;
            }
        }
        debug!("pass loop for generation {generation} exhausted its budget of {budget}");
    })
}

/// One full sweep over every pixel in row-major order.
///
/// Unescaped pixels advance one escape-time step; on the final pass of the
/// budget they are forced to escape so no pixel outlives the budget. Every
/// escaped pixel, new or old, is recolored from its frozen count with the
/// pass-relative intensity rule, so settled pixels stay visually consistent
/// with each other as the pass index in the denominator grows. Pixels still
/// iterating keep their displayed value (possibly a zoom preview) untouched.
pub fn run_pass(session: &mut RenderSession, palette: &Palette, pass: u16, budget: u16) {
    let RenderSession {
        viewport,
        grid,
        frame,
        ..
    } = session;
    let (width, height) = (grid.width, grid.height);
    let final_pass = pass + 1 == budget;

    for y in 0..height {
        for x in 0..width {
            let cell = &mut grid.cells[y * width + x];
            if !cell.escaped {
                let (c_re, c_im) = viewport.point_at(x as f64, y as f64, width, height);
                cell.advance(c_re, c_im, final_pass);
                if !cell.escaped {
                    continue;
                }
            }
            frame.set(x, y, palette.rgba(intensity(pass, cell.count)));
        }
    }
}
