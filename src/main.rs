use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{error, info};

use mandelzoom::{
    controller, display, engine, snapshot, InputEvent, Palette, RenderConfig, RenderSession,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(&path)?,
        None => RenderConfig::default(),
    };

    let palette = Arc::new(Palette::new(config.base_color, config.escaped_color));
    let session = Arc::new(Mutex::new(RenderSession::new(&config, &palette)));

    let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel();
    display::spawn_display(
        Arc::clone(&session),
        Arc::clone(&palette),
        config,
        events_tx,
    );

    // Generation 0: render the full outer extent.
    engine::spawn_render_loop(
        Arc::clone(&session),
        Arc::clone(&palette),
        config.max_iterations,
        Duration::from_millis(config.pass_delay_ms),
        0,
    );

    while let Some(event) = events_rx.recv().await {
        match event {
            InputEvent::Zoom(zoom) => controller::handle_zoom(&session, &palette, &config, zoom),
            InputEvent::Snapshot => match snapshot::save_frame(&session, &palette) {
                Ok(path) => info!("saved snapshot to {path}"),
                Err(e) => error!("snapshot failed: {e}"),
            },
            InputEvent::Closed => break,
        }
    }

    Ok(())
}
