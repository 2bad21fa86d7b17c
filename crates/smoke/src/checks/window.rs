use std::io::Write;
use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use tracing::info;
use winit::dpi::LogicalSize;
use winit::event::Event;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

/// Opens a hidden window, optionally attaches a pixel surface, then lets the
/// event loop run until its first idle point.
pub(crate) fn open_window<W: Write>(with_surface: bool, stdout: &mut W) -> Result<(), String> {
    let event_loop =
        EventLoop::new().map_err(|error| format!("failed to create event loop: {error}"))?;
    let window = WindowBuilder::new()
        .with_title("Smoke Window")
        .with_inner_size(LogicalSize::new(100.0, 100.0))
        .with_visible(false)
        .build(&event_loop)
        .map_err(|error| format!("failed to create window: {error}"))?;
    let window = Arc::new(window);
    let size = window.inner_size();
    writeln!(stdout, "window created ({}x{})", size.width, size.height)
        .map_err(|error| error.to_string())?;

    let pixels = if with_surface {
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface = SurfaceTexture::new(width, height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface)
            .map_err(|error| format!("failed to create pixel surface: {error}"))?;
        let adapter = pixels.adapter().get_info();
        info!(adapter = adapter.name.as_str(), backend = ?adapter.backend, "surface_created");
        writeln!(
            stdout,
            "surface created on {} ({:?})",
            adapter.name, adapter.backend
        )
        .map_err(|error| error.to_string())?;
        Some(pixels)
    } else {
        None
    };

    event_loop
        .run(|event, window_target| {
            if let Event::AboutToWait = event {
                window_target.exit();
            }
        })
        .map_err(|error| format!("event loop failed: {error}"))?;

    drop(pixels);
    drop(window);
    writeln!(stdout, "window destroyed").map_err(|error| error.to_string())
}
