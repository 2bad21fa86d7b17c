use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{BadIcon, Icon, WindowBuilder};

use crate::config::WindowConfig;

use super::rendering::Renderer;
use super::AppError;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to open icon {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode icon {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("icon {path} is not a valid window icon: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: BadIcon,
    },
}

/// The main OS window and its pixel surface.
pub struct Window {
    handle: Arc<winit::window::Window>,
    renderer: Renderer,
    title: String,
    width: u32,
    height: u32,
    clear_color: [f32; 4],
    should_close: bool,
}

impl Window {
    pub(crate) fn init(
        config: &WindowConfig,
        target: &EventLoopWindowTarget<()>,
    ) -> Result<Self, AppError> {
        let handle = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(
                config.width as f64,
                config.height as f64,
            ))
            .with_resizable(config.resizable)
            .with_maximized(config.maximize_on_start)
            .with_visible(false)
            .build(target)
            .map_err(AppError::CreateWindow)?;
        let handle = Arc::new(handle);

        // Surface first, then icon, then show.
        let renderer = Renderer::new(Arc::clone(&handle), config.vsync, config.clear_color)
            .map_err(AppError::CreateRenderer)?;
        if let Some(icon) = optional_window_icon(config.icon_path.as_deref()) {
            handle.set_window_icon(Some(icon));
        }
        handle.set_visible(true);

        let size = handle.inner_size();
        info!(
            title = config.title.as_str(),
            width = size.width,
            height = size.height,
            vsync = config.vsync,
            adapter = %renderer.adapter_summary(),
            "window_created"
        );

        Ok(Self {
            handle,
            renderer,
            title: config.title.clone(),
            width: size.width,
            height: size.height,
            clear_color: config.clear_color,
            should_close: false,
        })
    }

    /// Clears to the clear color and presents.
    pub fn update(&mut self) -> Result<(), pixels::Error> {
        self.renderer.render_clear()
    }

    /// Zero sizes are ignored; they are reported while minimized.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.renderer.resize(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.handle.set_title(&self.title);
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, clear_color: [f32; 4]) {
        self.clear_color = clear_color;
        self.renderer.set_clear_color(clear_color);
    }

    pub(crate) fn id(&self) -> winit::window::WindowId {
        self.handle.id()
    }

    pub(crate) fn inner_size(&self) -> (u32, u32) {
        let size = self.handle.inner_size();
        (size.width, size.height)
    }

    pub(crate) fn request_redraw(&self) {
        self.handle.request_redraw();
    }

    pub(crate) fn shutdown(&mut self) {
        self.handle.set_visible(false);
        info!(title = self.title.as_str(), "window_closed");
    }
}

/// A missing or broken icon is logged and skipped; the window opens without it.
fn optional_window_icon(path: Option<&Path>) -> Option<Icon> {
    let path = path?;
    match load_window_icon(path) {
        Ok(icon) => Some(icon),
        Err(error) => {
            warn!(error = %error, "window_icon_skipped");
            None
        }
    }
}

pub fn load_window_icon(path: &Path) -> Result<Icon, IconError> {
    let reader = ImageReader::open(path).map_err(|source| IconError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Icon::from_rgba(rgba.into_raw(), width, height).map_err(|source| IconError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn icon_loads_from_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("save png");

        assert!(load_window_icon(&path).is_ok());
    }

    #[test]
    fn missing_icon_is_open_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = load_window_icon(&dir.path().join("missing.png")).expect_err("missing");
        assert!(matches!(error, IconError::Open { .. }));
    }

    #[test]
    fn garbage_icon_is_decode_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").expect("write");

        let error = load_window_icon(&path).expect_err("garbage");
        assert!(matches!(error, IconError::Decode { .. }));
    }

    #[test]
    fn optional_icon_skips_unset_and_broken_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("icon.png");
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]))
            .save(&good)
            .expect("save png");

        assert!(optional_window_icon(None).is_none());
        assert!(optional_window_icon(Some(&dir.path().join("missing.png"))).is_none());
        assert!(optional_window_icon(Some(&good)).is_some());
    }
}
