use std::sync::Arc;

use pixels::{Error, Pixels, PixelsBuilder, SurfaceTexture};
use winit::window::Window;

/// Owns the pixel surface of a window. Every frame is a solid clear.
pub(crate) struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    vsync: bool,
    clear_rgba: [u8; 4],
}

impl Renderer {
    pub(crate) fn new(
        window: Arc<Window>,
        vsync: bool,
        clear_color: [f32; 4],
    ) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height, vsync)?;
        Ok(Self {
            window,
            pixels,
            width: size.width,
            height: size.height,
            vsync,
            clear_rgba: clear_color_to_rgba8(clear_color),
        })
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height, self.vsync)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub(crate) fn set_clear_color(&mut self, clear_color: [f32; 4]) {
        self.clear_rgba = clear_color_to_rgba8(clear_color);
    }

    pub(crate) fn adapter_summary(&self) -> String {
        let info = self.pixels.adapter().get_info();
        format!("{} ({:?})", info.name, info.backend)
    }

    pub(crate) fn render_clear(&mut self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let clear_rgba = self.clear_rgba;
        for chunk in self.pixels.frame_mut().chunks_exact_mut(4) {
            chunk.copy_from_slice(&clear_rgba);
        }
        self.pixels.render()
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        PixelsBuilder::new(width, height, surface)
            .enable_vsync(vsync)
            .build()
    }
}

/// Clamps each component to `0.0..=1.0` and scales to 8 bits.
pub fn clear_color_to_rgba8(color: [f32; 4]) -> [u8; 4] {
    color.map(|component| (component.clamp(0.0, 1.0) * 255.0).round() as u8)
}
