mod renderer;

pub use renderer::clear_color_to_rgba8;
pub(crate) use renderer::Renderer;
