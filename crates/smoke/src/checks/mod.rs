#[cfg(feature = "audio")]
mod audio;
mod image_decode;
mod math;
mod physics;
mod ui;
mod window;

#[cfg(feature = "audio")]
pub use audio::{open_default_output, AudioReport};
pub use image_decode::{decode_image, ImageLoad};
pub use math::{run_math_check, MathReport};
pub use physics::{build_ground_world, PhysicsReport};
pub use ui::{run_ui_frame, UiReport};
pub(crate) use window::open_window;
