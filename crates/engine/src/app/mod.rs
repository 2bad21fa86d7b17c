mod clock;
mod events;
mod frame;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod window;

pub use clock::FrameClock;
pub use events::{
    EventDispatcher, KeyAction, KeyEvent, ListenerId, MouseButtonEvent, MouseMoveEvent,
    MouseScrollEvent,
};
pub use input::InputManager;
pub use loop_runner::{AppError, Application, FrameCommand, Game};
pub use metrics::FrameStats;
pub use rendering::clear_color_to_rgba8;
pub use window::{load_window_icon, IconError, Window};
