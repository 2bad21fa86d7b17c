pub mod app;
pub mod config;
pub mod math;

pub use app::{
    clear_color_to_rgba8, load_window_icon, AppError, Application, EventDispatcher, FrameClock,
    FrameCommand, FrameStats, Game, IconError, InputManager, KeyAction, KeyEvent, ListenerId,
    MouseButtonEvent, MouseMoveEvent, MouseScrollEvent, Window,
};
pub use config::{
    load_config, load_config_file, ConfigError, LoopConfig, WindowConfig, CONFIG_ENV_VAR,
};
pub use math::Vec2;

/// Input identifiers used by the engine's public API.
pub mod keys {
    pub use winit::event::{ElementState, MouseButton, MouseScrollDelta};
    pub use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
}
