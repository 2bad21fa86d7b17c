use std::time::Instant;

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::error::{EventLoopError, OsError};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::LoopConfig;

use super::clock::FrameClock;
use super::frame::{run_frame, WindowFrame};
use super::metrics::FrameMetrics;
use super::{InputManager, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCommand {
    Continue,
    Exit,
}

/// Game-side hooks driven by [`Application::run`].
pub trait Game {
    /// Called once after the window exists. Register input listeners here.
    fn init(&mut self, _input: &mut InputManager) {}

    /// Called once per frame with the seconds elapsed since the previous frame.
    fn update(&mut self, dt: f64, input: &InputManager, window: &mut Window) -> FrameCommand;

    fn shutdown(&mut self) {}
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("failed to resize surface: {0}")]
    Resize(#[source] PixelsError),
    #[error("failed to present frame: {0}")]
    Present(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub struct Application {
    config: LoopConfig,
}

impl Application {
    pub fn new(config: LoopConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs frames until it closes.
    pub fn run(self, mut game: Box<dyn Game>) -> Result<(), AppError> {
        let config = self.config;
        let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
        let mut window = Window::init(&config.window, &event_loop)?;
        let mut input = InputManager::new();
        game.init(&mut input);
        info!(
            listeners = input.dispatcher().listener_count(),
            max_frame_delta_ms = config.max_frame_delta.as_millis() as u64,
            metrics_log_interval_ms = config.metrics_log_interval.as_millis() as u64,
            "startup"
        );

        event_loop.set_control_flow(ControlFlow::Poll);

        let mut clock = FrameClock::new(config.max_frame_delta);
        let mut metrics = FrameMetrics::new(config.metrics_log_interval, Instant::now());
        let mut failure: Option<AppError> = None;

        event_loop
            .run(|event, window_target| match event {
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            info!(reason = "window_close", "shutdown_requested");
                            window.request_close();
                        }
                        WindowEvent::Resized(new_size) => {
                            if let Err(error) = window.resize(new_size.width, new_size.height) {
                                warn!(error = %error, "window_resize_failed");
                                failure = Some(AppError::Resize(error));
                                window_target.exit();
                            }
                        }
                        WindowEvent::ScaleFactorChanged { .. } => {
                            let (width, height) = window.inner_size();
                            if let Err(error) = window.resize(width, height) {
                                warn!(error = %error, "window_resize_failed");
                                failure = Some(AppError::Resize(error));
                                window_target.exit();
                            }
                        }
                        WindowEvent::ModifiersChanged(modifiers) => {
                            input.set_modifiers(modifiers.state());
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            input.handle_key(event.physical_key, event.state, event.repeat);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            input.handle_cursor_moved(position.x, position.y);
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            input.handle_mouse_button(button, state);
                        }
                        WindowEvent::MouseWheel { delta, .. } => {
                            input.handle_scroll(delta);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let mut target = WindowFrame {
                                game: &mut *game,
                                window: &mut window,
                            };
                            match run_frame(now, &mut clock, &mut input, &mut target) {
                                Ok(outcome) => {
                                    if outcome.command == FrameCommand::Exit {
                                        info!(reason = "game_exit", "shutdown_requested");
                                        window.request_close();
                                    }
                                    if let Some(elapsed) = outcome.elapsed {
                                        metrics.record_frame(elapsed);
                                    }
                                }
                                Err(error) => {
                                    warn!(error = %error, "frame_present_failed");
                                    failure = Some(AppError::Present(error));
                                    window_target.exit();
                                }
                            }

                            if let Some(stats) = metrics.maybe_snapshot(now) {
                                info!(
                                    fps = stats.fps,
                                    frame_time_ms = stats.frame_time_ms,
                                    "loop_metrics"
                                );
                            }
                            if window.should_close() {
                                window_target.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if window.should_close() {
                        window_target.exit();
                    } else {
                        window.request_redraw();
                    }
                }
                Event::LoopExiting => {
                    debug!("loop_exiting");
                    game.shutdown();
                    window.shutdown();
                    info!("shutdown");
                }
                _ => {}
            })
            .map_err(AppError::EventLoopRun)?;

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
