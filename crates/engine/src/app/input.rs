use std::collections::HashMap;

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::math::Vec2;

use super::events::{
    EventDispatcher, KeyAction, KeyEvent, MouseButtonEvent, MouseMoveEvent, MouseScrollEvent,
};

const DRAG_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Keyboard and mouse state, double buffered at frame boundaries.
///
/// Window events update the "current" maps as they arrive. [`InputManager::end_frame`]
/// copies them into the "last" maps, so the just-pressed / just-released queries
/// compare state between two consecutive frame boundaries.
#[derive(Debug, Default)]
pub struct InputManager {
    current_keys: HashMap<KeyCode, bool>,
    last_keys: HashMap<KeyCode, bool>,
    current_buttons: HashMap<MouseButton, bool>,
    last_buttons: HashMap<MouseButton, bool>,
    current_mouse: Vec2,
    last_mouse: Vec2,
    scroll_offset: Vec2,
    mouse_dragging: bool,
    modifiers: ModifiersState,
    dispatcher: EventDispatcher,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, physical_key: PhysicalKey, state: ElementState, repeat: bool) {
        let PhysicalKey::Code(key) = physical_key else {
            return;
        };

        let action = match (state, repeat) {
            (ElementState::Released, _) => KeyAction::Release,
            (ElementState::Pressed, true) => KeyAction::Repeat,
            (ElementState::Pressed, false) => KeyAction::Press,
        };
        self.current_keys
            .insert(key, matches!(action, KeyAction::Press | KeyAction::Repeat));

        let event = KeyEvent {
            key,
            action,
            modifiers: self.modifiers,
        };
        self.dispatcher.dispatch_key(&event);
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.current_mouse = Vec2::new(x as f32, y as f32);
        self.mouse_dragging = self.current_buttons.values().any(|down| *down);

        let event = MouseMoveEvent {
            position: self.current_mouse,
            delta: self.current_mouse - self.last_mouse,
        };
        self.dispatcher.dispatch_mouse_move(&event);
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let is_down = state == ElementState::Pressed;
        self.current_buttons.insert(button, is_down);
        self.mouse_dragging = DRAG_BUTTONS
            .iter()
            .any(|drag_button| self.is_mouse_button_pressed(*drag_button));

        let event = MouseButtonEvent {
            button,
            action: if is_down {
                KeyAction::Press
            } else {
                KeyAction::Release
            },
            modifiers: self.modifiers,
            position: self.current_mouse,
        };
        self.dispatcher.dispatch_mouse_button(&event);
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let offset = scroll_offset_from_delta(delta);
        self.scroll_offset = self.scroll_offset + offset;
        self.dispatcher
            .dispatch_mouse_scroll(&MouseScrollEvent { offset });
    }

    /// Closes the current frame. Call once per frame after the game update.
    pub fn end_frame(&mut self) {
        self.last_keys.clone_from(&self.current_keys);
        self.last_buttons.clone_from(&self.current_buttons);
        self.scroll_offset = Vec2::ZERO;
        self.last_mouse = self.current_mouse;
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        is_down(&self.current_keys, &key)
    }

    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.is_key_pressed(key) && !is_down(&self.last_keys, &key)
    }

    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        !self.is_key_pressed(key) && is_down(&self.last_keys, &key)
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        is_down(&self.current_buttons, &button)
    }

    pub fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.is_mouse_button_pressed(button) && !is_down(&self.last_buttons, &button)
    }

    pub fn is_mouse_button_just_released(&self, button: MouseButton) -> bool {
        !self.is_mouse_button_pressed(button) && is_down(&self.last_buttons, &button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.current_mouse
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.current_mouse - self.last_mouse
    }

    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    pub fn is_mouse_dragging(&self) -> bool {
        self.mouse_dragging
    }

    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }
}

fn is_down<K: std::hash::Hash + Eq>(states: &HashMap<K, bool>, key: &K) -> bool {
    states.get(key).copied().unwrap_or(false)
}

fn scroll_offset_from_delta(delta: MouseScrollDelta) -> Vec2 {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
        MouseScrollDelta::PixelDelta(position) => {
            Vec2::new(unit_step(position.x), unit_step(position.y))
        }
    }
}

fn unit_step(value: f64) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
