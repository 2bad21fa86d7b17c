use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState};

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub action: KeyAction,
    pub modifiers: ModifiersState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub action: KeyAction,
    pub modifiers: ModifiersState,
    pub position: Vec2,
}

/// Cursor motion. `delta` is relative to the position recorded at the last
/// frame boundary, not to the previous motion event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub position: Vec2,
    pub delta: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrollEvent {
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

struct ListenerList<E> {
    entries: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Default for ListenerList<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> ListenerList<E> {
    fn push(&mut self, id: ListenerId, listener: Listener<E>) {
        self.entries.push((id, listener));
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    fn dispatch(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Per-event-type listener lists. Listeners run in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    next_id: u64,
    key: ListenerList<KeyEvent>,
    mouse_button: ListenerList<MouseButtonEvent>,
    mouse_move: ListenerList<MouseMoveEvent>,
    mouse_scroll: ListenerList<MouseScrollEvent>,
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("key_listeners", &self.key.len())
            .field("mouse_button_listeners", &self.mouse_button.len())
            .field("mouse_move_listeners", &self.mouse_move.len())
            .field("mouse_scroll_listeners", &self.mouse_scroll.len())
            .finish()
    }
}

impl EventDispatcher {
    pub fn on_key(&mut self, listener: impl FnMut(&KeyEvent) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.key.push(id, Box::new(listener));
        id
    }

    pub fn on_mouse_button(
        &mut self,
        listener: impl FnMut(&MouseButtonEvent) + 'static,
    ) -> ListenerId {
        let id = self.allocate_id();
        self.mouse_button.push(id, Box::new(listener));
        id
    }

    pub fn on_mouse_move(&mut self, listener: impl FnMut(&MouseMoveEvent) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.mouse_move.push(id, Box::new(listener));
        id
    }

    pub fn on_mouse_scroll(
        &mut self,
        listener: impl FnMut(&MouseScrollEvent) + 'static,
    ) -> ListenerId {
        let id = self.allocate_id();
        self.mouse_scroll.push(id, Box::new(listener));
        id
    }

    /// Returns `false` when no listener was registered under `id`.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.key.remove(id)
            || self.mouse_button.remove(id)
            || self.mouse_move.remove(id)
            || self.mouse_scroll.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.key.len() + self.mouse_button.len() + self.mouse_move.len() + self.mouse_scroll.len()
    }

    pub fn dispatch_key(&mut self, event: &KeyEvent) {
        self.key.dispatch(event);
    }

    pub fn dispatch_mouse_button(&mut self, event: &MouseButtonEvent) {
        self.mouse_button.dispatch(event);
    }

    pub fn dispatch_mouse_move(&mut self, event: &MouseMoveEvent) {
        self.mouse_move.dispatch(event);
    }

    pub fn dispatch_mouse_scroll(&mut self, event: &MouseScrollEvent) {
        self.mouse_scroll.dispatch(event);
    }

    fn allocate_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn key_event(key: KeyCode) -> KeyEvent {
        KeyEvent {
            key,
            action: KeyAction::Press,
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn key_listeners_run_in_registration_order() {
        let mut dispatcher = EventDispatcher::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        dispatcher.on_key(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        dispatcher.on_key(move |_| second.borrow_mut().push("second"));

        dispatcher.dispatch_key(&key_event(KeyCode::Space));

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn dispatch_only_reaches_matching_event_kind() {
        let mut dispatcher = EventDispatcher::default();
        let key_hits = Rc::new(RefCell::new(0));
        let scroll_hits = Rc::new(RefCell::new(0));

        let key_counter = Rc::clone(&key_hits);
        dispatcher.on_key(move |_| *key_counter.borrow_mut() += 1);
        let scroll_counter = Rc::clone(&scroll_hits);
        dispatcher.on_mouse_scroll(move |_| *scroll_counter.borrow_mut() += 1);

        dispatcher.dispatch_mouse_scroll(&MouseScrollEvent {
            offset: Vec2::new(0.0, 1.0),
        });

        assert_eq!(*key_hits.borrow(), 0);
        assert_eq!(*scroll_hits.borrow(), 1);
    }

    #[test]
    fn removed_listener_is_not_called_again() {
        let mut dispatcher = EventDispatcher::default();
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let id = dispatcher.on_mouse_move(move |_| *counter.borrow_mut() += 1);
        let event = MouseMoveEvent {
            position: Vec2::new(3.0, 4.0),
            delta: Vec2::ZERO,
        };

        dispatcher.dispatch_mouse_move(&event);
        assert!(dispatcher.remove(id));
        dispatcher.dispatch_mouse_move(&event);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn removing_unknown_id_reports_false() {
        let mut dispatcher = EventDispatcher::default();
        let id = dispatcher.on_mouse_button(|_| {});

        assert!(dispatcher.remove(id));
        assert!(!dispatcher.remove(id));
    }
}
