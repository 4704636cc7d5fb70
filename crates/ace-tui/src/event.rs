//! Terminal event polling

use ace_app::message::Message;
use ace_app::{InputKey, PointerButton, PointerEvent, PointerKind};
use ace_core::prelude::*;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// Convert crossterm MouseEvent to PointerEvent
pub fn mouse_event_to_pointer(mouse: crossterm::event::MouseEvent) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(button) => PointerKind::Down(pointer_button(button)),
        MouseEventKind::Up(button) => PointerKind::Up(pointer_button(button)),
        MouseEventKind::Drag(button) => PointerKind::Drag(pointer_button(button)),
        MouseEventKind::Moved => PointerKind::Moved,
        MouseEventKind::ScrollUp => PointerKind::ScrollUp,
        MouseEventKind::ScrollDown => PointerKind::ScrollDown,
        // Horizontal wheels have no meaning on the canvas
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
    };
    Some(PointerEvent::new(kind, mouse.column, mouse.row))
}

/// Map a terminal event to a message, if it means anything to the workspace
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_pointer(mouse).map(Message::Pointer),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        // Releasing the pointer outside the window never reaches us
        Event::FocusLost => Some(Message::DragCancelled),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_message(event::read()?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_zoom_keys_keep_their_symbol() {
        let key = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('+')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let key =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(event_to_message(Event::Key(key)).is_none());
    }

    #[test]
    fn test_mouse_buttons() {
        let down = mouse_event_to_pointer(mouse(MouseEventKind::Down(MouseButton::Right), 10, 4));
        assert_eq!(
            down,
            Some(PointerEvent::new(PointerKind::Down(PointerButton::Right), 10, 4))
        );

        let drag = mouse_event_to_pointer(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 2));
        assert_eq!(drag.map(|p| p.kind), Some(PointerKind::Drag(PointerButton::Left)));
    }

    #[test]
    fn test_wheel_maps_to_scroll() {
        let up = mouse_event_to_pointer(mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(up.map(|p| p.kind), Some(PointerKind::ScrollUp));
        assert_eq!(
            mouse_event_to_pointer(mouse(MouseEventKind::ScrollLeft, 0, 0)),
            None
        );
    }

    #[test]
    fn test_resize_and_focus_lost() {
        assert!(matches!(
            event_to_message(Event::Resize(100, 30)),
            Some(Message::Resize {
                width: 100,
                height: 30
            })
        ));
        assert!(matches!(
            event_to_message(Event::FocusLost),
            Some(Message::DragCancelled)
        ));
        assert!(event_to_message(Event::FocusGained).is_none());
    }
}
