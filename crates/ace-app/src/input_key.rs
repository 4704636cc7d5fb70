//! Abstract input events, independent of terminal library.
//!
//! `InputKey` and `PointerEvent` are converted from crossterm events at the
//! TUI boundary so the application crate never depends on crossterm.

/// Abstract key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

/// Mouse button that started or ended a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(PointerButton),
    Up(PointerButton),
    /// Movement with a button held
    Drag(PointerButton),
    /// Movement with no button held
    Moved,
    /// Wheel towards the user's screen (zoom in)
    ScrollUp,
    /// Wheel away from the user's screen (zoom out)
    ScrollDown,
}

/// A pointer event at a terminal cell.
///
/// Cell coordinates are the client coordinates of the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }
}
