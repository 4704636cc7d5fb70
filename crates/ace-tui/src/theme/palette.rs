//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const SURFACE_BG: Color = Color::Rgb(22, 27, 34); // Virtual surface on the canvas
pub const PANEL_BG: Color = Color::Rgb(18, 21, 28); // Side menu
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Menus and dialogs
pub const ELEMENT_BG: Color = Color::Rgb(30, 41, 59); // Instrument elements
pub const INPUT_BG: Color = Color::Rgb(13, 17, 23); // Form control wells

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Canvas ---
pub const GRID: Color = Color::Rgb(45, 51, 59);
pub const DRAGGED_BORDER: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
