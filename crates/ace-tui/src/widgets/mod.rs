//! Custom widget components

mod canvas;
mod context_menu;
mod file_dialog;
mod form_controls;
pub mod modal_overlay;
mod side_menu;
mod status_bar;

pub use canvas::CanvasView;
pub use context_menu::ContextMenuLayer;
pub use file_dialog::FileDialog;
pub use form_controls::{FileInputView, SliderView, TextInputView, ToggleView, Tooltip};
pub use side_menu::SideMenu;
pub use status_bar::{NoticeBanner, StatusBar};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `width` columns, marking the cut with `…`
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Like [`truncate`] but keeps the end of the text; paths read best that way
pub(crate) fn truncate_start(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut tail = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        tail.push(c);
        used += w;
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}
