//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for the file dialog and
//! the pop-up menus.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// ```
/// use ratatui::layout::Rect;
/// use ace_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area, keeping their symbols.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a rect.
pub fn render_shadow(buf: &mut Buffer, rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = rect.right();
    let bottom_y = rect.bottom();

    let mut shade = |x: u16, y: u16| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    };

    for y in rect.y.saturating_add(1)..=bottom_y {
        shade(right_x, y);
    }
    for x in rect.x.saturating_add(1)..=right_x {
        shade(x, bottom_y);
    }
}

/// Reset the cells of a rect before drawing pop-up content over it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area.intersection(buf.area), buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(40, 4, area), Rect::new(0, 3, 20, 4));
    }

    #[test]
    fn test_dim_background_keeps_symbols() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "ab", Style::default());

        dim_background(&mut buf, area);

        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(0, 0)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_shadow_outside_the_rect() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 6));
        let rect = Rect::new(2, 1, 4, 3);
        render_shadow(&mut buf, rect);

        assert_eq!(buf[(6, 2)].bg, palette::SHADOW);
        assert_eq!(buf[(3, 4)].bg, palette::SHADOW);
        // Top-right corner stays unshaded
        assert_ne!(buf[(6, 1)].bg, palette::SHADOW);
    }

    #[test]
    fn test_shadow_at_buffer_edge_is_skipped() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, area);
        assert_eq!(buf.area, area);
    }
}
