//! Conversion between workspace geometry and ratatui areas
//!
//! The regions themselves are computed in `ace_app::layout` so hit-testing
//! and drawing agree on every cell.

use ace_app::layout::ScreenRect;
use ratatui::layout::Rect;

pub fn rect(area: ScreenRect) -> Rect {
    Rect::new(area.x, area.y, area.width, area.height)
}

/// A one-row area inside `area`, or `None` when the row is outside it
pub fn row(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect::new(area.x, area.y + offset, area.width, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_keeps_geometry() {
        assert_eq!(rect(ScreenRect::new(30, 0, 90, 39)), Rect::new(30, 0, 90, 39));
    }

    #[test]
    fn test_row_outside_area() {
        let area = Rect::new(2, 3, 10, 2);
        assert_eq!(row(area, 1), Some(Rect::new(2, 4, 10, 1)));
        assert_eq!(row(area, 2), None);
    }
}
