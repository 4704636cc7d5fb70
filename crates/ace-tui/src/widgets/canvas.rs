//! Canvas widget
//!
//! Draws the virtual surface through the viewport transform, an optional
//! dot grid, and every element of the active project. An element that is
//! being dragged is drawn at its preview position; the store keeps the
//! committed one until the drop.

use ace_app::state::AppState;
use ace_core::Element;
use glam::DVec2;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Widget},
};

use super::truncate;
use crate::theme::palette;
use ace_app::viewport::{Viewport, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Distance between grid dots in surface units
pub const GRID_SPACING: f64 = 500.0;

pub struct CanvasView<'a> {
    state: &'a AppState,
}

impl<'a> CanvasView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_surface(&self, area: Rect, buf: &mut Buffer) {
        let viewport = &self.state.viewport;
        let show_grid = self.state.settings.ui.show_grid;
        let surface = Style::default().bg(palette::SURFACE_BG);
        let dot = Style::default().fg(palette::GRID).bg(palette::SURFACE_BG);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let (start, end) = cell_span(viewport, x, y);
                let on_surface = end.x > 0.0
                    && start.x < SURFACE_WIDTH
                    && end.y > 0.0
                    && start.y < SURFACE_HEIGHT;
                if !on_surface {
                    continue;
                }

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(surface);
                    if show_grid && crosses_grid(start.x, end.x) && crosses_grid(start.y, end.y) {
                        cell.set_char('·');
                        cell.set_style(dot);
                    }
                }
            }
        }
    }

    fn render_element(&self, element: &Element, area: Rect, buf: &mut Buffer) {
        let viewport = &self.state.viewport;
        let preview = self
            .state
            .drag
            .preview_offset(element.uuid)
            .unwrap_or(DVec2::ZERO);
        let position = DVec2::new(element.x, element.y) + preview;
        let size = DVec2::new(element.width, element.height);

        let top_left = viewport.surface_to_cell(position);
        let bottom_right = viewport.surface_to_cell(position + size);
        let left = top_left.x.floor() as i64;
        let top = top_left.y.floor() as i64;
        let right = (bottom_right.x.ceil() as i64).max(left + 1);
        let bottom = (bottom_right.y.ceil() as i64).max(top + 1);

        let clip_left = left.max(i64::from(area.left()));
        let clip_top = top.max(i64::from(area.top()));
        let clip_right = right.min(i64::from(area.right()));
        let clip_bottom = bottom.min(i64::from(area.bottom()));
        if clip_left >= clip_right || clip_top >= clip_bottom {
            return;
        }

        // Only edges that are on screen get a border
        let mut borders = Borders::NONE;
        if left == clip_left {
            borders |= Borders::LEFT;
        }
        if top == clip_top {
            borders |= Borders::TOP;
        }
        if right == clip_right {
            borders |= Borders::RIGHT;
        }
        if bottom == clip_bottom {
            borders |= Borders::BOTTOM;
        }

        let rect = Rect::new(
            clip_left as u16,
            clip_top as u16,
            (clip_right - clip_left) as u16,
            (clip_bottom - clip_top) as u16,
        );

        let border_color = if preview != DVec2::ZERO || self.is_dragged(element) {
            palette::DRAGGED_BORDER
        } else if self.state.selected_element == Some(element.uuid) {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        };

        let title_room = usize::from(rect.width.saturating_sub(2));
        let mut block = Block::default()
            .borders(borders)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(border_color))
            .style(
                Style::default()
                    .bg(palette::ELEMENT_BG)
                    .fg(palette::TEXT_PRIMARY),
            );
        if borders.contains(Borders::TOP) {
            block = block.title(truncate(&element.name, title_room));
        }

        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.height > 0 && inner.width > 0 {
            let dims = format!("{}×{}", element.width, element.height);
            if dims.chars().count() <= usize::from(inner.width) {
                buf.set_string(
                    inner.x,
                    inner.y,
                    dims,
                    Style::default()
                        .fg(palette::TEXT_MUTED)
                        .bg(palette::ELEMENT_BG),
                );
            }
        }
    }

    fn is_dragged(&self, element: &Element) -> bool {
        self.state
            .drag
            .active()
            .is_some_and(|gesture| gesture.uuid == element.uuid)
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));
        self.render_surface(area, buf);

        // The dragged element goes last so it is drawn above the others
        let (dragged, resting): (Vec<&Element>, Vec<&Element>) = self
            .state
            .project
            .elements()
            .iter()
            .partition(|e| self.is_dragged(e));
        for element in resting.into_iter().chain(dragged) {
            self.render_element(element, area, buf);
        }
    }
}

/// Surface points under the top-left and bottom-right corners of a cell
fn cell_span(viewport: &Viewport, x: u16, y: u16) -> (DVec2, DVec2) {
    let start = viewport.client_to_surface(viewport.cell_to_client(x, y));
    let end = viewport.client_to_surface(viewport.cell_to_client(x, y) + viewport.cell);
    (start, end)
}

fn crosses_grid(start: f64, end: f64) -> bool {
    (start / GRID_SPACING).floor() != (end / GRID_SPACING).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_app::config::Settings;
    use ace_app::layout::ScreenRect;
    use ace_host::test_utils::{test_element, test_project};
    use ratatui::{backend::TestBackend, Terminal};

    fn state_with(elements: Vec<Element>) -> AppState {
        let mut state = AppState::new(Some(test_project("A320", elements)), Settings::default());
        state.resize(120, 40);
        state
    }

    fn big_element(name: &str, x: f64, y: f64) -> Element {
        let mut element = test_element(name, x, y);
        element.width = 400.0;
        element.height = 400.0;
        element
    }

    fn render(state: &AppState) -> Buffer {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let area = crate::layout::rect(state.layout.canvas);
        terminal
            .draw(|frame| frame.render_widget(CanvasView::new(state), area))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_element_title_drawn() {
        let state = state_with(vec![big_element("PFD", 3000.0, 1600.0)]);
        let buf = render(&state);
        assert!(content(&buf).contains("PFD"));
    }

    #[test]
    fn test_element_follows_drag_preview() {
        let element = big_element("PFD", 3000.0, 1600.0);
        let uuid = element.uuid;
        let mut state = state_with(vec![element]);

        let at_rest = state
            .viewport
            .surface_to_cell(DVec2::new(3000.0, 1600.0))
            .floor();
        state.drag.begin(uuid, DVec2::ZERO, Some(state.viewport.scale));
        state.drag.update(DVec2::new(160.0, 0.0));

        let buf = render(&state);
        let left = at_rest.x as u16;
        let top = at_rest.y as u16;
        // 160 client pixels is 20 cells to the right
        assert_eq!(buf[(left + 20, top)].fg, palette::DRAGGED_BORDER);
        assert_ne!(buf[(left, top)].fg, palette::DRAGGED_BORDER);
    }

    #[test]
    fn test_selected_element_highlighted() {
        let element = big_element("ND", 3000.0, 1600.0);
        let mut state = state_with(vec![element.clone()]);
        state.selected_element = Some(element.uuid);

        let corner = state.viewport.surface_to_cell(DVec2::new(3000.0, 1600.0)).floor();
        let buf = render(&state);
        assert_eq!(buf[(corner.x as u16, corner.y as u16)].fg, palette::BORDER_ACTIVE);
    }

    #[test]
    fn test_offscreen_element_not_drawn() {
        let state = state_with(vec![big_element("EWD", 7900.0, 4900.0)]);
        let buf = render(&state);
        assert!(!content(&buf).contains("EWD"));
    }

    #[test]
    fn test_grid_only_on_surface() {
        let mut state = state_with(vec![]);
        let buf = render(&state);
        assert!(content(&buf).contains('·'));

        state.settings.ui.show_grid = false;
        let buf = render(&state);
        assert!(!content(&buf).contains('·'));
    }

    #[test]
    fn test_cell_span_covers_one_cell() {
        let mut viewport = Viewport::default();
        viewport.set_bounds(ScreenRect::new(0, 0, 80, 24));
        let (start, end) = cell_span(&viewport, 10, 5);
        let extent = (end - start) * viewport.scale;
        assert!((extent - viewport.cell).length() < 1e-9);
    }
}
