//! Context menu layer
//!
//! Draws whichever menu is open in `ContextMenuState`, and nothing when the
//! register is empty. Hit-testing uses the same rectangles
//! (`AppState::active_menu_rect`), so the drawn items are the clickable ones.

use ace_app::context_menu::ActiveMenu;
use ace_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::{clear_area, render_shadow};
use super::truncate;
use crate::layout::rect;
use crate::theme::{palette, styles};

pub struct ContextMenuLayer<'a> {
    state: &'a AppState,
}

impl<'a> ContextMenuLayer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn canvas_lines(&self, selected: usize, room: usize) -> Vec<Line<'static>> {
        self.state
            .canvas_menu_items()
            .iter()
            .enumerate()
            .map(|(i, item)| item_line(&item.label(), i == selected, room))
            .collect()
    }

    fn simvars_lines(&self, selected: usize, room: usize) -> Vec<Line<'static>> {
        if self.state.simvars.is_empty() {
            let text = if self.state.simvars.status.is_loading() {
                "Loading SimVars…"
            } else {
                "No SimVars"
            };
            return vec![Line::styled(format!(" {}", text), styles::text_muted())];
        }

        self.state
            .simvars
            .iter()
            .enumerate()
            .map(|(i, (key, var))| {
                let pin = if var.is_pinned() { "●" } else { "○" };
                let text = format!("{} {}  {} {}", pin, key, var.value, var.unit);
                item_line(&text, i == selected, room)
            })
            .collect()
    }
}

impl Widget for ContextMenuLayer<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let (Some(menu), Some(menu_rect)) =
            (self.state.context_menu.active(), self.state.active_menu_rect())
        else {
            return;
        };
        let area = rect(menu_rect);
        if area.is_empty() {
            return;
        }

        clear_area(buf, area);
        render_shadow(buf, area);

        let room = usize::from(area.width.saturating_sub(2));
        let (title, lines) = match menu {
            ActiveMenu::Canvas(canvas) => ("", self.canvas_lines(canvas.selected, room)),
            ActiveMenu::SimVars(simvars) => {
                (" SimVars ", self.simvars_lines(simvars.selected, room))
            }
        };

        let block = styles::popup_block(title);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

fn item_line(label: &str, selected: bool, room: usize) -> Line<'static> {
    let text = format!(" {}", label);
    let style = if selected {
        styles::focused_selected()
    } else {
        Style::default().fg(palette::TEXT_PRIMARY)
    };
    // Pad so the highlight spans the whole row
    let text = format!("{:<width$}", truncate(&text, room), width = room);
    Line::from(Span::styled(text, style))
}
