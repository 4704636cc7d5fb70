//! Main render/view function (View in TEA pattern)


use ace_app::project_form::ProjectField;
use ace_app::state::{AppState, MenuTab};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::rect;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Layers, bottom to top: canvas, side menu, status bar, notice banner,
/// context menu, error tooltip, file dialog.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let layout = &state.layout;
    frame.render_widget(widgets::CanvasView::new(state), rect(layout.canvas));
    frame.render_widget(widgets::SideMenu::new(state), rect(layout.side_menu));
    frame.render_widget(widgets::StatusBar::new(state), rect(layout.status));

    if let Some(notice) = &state.notice {
        let canvas = rect(layout.canvas);
        if canvas.height > 0 {
            let banner = Rect::new(canvas.x, canvas.y, canvas.width, 1);
            frame.render_widget(widgets::NoticeBanner::new(notice), banner);
        }
    }

    frame.render_widget(widgets::ContextMenuLayer::new(state), area);

    render_error_tooltip(frame, state, area);

    if let Some(dialog) = &state.file_dialog {
        frame.render_widget(widgets::FileDialog::new(dialog), area);
    }
}

/// The name field's error message, while the pointer rests on its icon
fn render_error_tooltip(frame: &mut Frame, state: &AppState, area: Rect) {
    if state.menu_tab != Some(MenuTab::Project) {
        return;
    }
    let Some(form) = &state.project_form else {
        return;
    };
    let Some(error) = form.name.error() else {
        return;
    };
    let Some(icon) = state.layout.side.error_icon(ProjectField::Name) else {
        return;
    };
    if state.hover != Some(icon) {
        return;
    }

    let tooltip = widgets::Tooltip::new(error);
    if let Some(tooltip_area) = tooltip.area(icon, area) {
        frame.render_widget(tooltip, tooltip_area);
    }
}
