//! Pointer routing
//!
//! Hit-tests a mouse event against the workspace in stacking order: file
//! dialog, open menu, side menu, then the canvas. The menu layer only claims
//! events inside the menu itself; everything else passes through.

use ace_core::prelude::*;

use crate::context_menu::{item_at, ActiveMenu};
use crate::input_key::{PointerButton, PointerEvent, PointerKind};
use crate::layout::SideMenuTarget;
use crate::message::Message;
use crate::state::{AppState, MenuTab};

use super::UpdateResult;

pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> UpdateResult {
    let PointerEvent { kind, column, row } = event;

    if matches!(kind, PointerKind::Moved | PointerKind::Drag(_)) {
        state.hover = Some((column, row));
    }

    // The dialog is modal
    if state.file_dialog.is_some() {
        return UpdateResult::none();
    }

    match kind {
        PointerKind::Down(PointerButton::Left) => handle_left_press(state, column, row),
        PointerKind::Down(PointerButton::Right) => handle_right_press(state, column, row),
        PointerKind::Drag(PointerButton::Left) => handle_left_drag(state, column, row),
        PointerKind::Up(PointerButton::Left) => handle_left_release(state, column, row),
        PointerKind::ScrollUp => handle_scroll(state, column, row, 1),
        PointerKind::ScrollDown => handle_scroll(state, column, row, -1),
        _ => UpdateResult::none(),
    }
}

fn menu_hit(state: &AppState, column: u16, row: u16) -> Option<Option<usize>> {
    let rect = state.active_menu_rect()?;
    rect.contains(column, row)
        .then(|| item_at(rect, state.active_menu_len(), column, row))
}

fn handle_left_press(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    if let Some(item) = menu_hit(state, column, row) {
        return match item {
            Some(index) => UpdateResult::message(Message::MenuActivate { index }),
            None => UpdateResult::none(),
        };
    }

    // A press outside the canvas menu closes it and still reaches what is below
    if matches!(state.context_menu.active(), Some(ActiveMenu::Canvas(_))) {
        state.context_menu.clear();
    }

    if state.layout.side_menu.contains(column, row) {
        let project_open = state.menu_tab == Some(MenuTab::Project);
        return match state.layout.side.hit(column, row, project_open) {
            Some(SideMenuTarget::Tab(tab)) => UpdateResult::message(Message::SelectMenuTab(tab)),
            Some(SideMenuTarget::InteractiveToggle) => {
                UpdateResult::message(Message::ToggleInteractive)
            }
            Some(SideMenuTarget::Field(field)) => {
                state.focus = Some(field);
                match field.binding() {
                    Some(binding) => UpdateResult::message(Message::OpenFileDialog(binding)),
                    None => UpdateResult::none(),
                }
            }
            None => UpdateResult::none(),
        };
    }

    if !state.layout.canvas.contains(column, row) {
        return UpdateResult::none();
    }

    let surface = state.viewport.cell_to_surface(column, row);
    let pointer = state.viewport.cell_center(column, row);
    match state.project.element_at(surface.x, surface.y).map(|e| e.uuid) {
        Some(uuid) if state.interactive.checked => {
            trace!("Pointer goes to interactive instrument {}", uuid);
            UpdateResult::none()
        }
        Some(uuid) => UpdateResult::message(Message::DragStarted {
            uuid,
            pointer,
            scale: Some(state.viewport.scale),
        }),
        None => {
            // Background press blurs the form and may start a pan
            state.focus = None;
            state.selected_element = None;
            if state.viewport_enabled() {
                state.pan_anchor = Some(pointer);
            }
            UpdateResult::none()
        }
    }
}

fn handle_right_press(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    if menu_hit(state, column, row).is_some() {
        return UpdateResult::none();
    }
    if !state.layout.canvas.contains(column, row) {
        return UpdateResult::none();
    }

    let surface = state.viewport.cell_to_surface(column, row);
    if state.project.element_at(surface.x, surface.y).is_some() {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::OpenCanvasMenu { x: column, y: row })
}

fn handle_left_drag(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    let pointer = state.viewport.cell_center(column, row);

    if state.drag.is_active() {
        return UpdateResult::message(Message::DragMoved { pointer });
    }

    match state.pan_anchor.replace(pointer) {
        Some(anchor) => UpdateResult::message(Message::PanBy {
            delta: pointer - anchor,
        }),
        None => {
            state.pan_anchor = None;
            UpdateResult::none()
        }
    }
}

fn handle_left_release(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    state.pan_anchor = None;

    if state.drag.is_active() {
        state.drag.update(state.viewport.cell_center(column, row));
        let over_canvas = state.layout.canvas.contains(column, row);
        return UpdateResult::message(Message::DragEnded { over_canvas });
    }
    UpdateResult::none()
}

fn handle_scroll(state: &mut AppState, column: u16, row: u16, ticks: i32) -> UpdateResult {
    if menu_hit(state, column, row).is_some() {
        return UpdateResult::message(Message::MenuMove {
            delta: -(ticks as isize),
        });
    }
    if state.layout.canvas.contains(column, row) {
        return UpdateResult::message(Message::ZoomAt { column, row, ticks });
    }
    UpdateResult::none()
}
