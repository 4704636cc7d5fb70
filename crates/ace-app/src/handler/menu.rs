//! Context menu handlers

use ace_core::prelude::*;
use ace_core::SimVarKey;

use crate::context_menu::{ActiveMenu, CanvasMenu, CanvasMenuItem};
use crate::message::Message;
use crate::state::{AppState, MenuTab};

use super::{canvas, UpdateResult};

pub fn handle_open_canvas_menu(state: &mut AppState, x: u16, y: u16) -> UpdateResult {
    // Whatever was open is dropped without running its exit logic
    if let Some(replaced) = state.context_menu.set(ActiveMenu::Canvas(CanvasMenu::new(x, y))) {
        trace!("Canvas menu replaced {:?}", replaced);
    }
    UpdateResult::none()
}

pub fn handle_menu_move(state: &mut AppState, delta: isize) -> UpdateResult {
    let len = state.active_menu_len();
    if let Some(menu) = state.context_menu.active_mut() {
        menu.move_selection(delta, len);
    }
    UpdateResult::none()
}

pub fn handle_menu_activate(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(menu) = state.context_menu.active().cloned() else {
        return UpdateResult::none();
    };

    match menu {
        ActiveMenu::Canvas(canvas_menu) => {
            let Some(item) = state.canvas_menu_items().into_iter().nth(index) else {
                return UpdateResult::none();
            };
            state.context_menu.clear();

            match item {
                CanvasMenuItem::Place { index, .. } => {
                    canvas::place_instrument(state, &index, canvas_menu.x, canvas_menu.y)
                }
                CanvasMenuItem::ResetView => UpdateResult::message(Message::ResetView),
            }
        }
        ActiveMenu::SimVars(_) => {
            let Some(key) = state.simvars.key_at(index).cloned() else {
                return UpdateResult::none();
            };
            if let Some(menu) = state.context_menu.active_mut() {
                menu.select(index);
            }
            UpdateResult::message(Message::ToggleSimVarPin(key))
        }
    }
}

/// Exit of the SimVars menu: close it and release the side-menu tab
pub fn handle_simvars_menu_exited(state: &mut AppState) -> UpdateResult {
    if matches!(state.context_menu.active(), Some(ActiveMenu::SimVars(_))) {
        state.context_menu.clear();
    }
    if state.menu_tab == Some(MenuTab::SimVars) {
        state.menu_tab = None;
    }
    UpdateResult::none()
}

pub fn handle_toggle_pin(state: &mut AppState, key: &SimVarKey) -> UpdateResult {
    match state.simvars.toggle_pin(key) {
        Some(pinned) => debug!("{} pinned: {}", key, pinned),
        None => debug!("Cannot pin unknown SimVar {}", key),
    }
    UpdateResult::none()
}
