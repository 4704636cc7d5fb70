//! Canvas handlers: element drags, viewport pan/zoom and placement

use ace_core::prelude::*;
use glam::DVec2;
use uuid::Uuid;

use crate::state::{AppState, NoticeLevel};

use super::UpdateResult;

pub fn handle_drag_started(
    state: &mut AppState,
    uuid: Uuid,
    pointer: DVec2,
    scale: Option<f64>,
) -> UpdateResult {
    if state.interactive.checked {
        trace!("Interactive mode, not dragging {}", uuid);
        return UpdateResult::none();
    }
    if state.project.element(uuid).is_none() {
        debug!("Drag requested for unknown element {}", uuid);
        return UpdateResult::none();
    }
    if !state.drag.begin(uuid, pointer, scale) {
        trace!("Drag already in progress, ignoring {}", uuid);
        return UpdateResult::none();
    }

    state.pan_anchor = None;
    state.selected_element = Some(uuid);
    UpdateResult::none()
}

pub fn handle_drag_ended(state: &mut AppState, over_canvas: bool) -> UpdateResult {
    match state.drag.end(over_canvas) {
        Some(update) => {
            state.project.update_element_position(update);
        }
        None if !over_canvas => debug!("Drag released outside the canvas"),
        None => {}
    }
    UpdateResult::none()
}

pub fn handle_drag_cancelled(state: &mut AppState) -> UpdateResult {
    if let Some(gesture) = state.drag.cancel() {
        debug!("Drag of {} cancelled", gesture.uuid);
    }
    UpdateResult::none()
}

pub fn handle_pan(state: &mut AppState, delta: DVec2) -> UpdateResult {
    if state.viewport_enabled() {
        state.viewport.pan(delta);
    }
    UpdateResult::none()
}

pub fn handle_zoom_at(state: &mut AppState, column: u16, row: u16, ticks: i32) -> UpdateResult {
    if state.viewport_enabled() {
        let client = state.viewport.cell_center(column, row);
        state.viewport.zoom_at(client, ticks);
        state.sync_zoom_slider();
    }
    UpdateResult::none()
}

pub fn handle_zoom_by(state: &mut AppState, ticks: i32) -> UpdateResult {
    if state.viewport_enabled() {
        state.viewport.zoom_centered(ticks);
        state.sync_zoom_slider();
    }
    UpdateResult::none()
}

pub fn handle_reset_view(state: &mut AppState) -> UpdateResult {
    if state.viewport_enabled() {
        state.viewport.reset();
        state.sync_zoom_slider();
    }
    UpdateResult::none()
}

pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    let Some(uuid) = state.selected_element.take() else {
        return UpdateResult::none();
    };

    if state.drag.active().is_some_and(|g| g.uuid == uuid) {
        state.drag.cancel();
    }
    if let Some(element) = state.project.remove_element(uuid) {
        info!("Removed {} ({})", element.name, uuid);
    }
    UpdateResult::none()
}

/// Place a catalog instrument at the surface point under a client cell
pub fn place_instrument(state: &mut AppState, index: &str, column: u16, row: u16) -> UpdateResult {
    let surface = state
        .viewport
        .client_to_surface(state.viewport.cell_to_client(column, row));

    match state.project.place_instrument(index, surface.x, surface.y) {
        Ok(uuid) => state.selected_element = Some(uuid),
        Err(e) => {
            warn!("Could not place {}: {}", index, e);
            state.notify(NoticeLevel::Error, e.to_string());
        }
    }
    UpdateResult::none()
}
