//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{canvas, keys, menu, pointer, settings, workspace, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the event loop to execute
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Pointer(event) => pointer::handle_pointer(state, event),

        Message::Resize { width, height } => {
            state.resize(width, height);
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Workspace Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Mount => workspace::handle_mount(state),

        Message::Unmount => workspace::handle_unmount(state),

        Message::SimVarsLoaded {
            mount_id,
            issued_for,
            simvars,
        } => workspace::handle_simvars_loaded(state, mount_id, issued_for, simvars),

        Message::SimVarsLoadFailed {
            mount_id,
            issued_for,
            error,
        } => workspace::handle_simvars_failed(state, mount_id, issued_for, error),

        Message::InstrumentsLoaded {
            mount_id,
            issued_for,
            instruments,
        } => workspace::handle_instruments_loaded(state, mount_id, issued_for, instruments),

        Message::InstrumentsLoadFailed {
            mount_id,
            issued_for,
            error,
        } => workspace::handle_instruments_failed(state, mount_id, issued_for, error),

        // ─────────────────────────────────────────────────────────
        // Canvas
        // ─────────────────────────────────────────────────────────
        Message::DragStarted {
            uuid,
            pointer,
            scale,
        } => canvas::handle_drag_started(state, uuid, pointer, scale),

        Message::DragMoved { pointer } => {
            state.drag.update(pointer);
            UpdateResult::none()
        }

        Message::DragEnded { over_canvas } => canvas::handle_drag_ended(state, over_canvas),

        Message::DragCancelled => canvas::handle_drag_cancelled(state),

        Message::PanBy { delta } => canvas::handle_pan(state, delta),

        Message::ZoomAt { column, row, ticks } => canvas::handle_zoom_at(state, column, row, ticks),

        Message::ZoomBy { ticks } => canvas::handle_zoom_by(state, ticks),

        Message::ResetView => canvas::handle_reset_view(state),

        Message::RemoveSelected => canvas::handle_remove_selected(state),

        // ─────────────────────────────────────────────────────────
        // Context Menu
        // ─────────────────────────────────────────────────────────
        Message::OpenCanvasMenu { x, y } => menu::handle_open_canvas_menu(state, x, y),

        Message::CloseMenu => {
            state.context_menu.clear();
            UpdateResult::none()
        }

        Message::MenuMove { delta } => menu::handle_menu_move(state, delta),

        Message::MenuActivate { index } => menu::handle_menu_activate(state, index),

        Message::SimVarsMenuExited => menu::handle_simvars_menu_exited(state),

        Message::ToggleSimVarPin(key) => menu::handle_toggle_pin(state, &key),

        // ─────────────────────────────────────────────────────────
        // Side Menu and Project Settings
        // ─────────────────────────────────────────────────────────
        Message::SelectMenuTab(tab) => settings::handle_select_tab(state, tab),

        Message::ToggleInteractive => settings::handle_toggle_interactive(state),

        Message::FocusField(field) => settings::handle_focus_field(state, field),

        Message::RenameProject { name } => settings::handle_rename_project(state, &name),

        Message::ZoomSliderChanged { value } => settings::handle_zoom_slider(state, value),

        Message::OpenFileDialog(binding) => settings::handle_open_file_dialog(state, binding),

        Message::FileDialogInput { text } => {
            if let Some(dialog) = state.file_dialog.as_mut() {
                dialog.input.set_value(text);
                dialog.input.set_error(None);
            }
            UpdateResult::none()
        }

        Message::FileDialogSubmit => settings::handle_file_dialog_submit(state),

        Message::FileDialogClosed { target, selection } => {
            settings::handle_file_dialog_closed(state, target, selection)
        }

        Message::PathSelected { binding, selection } => {
            settings::handle_path_selected(state, binding, selection)
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
