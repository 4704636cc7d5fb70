//! Side menu, project settings panel and file dialog handlers

use ace_core::prelude::*;
use ace_host::DialogSelection;

use crate::context_menu::{ActiveMenu, SimVarsMenu};
use crate::file_dialog::{DialogTarget, FileDialogState};
use crate::message::Message;
use crate::project_form::ProjectField;
use crate::project_store::PathBinding;
use crate::state::{AppState, MenuTab};

use super::UpdateResult;

/// Clicking the open tab again closes it
pub fn handle_select_tab(state: &mut AppState, tab: MenuTab) -> UpdateResult {
    let reopening = state.menu_tab == Some(tab);
    state.focus = None;

    match tab {
        MenuTab::SimVars if reopening => UpdateResult::message(Message::SimVarsMenuExited),
        MenuTab::SimVars => {
            state.menu_tab = Some(MenuTab::SimVars);
            state
                .context_menu
                .set(ActiveMenu::SimVars(SimVarsMenu::default()));
            UpdateResult::none()
        }
        MenuTab::Project => {
            state.menu_tab = (!reopening).then_some(MenuTab::Project);
            if matches!(state.context_menu.active(), Some(ActiveMenu::SimVars(_))) {
                state.context_menu.clear();
            }
            UpdateResult::none()
        }
    }
}

pub fn handle_toggle_interactive(state: &mut AppState) -> UpdateResult {
    let interactive = state.interactive.toggle();
    if interactive {
        if let Some(gesture) = state.drag.cancel() {
            debug!("Interactive mode on, dropped drag of {}", gesture.uuid);
        }
    }
    info!("Interactive instruments: {}", interactive);
    UpdateResult::none()
}

pub fn handle_focus_field(state: &mut AppState, field: Option<ProjectField>) -> UpdateResult {
    state.focus = match field {
        Some(field) if state.menu_tab == Some(MenuTab::Project) && state.project_form.is_some() => {
            Some(field)
        }
        _ => None,
    };
    UpdateResult::none()
}

/// The name is applied even when empty; the error next to the field is only a hint
pub fn handle_rename_project(state: &mut AppState, name: &str) -> UpdateResult {
    state.project.rename(name);
    if let Some(form) = state.project_form.as_mut() {
        if form.name.value() != name {
            form.name.set_value(name);
        }
        form.validate_name();
    }
    UpdateResult::none()
}

pub fn handle_zoom_slider(state: &mut AppState, value: f64) -> UpdateResult {
    let Some(form) = state.project_form.as_mut() else {
        return UpdateResult::none();
    };
    if !state.drag.is_active() {
        form.zoom.set_value(value);
        state.viewport.set_scale(form.zoom.value());
    }
    UpdateResult::none()
}

pub fn handle_open_file_dialog(state: &mut AppState, binding: PathBinding) -> UpdateResult {
    let Some(form) = state.project_form.as_ref() else {
        return UpdateResult::none();
    };

    let input = form.file_input(binding);
    state.file_dialog = Some(FileDialogState::new(
        DialogTarget::ProjectPath(binding),
        input.options.clone(),
        input.value(),
    ));
    UpdateResult::none()
}

/// Validate the dialog input; a valid selection closes the dialog
pub fn handle_file_dialog_submit(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.file_dialog.as_mut() else {
        return UpdateResult::none();
    };
    match dialog.submit() {
        Some(selection) => UpdateResult::message(Message::FileDialogClosed {
            target: dialog.target,
            selection: Some(selection),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_file_dialog_closed(
    state: &mut AppState,
    target: DialogTarget,
    selection: Option<DialogSelection>,
) -> UpdateResult {
    state.file_dialog = None;

    match target {
        DialogTarget::ProjectPath(binding) => {
            let Some(form) = state.project_form.as_mut() else {
                return UpdateResult::none();
            };
            match form.file_input_mut(binding).apply_selection(selection) {
                Some(selection) => UpdateResult::message(Message::PathSelected { binding, selection }),
                None => {
                    trace!("{} dialog cancelled", binding.label());
                    UpdateResult::none()
                }
            }
        }
    }
}

pub fn handle_path_selected(
    state: &mut AppState,
    binding: PathBinding,
    selection: DialogSelection,
) -> UpdateResult {
    match selection.single() {
        Some(path) => state.project.set_path(binding, path),
        None => warn!(
            "{} takes one directory, ignoring {} paths",
            binding.label(),
            selection.paths().len()
        ),
    }
    UpdateResult::none()
}
