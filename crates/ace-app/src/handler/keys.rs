//! Key event handlers for different input modes

use glam::DVec2;

use crate::context_menu::ActiveMenu;
use crate::file_dialog::FileDialogState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::project_form::ProjectField;
use crate::state::{AppState, MenuTab};

/// Convert key events to messages based on what currently has input
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if let Some(dialog) = state.file_dialog.as_ref() {
        return handle_key_file_dialog(dialog, key);
    }
    if state.drag.is_active() {
        return handle_key_dragging(key);
    }
    if let Some(field) = state.focus {
        return handle_key_field(state, field, key);
    }
    if let Some(menu) = state.context_menu.active() {
        if let Some(msg) = handle_key_menu(menu, key) {
            return Some(msg);
        }
    }
    handle_key_normal(state, key)
}

/// Path prompt: typing edits the path, Enter submits, Esc cancels
fn handle_key_file_dialog(dialog: &FileDialogState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FileDialogClosed {
            target: dialog.target,
            selection: None,
        }),
        InputKey::Enter => Some(Message::FileDialogSubmit),
        InputKey::Backspace => {
            let mut text = dialog.input.value().to_string();
            text.pop();
            Some(Message::FileDialogInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::FileDialogInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = dialog.input.value().to_string();
            text.push(c);
            Some(Message::FileDialogInput { text })
        }
        _ => None,
    }
}

fn handle_key_dragging(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::DragCancelled),
        _ => None,
    }
}

/// A project field has focus
fn handle_key_field(state: &AppState, field: ProjectField, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::FocusField(Some(field.next()))),
        InputKey::BackTab => return Some(Message::FocusField(Some(field.prev()))),
        InputKey::Esc => return Some(Message::FocusField(None)),
        _ => {}
    }

    let form = state.project_form.as_ref()?;
    match field {
        ProjectField::Name => {
            let mut name = form.name.value().to_string();
            match key {
                InputKey::Char(c) => name.push(c),
                InputKey::Backspace => {
                    name.pop();
                }
                InputKey::CharCtrl('u') => name.clear(),
                InputKey::Enter => return Some(Message::FocusField(None)),
                _ => return None,
            }
            Some(Message::RenameProject { name })
        }
        ProjectField::Zoom => {
            let step = form.zoom.step;
            let value = form.zoom.value();
            match key {
                InputKey::Left | InputKey::Char('-') => {
                    Some(Message::ZoomSliderChanged { value: value - step })
                }
                InputKey::Right | InputKey::Char('+' | '=') => {
                    Some(Message::ZoomSliderChanged { value: value + step })
                }
                InputKey::Home => Some(Message::ZoomSliderChanged {
                    value: form.zoom.min,
                }),
                InputKey::End => Some(Message::ZoomSliderChanged {
                    value: form.zoom.max,
                }),
                _ => None,
            }
        }
        path_field => match key {
            InputKey::Enter | InputKey::Char(' ') => {
                path_field.binding().map(Message::OpenFileDialog)
            }
            _ => None,
        },
    }
}

/// An open menu takes the navigation keys; everything else falls through
fn handle_key_menu(menu: &ActiveMenu, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuMove { delta: -1 }),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuMove { delta: 1 }),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::MenuActivate {
            index: menu.selected(),
        }),
        InputKey::Esc => match menu {
            ActiveMenu::SimVars(_) => Some(Message::SimVarsMenuExited),
            ActiveMenu::Canvas(_) => Some(Message::CloseMenu),
        },
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let step = f64::from(state.settings.canvas.pan_step);
    let pan = |cols: f64, rows: f64| {
        Some(Message::PanBy {
            delta: DVec2::new(cols, rows) * step * state.viewport.cell,
        })
    };

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Arrows move the view, so the surface moves the other way
        InputKey::Left => pan(1.0, 0.0),
        InputKey::Right => pan(-1.0, 0.0),
        InputKey::Up => pan(0.0, 1.0),
        InputKey::Down => pan(0.0, -1.0),

        InputKey::Char('+' | '=') => Some(Message::ZoomBy { ticks: 1 }),
        InputKey::Char('-') => Some(Message::ZoomBy { ticks: -1 }),
        InputKey::Char('0') => Some(Message::ResetView),

        InputKey::Char('s') => Some(Message::SelectMenuTab(MenuTab::SimVars)),
        InputKey::Char('p') => Some(Message::SelectMenuTab(MenuTab::Project)),
        InputKey::Char('i') => Some(Message::ToggleInteractive),
        InputKey::Char('x') => Some(Message::DismissNotice),
        InputKey::Delete => Some(Message::RemoveSelected),

        // Keyboard route to the canvas menu, opened at the canvas centre
        InputKey::Char('m') => {
            let canvas = state.layout.canvas;
            (!canvas.is_empty()).then(|| Message::OpenCanvasMenu {
                x: canvas.x + canvas.width / 2,
                y: canvas.y + canvas.height / 2,
            })
        }

        InputKey::Tab if state.menu_tab == Some(MenuTab::Project) => {
            Some(Message::FocusField(Some(ProjectField::Name)))
        }

        _ => None,
    }
}
