//! State of the path prompt that stands in for a native file dialog

use ace_host::{DialogSelection, OpenDialogOptions};

use crate::form::TextInput;
use crate::project_store::PathBinding;

/// Where a dialog's result is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTarget {
    ProjectPath(PathBinding),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileDialogState {
    pub target: DialogTarget,
    pub options: OpenDialogOptions,
    pub input: TextInput,
}

impl FileDialogState {
    pub fn new(target: DialogTarget, options: OpenDialogOptions, initial: &str) -> Self {
        let seed = options
            .default_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| initial.to_string());
        Self {
            target,
            input: TextInput::new("path").with_value(seed),
            options,
        }
    }

    pub fn title(&self) -> &str {
        self.options.title.as_deref().unwrap_or("Open")
    }

    /// Validate the typed path(s). An error is shown on the input and keeps the dialog open.
    pub fn submit(&mut self) -> Option<DialogSelection> {
        match self.options.parse_input(self.input.value()) {
            Ok(selection) => {
                self.input.set_error(None);
                Some(selection)
            }
            Err(reason) => {
                self.input.set_error(Some(reason));
                None
            }
        }
    }
}
