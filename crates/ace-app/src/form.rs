//! Form controls
//!
//! Plain state objects for text, file, slider and toggle inputs. Validation
//! errors are display-only: setting one never changes or blocks a value.

use ace_host::{DialogSelection, OpenDialogOptions};

/// Single-line text field with an optional error indicator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub name: String,
    pub label: Option<String>,
    value: String,
    error: Option<String>,
    read_only: bool,
}

impl TextInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Replace the value programmatically (allowed even when read-only)
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Type a character. Returns `false` if the field is read-only.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.read_only {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.value.pop();
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        self.value.clear();
        true
    }
}

/// Read-only text display that is filled from a file dialog
#[derive(Debug, Clone, PartialEq)]
pub struct FileInput {
    pub input: TextInput,
    pub options: OpenDialogOptions,
    selection: Option<DialogSelection>,
}

impl FileInput {
    pub fn new(name: impl Into<String>, options: OpenDialogOptions) -> Self {
        Self {
            input: TextInput::new(name).read_only(),
            options,
            selection: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.input.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Last non-cancelled selection
    pub fn selection(&self) -> Option<&DialogSelection> {
        self.selection.as_ref()
    }

    /// Apply the outcome of a dialog.
    ///
    /// A cancelled dialog (`None`) changes nothing. A single path becomes the
    /// displayed value; several paths clear it. Non-cancelled selections are
    /// handed back for the caller's callback.
    pub fn apply_selection(
        &mut self,
        selection: Option<DialogSelection>,
    ) -> Option<DialogSelection> {
        let selection = selection?;
        match &selection {
            DialogSelection::Single(path) => {
                self.input.set_value(path.to_string_lossy());
            }
            DialogSelection::Multiple(_) => self.input.set_value(""),
        }
        self.selection = Some(selection.clone());
        Some(selection)
    }
}

/// Bounded numeric input moving in fixed steps
#[derive(Debug, Clone, PartialEq)]
pub struct SliderInput {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    value: f64,
}

impl SliderInput {
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        let mut slider = Self {
            min,
            max: max.max(min),
            step,
            value: min,
        };
        slider.set_value(value);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set from user input: clamped, then snapped to the step grid
    pub fn set_value(&mut self, value: f64) {
        let clamped = value.clamp(self.min, self.max);
        self.value = if self.step > 0.0 {
            let steps = ((clamped - self.min) / self.step).round();
            (self.min + steps * self.step).clamp(self.min, self.max)
        } else {
            clamped
        };
    }

    /// Follow an external value without snapping it
    pub fn sync(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increment(&mut self) {
        self.set_value(self.value + self.step);
    }

    pub fn decrement(&mut self) {
        self.set_value(self.value - self.step);
    }

    /// Position of the value between min (0.0) and max (1.0)
    pub fn fraction(&self) -> f64 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }
}

/// On/off switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleInput {
    pub checked: bool,
}

impl ToggleInput {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }

    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_does_not_touch_value() {
        let mut input = TextInput::new("name").with_value("A320");
        input.set_error(Some("Project name cannot be empty".into()));
        assert_eq!(input.value(), "A320");
        input.set_error(None);
        assert_eq!(input.value(), "A320");
        assert!(input.error().is_none());
    }

    #[test]
    fn test_editing() {
        let mut input = TextInput::new("name");
        input.insert_char('A');
        input.insert_char('3');
        input.backspace();
        assert_eq!(input.value(), "A");
        input.clear();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_read_only_refuses_edits() {
        let mut input = TextInput::new("path").with_value("/a").read_only();
        assert!(!input.insert_char('x'));
        assert!(!input.backspace());
        assert!(!input.clear());
        assert_eq!(input.value(), "/a");
    }

    #[test]
    fn test_file_input_cancel_changes_nothing() {
        let mut input = FileInput::new("bundles", OpenDialogOptions::directory()).with_value("/old");
        assert_eq!(input.apply_selection(None), None);
        assert_eq!(input.value(), "/old");
        assert!(input.selection().is_none());
    }

    #[test]
    fn test_file_input_single_sets_value() {
        let mut input = FileInput::new("bundles", OpenDialogOptions::directory());
        let selection = DialogSelection::Single(PathBuf::from("/panel/bundles"));

        let passed_on = input.apply_selection(Some(selection.clone()));
        assert_eq!(passed_on, Some(selection));
        assert_eq!(input.value(), "/panel/bundles");
    }

    #[test]
    fn test_file_input_multiple_clears_value_but_passes_on() {
        let mut input = FileInput::new("files", OpenDialogOptions::default()).with_value("/old");
        let selection =
            DialogSelection::Multiple(vec![PathBuf::from("/a.xml"), PathBuf::from("/b.xml")]);

        let passed_on = input.apply_selection(Some(selection.clone()));
        assert_eq!(passed_on, Some(selection));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_file_input_is_read_only() {
        let mut input = FileInput::new("bundles", OpenDialogOptions::directory());
        assert!(!input.input.insert_char('x'));
    }

    #[test]
    fn test_slider_clamps_and_quantizes() {
        let mut slider = SliderInput::new(0.25, 4.0, 0.25, 1.1);
        assert_eq!(slider.value(), 1.0);

        slider.set_value(10.0);
        assert_eq!(slider.value(), 4.0);
        slider.increment();
        assert_eq!(slider.value(), 4.0);

        slider.set_value(-3.0);
        assert_eq!(slider.value(), 0.25);
        slider.decrement();
        assert_eq!(slider.value(), 0.25);
    }

    #[test]
    fn test_slider_sync_does_not_snap() {
        let mut slider = SliderInput::new(0.25, 4.0, 0.25, 0.25);
        slider.sync(0.2875);
        assert_eq!(slider.value(), 0.2875);
    }

    #[test]
    fn test_slider_fraction() {
        let slider = SliderInput::new(0.0, 10.0, 1.0, 5.0);
        assert_eq!(slider.fraction(), 0.5);
    }

    #[test]
    fn test_toggle() {
        let mut toggle = ToggleInput::default();
        assert!(toggle.toggle());
        assert!(!toggle.toggle());
    }
}
