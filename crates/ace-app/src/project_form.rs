//! Project settings panel built from form controls

use ace_core::AceProject;
use ace_host::OpenDialogOptions;

use crate::form::{FileInput, SliderInput, TextInput};
use crate::project_store::PathBinding;
use crate::viewport::Viewport;

/// Shown next to the name field while it is empty
pub const EMPTY_NAME_ERROR: &str = "Project name cannot be empty";

/// Zoom slider increment
const ZOOM_STEP: f64 = 0.05;

/// Focusable fields of the panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Instruments,
    Bundles,
    HtmlUi,
    Zoom,
}

impl ProjectField {
    pub const COUNT: usize = 5;

    pub const ALL: [ProjectField; Self::COUNT] = [
        ProjectField::Name,
        ProjectField::Instruments,
        ProjectField::Bundles,
        ProjectField::HtmlUi,
        ProjectField::Zoom,
    ];

    pub fn position(&self) -> usize {
        match self {
            ProjectField::Name => 0,
            ProjectField::Instruments => 1,
            ProjectField::Bundles => 2,
            ProjectField::HtmlUi => 3,
            ProjectField::Zoom => 4,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::COUNT]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::COUNT - 1) % Self::COUNT]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectField::Name => "Name",
            ProjectField::Zoom => "Zoom",
            other => other.binding().map(|b| b.label()).unwrap_or_default(),
        }
    }

    /// The path binding edited by a file field
    pub fn binding(&self) -> Option<PathBinding> {
        match self {
            ProjectField::Instruments => Some(PathBinding::Instruments),
            ProjectField::Bundles => Some(PathBinding::Bundles),
            ProjectField::HtmlUi => Some(PathBinding::HtmlUi),
            ProjectField::Name | ProjectField::Zoom => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub name: TextInput,
    pub instruments: FileInput,
    pub bundles: FileInput,
    pub html_ui: FileInput,
    pub zoom: SliderInput,
}

impl ProjectForm {
    pub fn from_project(project: &AceProject, viewport: &Viewport) -> Self {
        let paths = &project.config.paths;
        let directory = |title: &str, default: std::path::PathBuf| {
            OpenDialogOptions::directory()
                .with_title(title)
                .with_default_path(default)
        };

        let mut zoom = SliderInput::new(
            viewport.min_scale(),
            viewport.max_scale(),
            ZOOM_STEP,
            viewport.scale,
        );
        zoom.sync(viewport.scale);

        let mut form = Self {
            name: TextInput::new("name")
                .with_label("Name")
                .with_value(project.name()),
            instruments: FileInput::new(
                "instruments",
                directory("Select instruments directory", project.instruments_dir()),
            )
            .with_value(paths.instruments.to_string_lossy()),
            bundles: FileInput::new(
                "bundles",
                directory("Select bundles directory", project.bundles_dir()),
            )
            .with_value(paths.bundles.to_string_lossy()),
            html_ui: FileInput::new(
                "html_ui",
                directory("Select html_ui directory", project.html_ui_dir()),
            )
            .with_value(paths.html_ui.to_string_lossy()),
            zoom,
        };
        form.validate_name();
        form
    }

    /// Refresh the name field's error indicator
    pub fn validate_name(&mut self) {
        let error = self
            .name
            .value()
            .trim()
            .is_empty()
            .then(|| EMPTY_NAME_ERROR.to_string());
        self.name.set_error(error);
    }

    pub fn file_input(&self, binding: PathBinding) -> &FileInput {
        match binding {
            PathBinding::Instruments => &self.instruments,
            PathBinding::Bundles => &self.bundles,
            PathBinding::HtmlUi => &self.html_ui,
        }
    }

    pub fn file_input_mut(&mut self, binding: PathBinding) -> &mut FileInput {
        match binding {
            PathBinding::Instruments => &mut self.instruments,
            PathBinding::Bundles => &mut self.bundles,
            PathBinding::HtmlUi => &mut self.html_ui,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_host::test_utils::test_project;

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(ProjectField::Zoom.next(), ProjectField::Name);
        assert_eq!(ProjectField::Name.prev(), ProjectField::Zoom);
        for field in ProjectField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn test_from_project_fills_fields() {
        let project = test_project("A320", vec![]);
        let form = ProjectForm::from_project(&project, &Viewport::default());

        assert_eq!(form.name.value(), "A320");
        assert!(form.name.error().is_none());
        assert_eq!(form.instruments.value(), "instruments");
        assert!(form.instruments.input.is_read_only());
        assert!(form.bundles.options.directory);
        assert_eq!(form.zoom.value(), 0.25);
    }

    #[test]
    fn test_empty_name_shows_error() {
        let project = test_project("A320", vec![]);
        let mut form = ProjectForm::from_project(&project, &Viewport::default());

        form.name.clear();
        form.validate_name();
        assert_eq!(form.name.error(), Some(EMPTY_NAME_ERROR));

        form.name.insert_char('B');
        form.validate_name();
        assert!(form.name.error().is_none());
    }
}
