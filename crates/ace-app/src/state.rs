//! Application state (Model in TEA pattern)

use ace_core::AceProject;
use glam::DVec2;
use uuid::Uuid;

use crate::config::Settings;
use crate::context_menu::{
    canvas_menu_items, canvas_menu_rect, simvars_menu_rect, ActiveMenu, CanvasMenuItem,
    ContextMenuState,
};
use crate::drag::DragCoordinator;
use crate::file_dialog::FileDialogState;
use crate::form::ToggleInput;
use crate::layout::{ScreenRect, WorkspaceLayout};
use crate::project_form::{ProjectField, ProjectForm};
use crate::project_store::ProjectStore;
use crate::simvar_store::SimVarStore;
use crate::viewport::Viewport;

/// Lifecycle of the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Side menu tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTab {
    SimVars,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line banner above the status bar, dismissed with `x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Active project and instrument catalog
    pub project: ProjectStore,

    pub simvars: SimVarStore,

    pub context_menu: ContextMenuState,

    pub viewport: Viewport,

    pub drag: DragCoordinator,

    /// Last pointer position of a background pan, in client pixels
    pub pan_anchor: Option<DVec2>,

    pub layout: WorkspaceLayout,

    /// Open side menu tab
    pub menu_tab: Option<MenuTab>,

    /// Project settings panel; present while a project is active
    pub project_form: Option<ProjectForm>,

    /// Focused project field
    pub focus: Option<ProjectField>,

    /// Instruments receive pointer input instead of being dragged
    pub interactive: ToggleInput,

    pub file_dialog: Option<FileDialogState>,

    pub notice: Option<Notice>,

    /// Element last pressed on the canvas
    pub selected_element: Option<Uuid>,

    /// Cell under the pointer
    pub hover: Option<(u16, u16)>,

    /// Bumped on every mount and teardown; load results carry the id they were issued under
    pub mount_id: u64,
}

impl AppState {
    pub fn new(project: Option<AceProject>, settings: Settings) -> Self {
        let viewport = Viewport::from_settings(&settings.canvas);
        let project_form = project
            .as_ref()
            .map(|p| ProjectForm::from_project(p, &viewport));

        Self {
            phase: AppPhase::Running,
            project: ProjectStore::new(project),
            simvars: SimVarStore::default(),
            context_menu: ContextMenuState::default(),
            viewport,
            drag: DragCoordinator::default(),
            pan_anchor: None,
            layout: WorkspaceLayout::default(),
            menu_tab: None,
            project_form,
            focus: None,
            interactive: ToggleInput::default(),
            file_dialog: None,
            notice: None,
            selected_element: None,
            hover: None,
            mount_id: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Pan and zoom are suspended while an element is being dragged
    pub fn viewport_enabled(&self) -> bool {
        !self.drag.is_active()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = WorkspaceLayout::compute(width, height, self.settings.ui.side_menu_width);
        self.viewport.set_bounds(self.layout.canvas);
    }

    /// Replace the active project and rebuild the settings panel
    pub fn set_project(&mut self, project: AceProject) {
        self.project_form = Some(ProjectForm::from_project(&project, &self.viewport));
        self.project.set_project(project);
        self.selected_element = None;
    }

    pub fn canvas_menu_items(&self) -> Vec<CanvasMenuItem> {
        canvas_menu_items(self.project.instruments())
    }

    /// Number of entries in the open menu
    pub fn active_menu_len(&self) -> usize {
        match self.context_menu.active() {
            Some(ActiveMenu::Canvas(_)) => self.project.instruments().len() + 1,
            Some(ActiveMenu::SimVars(_)) => self.simvars.len(),
            None => 0,
        }
    }

    /// Screen rectangle of the open menu
    pub fn active_menu_rect(&self) -> Option<ScreenRect> {
        match self.context_menu.active()? {
            ActiveMenu::Canvas(menu) => Some(canvas_menu_rect(
                menu,
                &self.canvas_menu_items(),
                self.layout.screen,
            )),
            ActiveMenu::SimVars(_) => Some(simvars_menu_rect(
                self.simvars.len(),
                self.layout.side_menu,
                self.layout.screen,
            )),
        }
    }

    /// Keep the zoom slider in step with the viewport
    pub fn sync_zoom_slider(&mut self) {
        if let Some(form) = self.project_form.as_mut() {
            form.zoom.sync(self.viewport.scale);
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_host::test_utils::test_project;

    #[test]
    fn test_new_state_without_project() {
        let state = AppState::new(None, Settings::default());
        assert!(state.project_form.is_none());
        assert!(state.viewport_enabled());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_resize_centers_viewport_once() {
        let mut state = AppState::new(None, Settings::default());
        state.resize(120, 40);

        assert_eq!(state.layout.canvas.x, 30);
        let centered = state.viewport.offset;
        assert_ne!(centered, DVec2::ZERO);

        state.resize(100, 30);
        assert_eq!(state.viewport.offset, centered);
    }

    #[test]
    fn test_set_project_rebuilds_form() {
        let mut state = AppState::new(Some(test_project("A320", vec![])), Settings::default());
        state.set_project(test_project("B747", vec![]));

        assert_eq!(state.project.name(), Some("B747"));
        assert_eq!(state.project_form.as_ref().unwrap().name.value(), "B747");
    }
}
