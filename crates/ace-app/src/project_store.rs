//! Project store
//!
//! Holds the active project and the instrument catalog. The active project is
//! replaced wholesale on load; elements are only mutated through the
//! operations here so the uuid-uniqueness invariant holds.

use std::path::{Path, PathBuf};

use ace_core::prelude::*;
use ace_core::{AceProject, Element, InstrumentConfig};
use uuid::Uuid;

use crate::drag::PositionUpdate;
use crate::load_status::LoadStatus;

/// One of the project's filesystem bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathBinding {
    Instruments,
    Bundles,
    HtmlUi,
}

impl PathBinding {
    pub fn label(&self) -> &'static str {
        match self {
            PathBinding::Instruments => "Instruments",
            PathBinding::Bundles => "Bundles",
            PathBinding::HtmlUi => "HTML UI",
        }
    }
}

#[derive(Debug, Default)]
pub struct ProjectStore {
    active: Option<AceProject>,
    instruments: Vec<InstrumentConfig>,
    pub instruments_status: LoadStatus,
}

impl ProjectStore {
    pub fn new(project: Option<AceProject>) -> Self {
        Self {
            active: project,
            ..Self::default()
        }
    }

    pub fn active(&self) -> Option<&AceProject> {
        self.active.as_ref()
    }

    /// Name of the active project
    pub fn name(&self) -> Option<&str> {
        self.active.as_ref().map(AceProject::name)
    }

    /// Replace the active project
    pub fn set_project(&mut self, project: AceProject) {
        info!("Switched to project [{}]", project.name());
        self.active = Some(project);
    }

    pub fn instruments(&self) -> &[InstrumentConfig] {
        &self.instruments
    }

    pub fn instrument(&self, index: &str) -> Option<&InstrumentConfig> {
        self.instruments.iter().find(|i| i.index == index)
    }

    /// Replace the instrument catalog
    pub fn set_instruments(&mut self, instruments: Vec<InstrumentConfig>) -> usize {
        self.instruments = instruments;
        self.instruments_status = LoadStatus::Loaded;
        self.instruments.len()
    }

    pub fn elements(&self) -> &[Element] {
        self.active.as_ref().map(AceProject::elements).unwrap_or(&[])
    }

    pub fn element(&self, uuid: Uuid) -> Option<&Element> {
        self.active.as_ref()?.element(uuid)
    }

    /// Topmost element at a surface point
    pub fn element_at(&self, x: f64, y: f64) -> Option<&Element> {
        self.active.as_ref()?.element_at(x, y)
    }

    /// Apply a committed drag. Returns `false` if the element is gone.
    pub fn update_element_position(&mut self, update: PositionUpdate) -> bool {
        let Some(element) = self
            .active
            .as_mut()
            .and_then(|p| p.element_mut(update.uuid))
        else {
            debug!("Dropped element {} no longer exists", update.uuid);
            return false;
        };

        element.translate(update.dx, update.dy);
        trace!(
            "Moved {} by ({:.1}, {:.1}) to ({:.1}, {:.1})",
            update.uuid,
            update.dx,
            update.dy,
            element.x,
            element.y
        );
        true
    }

    /// Place a catalog instrument with its top-left corner at a surface point
    pub fn place_instrument(&mut self, index: &str, x: f64, y: f64) -> Result<Uuid> {
        let instrument = self
            .instrument(index)
            .ok_or_else(|| Error::project_invalid(format!("Unknown instrument '{}'", index)))?;
        let element = Element::from_instrument(instrument, x, y);
        let uuid = element.uuid;

        let project = self
            .active
            .as_mut()
            .ok_or_else(|| Error::project_invalid("No active project"))?;
        project.add_element(element)?;

        info!("Placed {} at ({:.0}, {:.0})", index, x, y);
        Ok(uuid)
    }

    pub fn remove_element(&mut self, uuid: Uuid) -> Option<Element> {
        self.active.as_mut()?.remove_element(uuid)
    }

    pub fn rename(&mut self, name: &str) {
        if let Some(project) = self.active.as_mut() {
            project.config.name = name.to_string();
        }
    }

    /// Configured path of a binding, as written in the project file
    pub fn path(&self, binding: PathBinding) -> Option<&Path> {
        let paths = &self.active.as_ref()?.config.paths;
        Some(match binding {
            PathBinding::Instruments => &paths.instruments,
            PathBinding::Bundles => &paths.bundles,
            PathBinding::HtmlUi => &paths.html_ui,
        })
    }

    /// Rebind a path. Paths inside the project directory are stored relative.
    pub fn set_path(&mut self, binding: PathBinding, path: &Path) {
        let Some(project) = self.active.as_mut() else {
            return;
        };

        let stored: PathBuf = path
            .strip_prefix(&project.path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());
        let paths = &mut project.config.paths;
        let slot = match binding {
            PathBinding::Instruments => &mut paths.instruments,
            PathBinding::Bundles => &mut paths.bundles,
            PathBinding::HtmlUi => &mut paths.html_ui,
        };

        debug!("{} path set to {}", binding.label(), stored.display());
        *slot = stored;
    }
}
