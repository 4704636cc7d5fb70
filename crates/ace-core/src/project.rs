//! Project model: placed elements and the project configuration that owns them

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::instrument::InstrumentConfig;

/// Kind tag of a placed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ElementKind {
    #[default]
    Instrument,
}

/// An element placed on the workspace canvas.
///
/// `uuid` is the element's identity and never changes; `x`/`y` move with drags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Element {
    pub uuid: Uuid,
    pub name: String,
    pub element: ElementKind,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl Element {
    /// Create an instrument element from a catalog entry at a surface position
    pub fn from_instrument(instrument: &InstrumentConfig, x: f64, y: f64) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: instrument.name.clone(),
            element: ElementKind::Instrument,
            width: instrument.dimensions.width,
            height: instrument.dimensions.height,
            x,
            y,
        }
    }

    /// Move the element by a delta in surface units
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Whether a surface point falls inside this element's bounds
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Filesystem bindings of a project, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ProjectPaths {
    pub instruments: PathBuf,
    pub bundles: PathBuf,
    pub html_ui: PathBuf,
}

/// Project configuration (`ace.toml`)
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct AceConfig {
    pub name: String,
    pub paths: ProjectPaths,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A project configuration bound to the directory it was loaded from
#[derive(Debug, Clone, PartialEq)]
pub struct AceProject {
    pub path: PathBuf,
    pub config: AceConfig,
}

impl AceProject {
    pub fn new(path: impl Into<PathBuf>, config: AceConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.config.elements
    }

    /// Check the uuid-uniqueness invariant
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for element in &self.config.elements {
            if !seen.insert(element.uuid) {
                return Err(Error::duplicate_element(element.uuid));
            }
        }
        Ok(())
    }

    pub fn element(&self, uuid: Uuid) -> Option<&Element> {
        self.config.elements.iter().find(|e| e.uuid == uuid)
    }

    pub fn element_mut(&mut self, uuid: Uuid) -> Option<&mut Element> {
        self.config.elements.iter_mut().find(|e| e.uuid == uuid)
    }

    /// Add an element, refusing a uuid that is already present
    pub fn add_element(&mut self, element: Element) -> Result<()> {
        if self.element(element.uuid).is_some() {
            return Err(Error::duplicate_element(element.uuid));
        }
        self.config.elements.push(element);
        Ok(())
    }

    pub fn remove_element(&mut self, uuid: Uuid) -> Option<Element> {
        let index = self.config.elements.iter().position(|e| e.uuid == uuid)?;
        Some(self.config.elements.remove(index))
    }

    /// Topmost element containing a surface point (last drawn wins)
    pub fn element_at(&self, x: f64, y: f64) -> Option<&Element> {
        self.config.elements.iter().rev().find(|e| e.contains(x, y))
    }

    pub fn instruments_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.instruments)
    }

    pub fn bundles_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.bundles)
    }

    pub fn html_ui_dir(&self) -> PathBuf {
        self.resolve(&self.config.paths.html_ui)
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.path.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Dimensions;

    fn element(x: f64, y: f64) -> Element {
        Element {
            uuid: Uuid::new_v4(),
            name: "PFD".to_string(),
            element: ElementKind::Instrument,
            width: 100.0,
            height: 50.0,
            x,
            y,
        }
    }

    fn project() -> AceProject {
        AceProject::new(
            "/projects/a320",
            AceConfig {
                name: "A320".to_string(),
                paths: ProjectPaths {
                    instruments: PathBuf::from("src/instruments"),
                    bundles: PathBuf::from("bundles"),
                    html_ui: PathBuf::from("html_ui"),
                },
                elements: Vec::new(),
            },
        )
    }

    #[test]
    fn test_element_deserializes_host_shape() {
        let json = r#"{
            "uuid": "6b0c4f8e-3b0c-4b7e-9d59-2f6c1f9b6a11",
            "name": "PFD",
            "element": "Instrument",
            "width": 768,
            "height": 768,
            "x": 10,
            "y": 20
        }"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.element, ElementKind::Instrument);
        assert_eq!(el.width, 768.0);
        assert_eq!(el.y, 20.0);
    }

    #[test]
    fn test_translate_is_additive() {
        let mut el = element(10.0, 20.0);
        el.translate(5.0, -30.0);
        assert_eq!((el.x, el.y), (15.0, -10.0));
    }

    #[test]
    fn test_contains_uses_half_open_bounds() {
        let el = element(0.0, 0.0);
        assert!(el.contains(0.0, 0.0));
        assert!(el.contains(99.9, 49.9));
        assert!(!el.contains(100.0, 10.0));
        assert!(!el.contains(-0.1, 10.0));
    }

    #[test]
    fn test_add_element_rejects_duplicate_uuid() {
        let mut project = project();
        let el = element(0.0, 0.0);
        project.add_element(el.clone()).unwrap();
        let err = project.add_element(el).unwrap_err();
        assert!(matches!(err, Error::DuplicateElement { .. }));
        assert_eq!(project.elements().len(), 1);
    }

    #[test]
    fn test_validate_detects_duplicates() {
        let mut project = project();
        let el = element(0.0, 0.0);
        project.config.elements.push(el.clone());
        project.config.elements.push(el);
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_element_at_prefers_topmost() {
        let mut project = project();
        let bottom = element(0.0, 0.0);
        let top = element(50.0, 0.0);
        let top_id = top.uuid;
        project.add_element(bottom).unwrap();
        project.add_element(top).unwrap();

        assert_eq!(project.element_at(60.0, 10.0).map(|e| e.uuid), Some(top_id));
        assert!(project.element_at(500.0, 500.0).is_none());
    }

    #[test]
    fn test_remove_element() {
        let mut project = project();
        let el = element(0.0, 0.0);
        let id = el.uuid;
        project.add_element(el).unwrap();
        assert!(project.remove_element(id).is_some());
        assert!(project.remove_element(id).is_none());
    }

    #[test]
    fn test_path_bindings_resolve_against_project_dir() {
        let project = project();
        assert_eq!(
            project.bundles_dir(),
            PathBuf::from("/projects/a320/bundles")
        );
        assert_eq!(
            project.instruments_dir(),
            PathBuf::from("/projects/a320/src/instruments")
        );
    }

    #[test]
    fn test_from_instrument_copies_dimensions() {
        let config = InstrumentConfig {
            index: "PFD".to_string(),
            is_interactive: false,
            name: "Primary Flight Display".to_string(),
            dimensions: Dimensions {
                width: 768.0,
                height: 512.0,
            },
        };
        let el = Element::from_instrument(&config, 1.0, 2.0);
        assert_eq!(el.name, "Primary Flight Display");
        assert_eq!((el.width, el.height), (768.0, 512.0));
        assert_eq!((el.x, el.y), (1.0, 2.0));
    }
}
