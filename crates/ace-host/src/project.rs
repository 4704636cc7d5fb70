//! Opening ACE projects from disk

use std::path::Path;

use ace_core::prelude::*;
use ace_core::{AceConfig, AceProject};

/// Name of the project file at the root of every project directory
pub const PROJECT_FILE: &str = "ace.toml";

/// Check whether a directory contains a project file
pub fn is_ace_project(path: &Path) -> bool {
    path.join(PROJECT_FILE).is_file()
}

/// Read `ace.toml` from `path` and validate the element invariants
pub fn open_project(path: &Path) -> Result<AceProject> {
    let file = path.join(PROJECT_FILE);
    if !file.is_file() {
        return Err(Error::no_project(path));
    }

    let content = std::fs::read_to_string(&file).context("Reading ace.toml")?;
    let config: AceConfig =
        toml::from_str(&content).map_err(|e| Error::project_parse(&file, e.to_string()))?;

    let project = AceProject::new(path, config);
    project.validate()?;

    info!(
        "Opened project '{}' with {} element(s) from {}",
        project.name(),
        project.elements().len(),
        path.display()
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
name = "A32NX"

[paths]
instruments = "src/instruments"
bundles = "bundles"
html_ui = "html_ui"
"#;

    #[test]
    fn test_open_minimal_project() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), MINIMAL).unwrap();

        let project = open_project(dir.path()).unwrap();
        assert_eq!(project.name(), "A32NX");
        assert!(project.elements().is_empty());
        assert_eq!(project.path, dir.path());
    }

    #[test]
    fn test_open_project_with_elements() {
        let dir = tempdir().unwrap();
        let content = format!(
            "{MINIMAL}
[[elements]]
uuid = \"6b0c4f8e-3b0c-4b7e-9d59-2f6c1f9b6a11\"
name = \"PFD\"
element = \"Instrument\"
width = 768.0
height = 768.0
x = 100.0
y = 200.0
"
        );
        std::fs::write(dir.path().join(PROJECT_FILE), content).unwrap();

        let project = open_project(dir.path()).unwrap();
        assert_eq!(project.elements().len(), 1);
        assert_eq!(project.elements()[0].x, 100.0);
    }

    #[test]
    fn test_missing_project_file() {
        let dir = tempdir().unwrap();
        assert!(!is_ace_project(dir.path()));
        let err = open_project(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoProject { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "name = ").unwrap();
        let err = open_project(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ProjectParse { .. }));
    }

    #[test]
    fn test_duplicate_uuids_rejected() {
        let dir = tempdir().unwrap();
        let element = "
[[elements]]
uuid = \"6b0c4f8e-3b0c-4b7e-9d59-2f6c1f9b6a11\"
name = \"PFD\"
element = \"Instrument\"
width = 1.0
height = 1.0
x = 0.0
y = 0.0
";
        let content = format!("{MINIMAL}{element}{element}");
        std::fs::write(dir.path().join(PROJECT_FILE), content).unwrap();

        let err = open_project(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DuplicateElement { .. }));
    }
}
