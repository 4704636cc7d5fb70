//! Settings parser for .ace/config.toml

use super::types::Settings;
use ace_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const ACE_DIR: &str = ".ace";

/// Location of the settings file for a project
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(ACE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.ace/config.toml`, falling back to defaults
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings.sanitized()
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.ace/config.toml` with commented defaults.
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let ace_dir = project_path.join(ACE_DIR);

    if !ace_dir.exists() {
        std::fs::create_dir_all(&ace_dir)
            .map_err(|e| Error::config(format!("Failed to create .ace dir: {}", e)))?;
    }

    let config_path = ace_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# ACE Workspace Configuration

[canvas]
initial_scale = 0.25    # Scale when the workspace opens
min_scale = 0.25        # Zooming out stops here
max_scale = 4.0
wheel_step = 0.15       # Relative change per wheel tick
cell_width = 8.0        # Client pixels per terminal column
cell_height = 16.0      # Client pixels per terminal row
center_on_init = true
pan_step = 4            # Columns/rows per arrow key

[ui]
side_menu_width = 30
show_grid = true
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let ace_dir = temp.path().join(".ace");
        std::fs::create_dir_all(&ace_dir).unwrap();

        let config = r#"
[canvas]
max_scale = 8.0
cell_width = 10.0

[ui]
show_grid = false
"#;
        std::fs::write(ace_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.canvas.max_scale, 8.0);
        assert_eq!(settings.canvas.cell_width, 10.0);
        assert!(!settings.ui.show_grid);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let ace_dir = temp.path().join(".ace");
        std::fs::create_dir_all(&ace_dir).unwrap();

        std::fs::write(ace_dir.join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        let path = init_config_dir(temp.path()).unwrap();

        assert_eq!(path, temp.path().join(".ace/config.toml"));
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let config_path = temp.path().join(".ace/config.toml");
        std::fs::write(&config_path, "[ui]\nshow_grid = false\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("show_grid = false"));
    }
}
