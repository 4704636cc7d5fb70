//! Configuration types for the ACE workspace
//!
//! Defines:
//! - `Settings` - Settings read from `.ace/config.toml`
//! - `CanvasSettings` - Viewport and terminal cell geometry
//! - `UiSettings` - Side menu and grid display

use serde::{Deserialize, Serialize};

/// Settings from `.ace/config.toml`
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub canvas: CanvasSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Replace values the viewport cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = CanvasSettings::default();
        let canvas = &mut self.canvas;

        // The default is also the zoom-out floor
        if !(canvas.min_scale.is_finite() && canvas.min_scale >= defaults.min_scale) {
            tracing::warn!(
                "Ignoring canvas.min_scale = {}, the floor is {}",
                canvas.min_scale,
                defaults.min_scale
            );
            canvas.min_scale = defaults.min_scale;
        }
        if !(canvas.max_scale.is_finite() && canvas.max_scale >= canvas.min_scale) {
            tracing::warn!("Ignoring canvas.max_scale = {}", canvas.max_scale);
            canvas.max_scale = defaults.max_scale.max(canvas.min_scale);
        }
        if !canvas.initial_scale.is_finite() {
            canvas.initial_scale = defaults.initial_scale;
        }
        canvas.initial_scale = canvas
            .initial_scale
            .clamp(canvas.min_scale, canvas.max_scale);
        if !(canvas.wheel_step.is_finite() && canvas.wheel_step > 0.0) {
            tracing::warn!("Ignoring canvas.wheel_step = {}", canvas.wheel_step);
            canvas.wheel_step = defaults.wheel_step;
        }
        if !(canvas.cell_width.is_finite() && canvas.cell_width > 0.0) {
            canvas.cell_width = defaults.cell_width;
        }
        if !(canvas.cell_height.is_finite() && canvas.cell_height > 0.0) {
            canvas.cell_height = defaults.cell_height;
        }
        if canvas.pan_step == 0 {
            canvas.pan_step = defaults.pan_step;
        }

        self
    }
}

/// Viewport behaviour and terminal cell geometry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CanvasSettings {
    /// Scale when the workspace opens
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,

    /// Lower zoom bound
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,

    /// Upper zoom bound
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,

    /// Relative scale change per wheel tick
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,

    /// Width of one terminal cell in client pixels
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    /// Height of one terminal cell in client pixels
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,

    /// Center the surface once the canvas size is first known
    #[serde(default = "default_true")]
    pub center_on_init: bool,

    /// Cells moved per arrow key press
    #[serde(default = "default_pan_step")]
    pub pan_step: u16,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            initial_scale: default_initial_scale(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            wheel_step: default_wheel_step(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            center_on_init: true,
            pan_step: default_pan_step(),
        }
    }
}

/// Side menu and canvas decoration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Width of the side menu in columns
    #[serde(default = "default_side_menu_width")]
    pub side_menu_width: u16,

    /// Draw the surface grid
    #[serde(default = "default_true")]
    pub show_grid: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            side_menu_width: default_side_menu_width(),
            show_grid: true,
        }
    }
}

fn default_initial_scale() -> f64 {
    0.25
}

fn default_min_scale() -> f64 {
    0.25
}

fn default_max_scale() -> f64 {
    4.0
}

fn default_wheel_step() -> f64 {
    0.15
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_pan_step() -> u16 {
    4
}

fn default_side_menu_width() -> u16 {
    30
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_workspace_viewport() {
        let settings = Settings::default();
        assert_eq!(settings.canvas.initial_scale, 0.25);
        assert_eq!(settings.canvas.min_scale, 0.25);
        assert_eq!(settings.canvas.wheel_step, 0.15);
        assert!(settings.canvas.center_on_init);
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let settings: Settings = toml::from_str("[canvas]\nmax_scale = 2.0\n").unwrap();
        assert_eq!(settings.canvas.max_scale, 2.0);
        assert_eq!(settings.canvas.min_scale, 0.25);
        assert_eq!(settings.ui.side_menu_width, 30);
    }

    #[test]
    fn test_sanitized_replaces_unusable_values() {
        let mut settings = Settings::default();
        settings.canvas.min_scale = 0.0;
        settings.canvas.max_scale = -1.0;
        settings.canvas.wheel_step = f64::NAN;
        settings.canvas.initial_scale = 100.0;

        let settings = settings.sanitized();
        assert_eq!(settings.canvas.min_scale, 0.25);
        assert_eq!(settings.canvas.max_scale, 4.0);
        assert_eq!(settings.canvas.wheel_step, 0.15);
        assert_eq!(settings.canvas.initial_scale, 4.0);
    }

    #[test]
    fn test_min_scale_cannot_go_below_floor() {
        let settings: Settings = toml::from_str("[canvas]\nmin_scale = 0.1\n").unwrap();
        assert_eq!(settings.sanitized().canvas.min_scale, 0.25);

        let settings: Settings = toml::from_str("[canvas]\nmin_scale = 0.5\n").unwrap();
        let settings = settings.sanitized();
        assert_eq!(settings.canvas.min_scale, 0.5);
        assert_eq!(settings.canvas.initial_scale, 0.5);
    }
}
