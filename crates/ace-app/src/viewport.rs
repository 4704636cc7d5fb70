//! Camera state for the workspace canvas
//!
//! The canvas shows a fixed-size virtual surface through a translate + scale
//! transform. `offset` is the client-pixel position of the surface origin
//! relative to the canvas origin, so
//! `client = origin + offset + surface * scale`.

use glam::DVec2;

use crate::config::CanvasSettings;
use crate::layout::ScreenRect;

/// Width of the virtual surface in surface units
pub const SURFACE_WIDTH: f64 = 8000.0;
/// Height of the virtual surface in surface units
pub const SURFACE_HEIGHT: f64 = 5000.0;

/// Pan/zoom transform of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Current zoom level (1.0 = one surface unit per client pixel)
    pub scale: f64,
    /// Surface origin relative to the canvas origin, in client pixels
    pub offset: DVec2,
    /// Client-pixel position of the canvas' top-left corner
    pub origin: DVec2,
    /// Canvas size in client pixels
    pub size: DVec2,
    /// Client pixels per terminal cell
    pub cell: DVec2,
    initial_scale: f64,
    min_scale: f64,
    max_scale: f64,
    wheel_step: f64,
    center_on_init: bool,
    initialized: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_settings(&CanvasSettings::default())
    }
}

impl Viewport {
    pub fn from_settings(settings: &CanvasSettings) -> Self {
        Self {
            scale: settings.initial_scale,
            offset: DVec2::ZERO,
            origin: DVec2::ZERO,
            size: DVec2::ZERO,
            cell: DVec2::new(settings.cell_width, settings.cell_height),
            initial_scale: settings.initial_scale,
            min_scale: settings.min_scale,
            max_scale: settings.max_scale,
            wheel_step: settings.wheel_step,
            center_on_init: settings.center_on_init,
            initialized: false,
        }
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Track the canvas rectangle; the first non-empty size centers the surface.
    pub fn set_bounds(&mut self, canvas: ScreenRect) {
        self.origin = self.cell_to_client(canvas.x, canvas.y);
        self.size = DVec2::new(
            f64::from(canvas.width) * self.cell.x,
            f64::from(canvas.height) * self.cell.y,
        );

        if !self.initialized && !canvas.is_empty() {
            self.initialized = true;
            if self.center_on_init {
                self.center();
            }
        }
    }

    /// Client-pixel position of the top-left corner of a cell
    pub fn cell_to_client(&self, column: u16, row: u16) -> DVec2 {
        DVec2::new(f64::from(column), f64::from(row)) * self.cell
    }

    /// Client-pixel position of the centre of a cell
    pub fn cell_center(&self, column: u16, row: u16) -> DVec2 {
        self.cell_to_client(column, row) + self.cell / 2.0
    }

    pub fn client_to_surface(&self, client: DVec2) -> DVec2 {
        (client - self.origin - self.offset) / self.scale
    }

    pub fn surface_to_client(&self, surface: DVec2) -> DVec2 {
        self.origin + self.offset + surface * self.scale
    }

    /// Surface point under the centre of a cell
    pub fn cell_to_surface(&self, column: u16, row: u16) -> DVec2 {
        self.client_to_surface(self.cell_center(column, row))
    }

    /// Fractional cell position of a surface point
    pub fn surface_to_cell(&self, surface: DVec2) -> DVec2 {
        self.surface_to_client(surface) / self.cell
    }

    /// Size of the surface in client pixels at the current scale
    pub fn scaled_surface(&self) -> DVec2 {
        DVec2::new(SURFACE_WIDTH, SURFACE_HEIGHT) * self.scale
    }

    /// Move the surface by a client-pixel delta. Stops exactly where it is told.
    pub fn pan(&mut self, delta: DVec2) {
        self.offset += delta;
    }

    /// Apply `ticks` wheel steps around a client point.
    ///
    /// Positive ticks zoom in by `1 + wheel_step` each, negative ticks zoom
    /// out by the same factor. The surface point under `client` stays put.
    pub fn zoom_at(&mut self, client: DVec2, ticks: i32) {
        let factor = (1.0 + self.wheel_step).powi(ticks);
        self.set_scale_at(client, self.scale * factor);
    }

    /// Zoom around the centre of the canvas
    pub fn zoom_centered(&mut self, ticks: i32) {
        self.zoom_at(self.center_client(), ticks);
    }

    /// Set an absolute scale around the centre of the canvas
    pub fn set_scale(&mut self, scale: f64) {
        self.set_scale_at(self.center_client(), scale);
    }

    fn set_scale_at(&mut self, client: DVec2, scale: f64) {
        let new_scale = scale.clamp(self.min_scale, self.max_scale);
        if new_scale == self.scale {
            return;
        }

        let anchor = self.client_to_surface(client);
        self.scale = new_scale;
        self.offset = client - self.origin - anchor * new_scale;
    }

    fn center_client(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    /// Center the surface in the canvas at the current scale
    pub fn center(&mut self) {
        self.offset = (self.size - self.scaled_surface()) / 2.0;
    }

    /// Back to the initial scale, centered
    pub fn reset(&mut self) {
        self.scale = self.initial_scale;
        self.center();
    }
}
