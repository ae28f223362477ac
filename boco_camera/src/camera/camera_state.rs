/// CameraState: window, reference display and zoom values of one camera.
///
/// A plain value. `CameraTransform` is the only writer; the fields are
/// readable so scripts and tests can inspect the derived factors.

use crate::config::DisplayConfig;

/// Half-extent multiplier applied to the window size
pub const HALF_MULTIPLIER: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub window_width: f32,
    pub window_height: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Reference display size from the host configuration
    pub display_width: u32,
    pub display_height: u32,
    pub zoom: f32,
    /// `min(window_width / display_width, window_height / display_height)`
    pub aspect: f32,
    /// `1 / (zoom * aspect)`, refreshed on every resize
    pub inv_zoom: f32,
    pub active: bool,
    pub suspended: bool,
}

impl CameraState {
    /// Window sized to the reference display, zoom and aspect of 1.
    pub fn new(display: DisplayConfig) -> Self {
        let window_width = display.width as f32;
        let window_height = display.height as f32;
        let zoom = 1.0;
        let aspect = 1.0;

        Self {
            window_width,
            window_height,
            half_width: window_width * HALF_MULTIPLIER,
            half_height: window_height * HALF_MULTIPLIER,
            display_width: display.width,
            display_height: display.height,
            zoom,
            aspect,
            inv_zoom: 1.0 / (zoom * aspect),
            active: false,
            suspended: false,
        }
    }

    /// Store a new window size and recompute half-extents, aspect and
    /// inverse zoom. Returns the combined `zoom * aspect` scale.
    ///
    /// Aspect uses the size as given; the stored window size and
    /// half-extents use the size truncated to whole pixels.
    pub fn apply_window_size(&mut self, width: f32, height: f32) -> f32 {
        let display_scale_x = width / self.display_width as f32;
        let display_scale_y = height / self.display_height as f32;
        self.aspect = display_scale_x.min(display_scale_y);

        let width = width.trunc();
        let height = height.trunc();

        self.window_width = width;
        self.window_height = height;

        self.half_width = width * HALF_MULTIPLIER;
        self.half_height = height * HALF_MULTIPLIER;

        let scale = self.scale();
        self.inv_zoom = 1.0 / scale;
        scale
    }

    /// Combined `zoom * aspect` factor applied to the world target.
    pub fn scale(&self) -> f32 {
        self.zoom * self.aspect
    }

    /// Half-extents multiplied by the inverse zoom: the world-space
    /// half-size visible through the window.
    pub fn world_half_extents(&self) -> (f32, f32) {
        (self.half_width * self.inv_zoom, self.half_height * self.inv_zoom)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

#[cfg(test)]
#[path = "camera_state_tests.rs"]
mod tests;
