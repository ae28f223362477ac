/// CameraTransform: 2D camera driven through two host scene nodes.
///
/// The camera node is moved so the window origin sits at the screen
/// centre; zoom is simulated by scaling the world target node rather than
/// moving the camera. The value is owned by the caller; nothing here is
/// global.

use glam::Vec3;
use crate::config::DisplayConfig;
use crate::extension::AppEvent;
use crate::math::{remap, NodeTransform};
use crate::scene::SceneNode;
use super::camera_state::{CameraState, HALF_MULTIPLIER};

/// Camera state plus the two host nodes it drives.
///
/// Conversions (`screen_to_world`, `local_to_world`, `world_to_local`)
/// return `None` until [`init`](Self::init) has been called, and again
/// after [`release`](Self::release).
#[derive(Debug)]
pub struct CameraTransform<N: SceneNode> {
    state: CameraState,
    camera: Option<N>,
    world_target: Option<N>,
}

impl<N: SceneNode> CameraTransform<N> {
    /// Create an inactive camera for the given reference display size.
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            state: CameraState::new(display),
            camera: None,
            world_target: None,
        }
    }

    // ===== GETTERS =====

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn is_suspended(&self) -> bool {
        self.state.suspended
    }

    /// Camera node, while initialized.
    pub fn camera_node(&self) -> Option<&N> {
        self.camera.as_ref()
    }

    /// World target node, while initialized.
    pub fn world_target(&self) -> Option<&N> {
        self.world_target.as_ref()
    }

    // ===== LIFECYCLE =====

    /// Attach the camera and world target nodes and size the window.
    ///
    /// The starting zoom is the world target's current local X scale.
    /// Replaces any nodes from a previous `init`.
    pub fn init(&mut self, camera: N, world_target: N, width: f32, height: f32) {
        crate::cam_info!("bococam::Camera", "InitCamera: {} {}", width, height);

        self.state.active = true;
        self.state.zoom = world_target.scale().x;
        self.camera = Some(camera);
        self.world_target = Some(world_target);

        self.resize(width, height);
    }

    /// Drop both nodes and deactivate the camera.
    ///
    /// Window, zoom and aspect values are kept.
    pub fn release(&mut self) {
        self.camera = None;
        self.world_target = None;
        self.state.active = false;

        crate::cam_info!("bococam::Camera", "Camera released");
    }

    /// Track focus changes from the host.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Deactivate => self.state.suspended = true,
            AppEvent::Deiconify => self.state.suspended = false,
            AppEvent::Activate | AppEvent::Iconify => {
                crate::cam_info!("bococam::Camera", "OnEvent: {:?}", event);
            }
        }
    }

    // ===== WINDOW / ZOOM =====

    /// Resize the window.
    ///
    /// Recomputes half-extents, aspect and inverse zoom, then moves the
    /// camera node to `(-width/2, -height/2, 0)` and scales the world target
    /// by `zoom * aspect`. The window size is truncated to whole pixels
    /// (aspect excepted). Without attached nodes only the state changes.
    pub fn resize(&mut self, width: f32, height: f32) {
        let scale = self.state.apply_window_size(width, height);

        crate::cam_info!("bococam::Camera", "Scale: {}", scale);

        if self.camera.is_none() && self.world_target.is_none() {
            crate::cam_warn!("bococam::Camera", "Resize to {}x{} without camera nodes", width, height);
        }

        if let Some(camera) = self.camera.as_mut() {
            camera.set_position(Vec3::new(
                self.state.window_width * -HALF_MULTIPLIER,
                self.state.window_height * -HALF_MULTIPLIER,
                0.0,
            ));
        }
        if let Some(world_target) = self.world_target.as_mut() {
            world_target.set_scale(Vec3::splat(scale));
        }
    }

    /// Set the zoom level and scale the world target by it.
    ///
    /// Aspect and inverse zoom are left untouched until the next resize, so
    /// `screen_to_world` keeps using the previous factor.
    pub fn set_zoom(&mut self, zoom: f32) {
        crate::cam_debug!("bococam::Camera", "Zoom: {}", zoom);
        self.state.zoom = zoom;

        if let Some(world_target) = self.world_target.as_mut() {
            world_target.set_scale(Vec3::splat(zoom));
        }
    }

    // ===== CONVERSIONS =====

    /// Convert a centred screen point to world space.
    ///
    /// X and Y are remapped from the window half-extents to the half-extents
    /// scaled by the inverse zoom; Z is passed through.
    pub fn screen_to_world(&self, point: Vec3) -> Option<Vec3> {
        if !self.state.active {
            return None;
        }

        let state = &self.state;
        let (world_half_width, world_half_height) = state.world_half_extents();

        let x = remap(point.x, -state.half_width, state.half_width, -world_half_width, world_half_width);
        let y = remap(point.y, -state.half_height, state.half_height, -world_half_height, world_half_height);

        crate::cam_trace!("bococam::Camera", "screen_to_world {} {} -> {} {}", point.x, point.y, x, y);

        Some(Vec3::new(x, y, point.z))
    }

    /// World position of `node` from its local position and world transform.
    pub fn local_to_world<M: SceneNode + ?Sized>(&self, node: &M) -> Option<Vec3> {
        if !self.state.active {
            return None;
        }
        Some(NodeTransform::from_node(node).local_to_world())
    }

    /// Local position of `node`, computed with the host's legacy formula
    /// (see [`NodeTransform::world_to_local`]).
    pub fn world_to_local<M: SceneNode + ?Sized>(&self, node: &M) -> Option<Vec3> {
        if !self.state.active {
            return None;
        }
        Some(NodeTransform::from_node(node).world_to_local())
    }
}

impl<N: SceneNode> Default for CameraTransform<N> {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

#[cfg(test)]
#[path = "camera_transform_tests.rs"]
mod tests;
