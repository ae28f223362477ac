//! Mock scene node for tests (no host engine required)

use glam::{Quat, Vec3};
use super::SceneNode;

/// In-memory scene node.
///
/// Stores local and world transforms independently, the way a host would
/// report them after its transform pass, and counts setter calls so tests
/// can check which host mutations a camera operation performed.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSceneNode {
    pub position: Vec3,
    pub scale: Vec3,
    pub world_position: Vec3,
    pub world_rotation: Quat,
    pub world_scale: Vec3,
    pub set_position_calls: u32,
    pub set_scale_calls: u32,
}

impl Default for MockSceneNode {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            world_position: Vec3::ZERO,
            world_rotation: Quat::IDENTITY,
            world_scale: Vec3::ONE,
            set_position_calls: 0,
            set_scale_calls: 0,
        }
    }
}

impl MockSceneNode {
    /// Root node: identity world transform, given local position.
    pub fn new(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    /// Node with a uniform local scale, as used for a world target.
    pub fn with_scale(scale: f32) -> Self {
        Self { scale: Vec3::splat(scale), ..Self::default() }
    }

    /// Node with explicit local position and world transform.
    pub fn with_world(position: Vec3, world_position: Vec3, world_rotation: Quat, world_scale: Vec3) -> Self {
        Self {
            position,
            world_position,
            world_rotation,
            world_scale,
            ..Self::default()
        }
    }
}

impl SceneNode for MockSceneNode {
    fn world_position(&self) -> Vec3 {
        self.world_position
    }

    fn world_rotation(&self) -> Quat {
        self.world_rotation
    }

    fn world_scale(&self) -> Vec3 {
        self.world_scale
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.set_position_calls += 1;
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.set_scale_calls += 1;
    }
}
