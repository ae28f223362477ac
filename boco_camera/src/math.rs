//! Transform math used by the camera and the world-position helper.
//!
//! All functions are pure; scene nodes are read once into a
//! [`NodeTransform`] snapshot.

use glam::{Quat, Vec3};
use crate::scene::SceneNode;

/// Linearly remap `value` from `[low1, high1]` to `[low2, high2]`.
///
/// No clamping. A degenerate source range (`low1 == high1`) yields a
/// non-finite result.
pub fn remap(value: f32, low1: f32, high1: f32, low2: f32, high2: f32) -> f32 {
    low2 + (value - low1) * (high2 - low2) / (high1 - low1)
}

/// Snapshot of the transform inputs read from a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Local position
    pub position: Vec3,
    pub world_position: Vec3,
    pub world_rotation: Quat,
    pub world_scale: Vec3,
}

impl NodeTransform {
    /// Read the four transform inputs from `node`.
    pub fn from_node<N: SceneNode + ?Sized>(node: &N) -> Self {
        Self {
            position: node.position(),
            world_position: node.world_position(),
            world_rotation: node.world_rotation(),
            world_scale: node.world_scale(),
        }
    }

    /// `rotate(world_rotation, position * world_scale) + world_position`
    pub fn local_to_world(&self) -> Vec3 {
        self.world_rotation * (self.position * self.world_scale) + self.world_position
    }

    /// `rotate(conjugate(world_rotation), position + world_position) / world_scale`
    ///
    /// Not the inverse of [`local_to_world`](Self::local_to_world): the world
    /// position is added rather than subtracted, and scale is divided out
    /// after the rotation. Existing scripts depend on this exact result.
    pub fn world_to_local(&self) -> Vec3 {
        self.world_rotation.conjugate() * (self.position + self.world_position) / self.world_scale
    }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
