//! Boco Kiddo
//!
//! Standalone world-position helper for host scene nodes. Unlike the
//! camera conversions it needs no camera and is always available.

use boco_camera::bococam::math::NodeTransform;
use boco_camera::bococam::scene::SceneNode;
use glam::Vec3;

/// World position of `node`, computed as
/// `rotate(conjugate(world_rotation), position + world_position) / world_scale`.
///
/// Matches `CameraTransform::world_to_local` for the same node, without the
/// active-camera check.
pub fn world_position<N: SceneNode + ?Sized>(node: &N) -> Vec3 {
    let result = NodeTransform::from_node(node).world_to_local();
    boco_camera::cam_trace!("bocokiddo", "get_world_position -> {}", result);
    result
}
