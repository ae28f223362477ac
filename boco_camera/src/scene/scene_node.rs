use glam::{Quat, Vec3};

/// Capability trait over a host scene-graph node.
///
/// Implemented by the host binding layer for its own object handles.
/// Getters read the host's cached transforms; setters write the node's
/// local transform.
pub trait SceneNode {
    /// Position in world space.
    fn world_position(&self) -> Vec3;

    /// Rotation in world space (unit quaternion).
    fn world_rotation(&self) -> Quat;

    /// Scale in world space.
    fn world_scale(&self) -> Vec3;

    /// Position relative to the parent node.
    fn position(&self) -> Vec3;

    /// Scale relative to the parent node.
    fn scale(&self) -> Vec3;

    /// Set the position relative to the parent node.
    fn set_position(&mut self, position: Vec3);

    /// Set the scale relative to the parent node.
    fn set_scale(&mut self, scale: Vec3);
}

impl<N: SceneNode + ?Sized> SceneNode for Box<N> {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }

    fn world_rotation(&self) -> Quat {
        (**self).world_rotation()
    }

    fn world_scale(&self) -> Vec3 {
        (**self).world_scale()
    }

    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn scale(&self) -> Vec3 {
        (**self).scale()
    }

    fn set_position(&mut self, position: Vec3) {
        (**self).set_position(position)
    }

    fn set_scale(&mut self, scale: Vec3) {
        (**self).set_scale(scale)
    }
}
