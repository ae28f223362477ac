//! Integration tests for boco_kiddo::world_position
//!
//! Run with: cargo test -p boco_kiddo

use boco_camera::bococam::camera::CameraTransform;
use boco_camera::bococam::scene::{MockSceneNode, SceneNode};
use boco_camera::glam::{Quat, Vec3};
use boco_kiddo::world_position;

#[test]
fn test_world_position_identity() {
    let node = MockSceneNode::new(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(world_position(&node), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_world_position_adds_translation_then_divides_scale() {
    let node = MockSceneNode::with_world(
        Vec3::new(2.0, 4.0, 6.0),
        Vec3::new(2.0, 0.0, -2.0),
        Quat::IDENTITY,
        Vec3::new(2.0, 4.0, 4.0),
    );

    assert_eq!(world_position(&node), Vec3::new(2.0, 1.0, 1.0));
}

#[test]
fn test_world_position_applies_inverse_rotation() {
    let node = MockSceneNode::with_world(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::ZERO,
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::ONE,
    );

    // Rotating (1,0,0) by -90deg about Y gives (0,0,1)
    assert!(world_position(&node).abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-5));
}

#[test]
fn test_world_position_works_without_camera() {
    let node: Box<dyn SceneNode> = Box::new(MockSceneNode::new(Vec3::ONE));
    assert_eq!(world_position(node.as_ref()), Vec3::ONE);
}

#[test]
fn test_world_position_matches_active_camera_world_to_local() {
    let mut camera: CameraTransform<MockSceneNode> = CameraTransform::default();
    camera.init(MockSceneNode::default(), MockSceneNode::with_scale(1.0), 1280.0, 720.0);

    let node = MockSceneNode::with_world(
        Vec3::new(3.0, -1.0, 0.5),
        Vec3::new(-4.0, 2.0, 1.0),
        Quat::from_rotation_z(0.3),
        Vec3::new(1.5, 0.5, 2.0),
    );

    assert_eq!(camera.world_to_local(&node), Some(world_position(&node)));
}
