//! Camera module: state and coordinate conversion.
//!
//! The camera is a tool owned and driven by the caller. It reads and writes
//! host nodes only through [`SceneNode`](crate::scene::SceneNode).

mod camera_state;
mod camera_transform;

pub use camera_state::{CameraState, HALF_MULTIPLIER};
pub use camera_transform::CameraTransform;
