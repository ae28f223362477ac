//! Scene-graph access
//!
//! The host engine owns the scene graph. The camera reaches nodes only
//! through the [`SceneNode`] capability trait.

mod scene_node;
mod mock_scene_node;

pub use scene_node::SceneNode;
pub use mock_scene_node::MockSceneNode;
