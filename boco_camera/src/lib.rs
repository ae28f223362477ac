/*!
# Boco Camera

Camera transform and coordinate-conversion helpers for a host game engine.

The host owns the scene graph. This crate only sees scene nodes through the
[`SceneNode`](scene::SceneNode) capability trait, and keeps the camera state in
a caller-owned [`CameraTransform`](camera::CameraTransform) value.

## Architecture

- **CameraTransform**: camera state plus resize, zoom and coordinate conversion
- **SceneNode**: host scene-graph node capability (positions, rotation, scale)
- **DisplayConfig**: reference display size read from the host configuration
- **Extension**: logger registry, app-level configuration and app events
*/

// Internal modules
mod error;
mod extension;
mod config;
pub mod log;
pub mod math;
pub mod camera;
pub mod scene;

// Main bococam namespace module
pub mod bococam {
    // Error types
    pub use crate::error::{Error, Result};

    // Extension facade
    pub use crate::extension::{Extension, AppEvent};

    // Configuration
    pub use crate::config::{ConfigSource, DisplayConfig, ProjectConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: cam_* macros are NOT re-exported here - they are internal only
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
