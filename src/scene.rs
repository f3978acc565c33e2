//! Scene handle shared across passes.
//!
//! The world/camera data model lives elsewhere; passes only need to know
//! *which* scene they hold so they can rebuild scene-dependent resources
//! when it changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(1);

/// Shared scene reference held by passes.
pub type SceneRef = Arc<Scene>;

#[derive(Debug)]
pub struct Scene {
    pub id: u32,
    pub name: String,
}

impl Scene {
    #[must_use]
    pub fn new(name: impl Into<String>) -> SceneRef {
        Arc::new(Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        })
    }
}
