use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an animated light in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LightId(pub Uuid);

impl LightId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LightId {
    fn default() -> Self {
        Self::new()
    }
}
