//! Procedural night scene: ground plane, tree ring, candle-lit pumpkins,
//! moon, and the static night lighting.
//!
//! # Invariants
//! - Scene builds are deterministic for a fixed seed.
//! - Flicker phases are assigned once at build time and never mutated.
//! - The scene owns decorative state only; the camera pose lives elsewhere.

pub mod inspector;
pub mod scene;

pub use inspector::{SceneInspector, SceneSummary};
pub use scene::{Moon, NightLighting, NightScene, PointLight, Pumpkin, SceneError, Tree};
