//! Shared types for the nightwalk scene: camera pose, light identity,
//! deterministic RNG.
//!
//! # Invariants
//! - Camera pose is the only spatial state shared between locomotion and
//!   rendering.
//! - All randomness flows through the seedable [`SceneRng`] so scene builds
//!   and flicker noise are reproducible.

pub mod camera;
pub mod rng;
pub mod types;

pub use camera::WalkCamera;
pub use rng::SceneRng;
pub use types::LightId;
