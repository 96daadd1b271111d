//! Rendering adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - The renderer never mutates the camera or the scene.
//! - Render output derives only from the camera pose and the per-light
//!   intensities produced by the frame loop.
//!
//! # Workaround
//! Provides a trait-based renderer interface with a debug text renderer as a
//! workaround for a GPU backend. The trait is stable; swap in a wgpu
//! implementation without changing consumers.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "nightwalk-render v0.1.0"
}
