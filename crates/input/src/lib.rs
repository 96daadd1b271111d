//! Input for the nightwalk scene: desktop keyboard state and VR controller
//! sources mapped to the same locomotion loop.
//!
//! # Invariants
//! - Event handlers mutate state strictly between frames; the frame loop is
//!   the only per-frame reader.
//! - Malformed VR input (missing gamepad, short axes array) is "no input
//!   this frame", never an error.

pub mod keys;
pub mod state;
pub mod vr;

pub use keys::{BindingError, KeyBindings, MoveKey};
pub use state::InputState;
pub use vr::{DEAD_ZONE, Handedness, VrInputSource, VrSession};
