//! Per-frame update loop for the nightwalk scene: desktop and VR locomotion
//! plus candle-flicker animation.
//!
//! # Invariants
//! - Exactly one locomotion path runs per frame, selected by the VR
//!   presenting flag.
//! - Elapsed time entering the loop is clamped to [`clock::MAX_FRAME_DT`].
//! - The camera never sinks below the eye-height floor while grounded.
//! - Flicker intensities are recomputed every frame, never cached.

pub mod clock;
pub mod desktop;
pub mod flicker;
pub mod frame;
pub mod vr;

pub use clock::{FrameClock, FrameTimer, MAX_FRAME_DT};
pub use desktop::DesktopLocomotion;
pub use flicker::{CandleFlicker, Flicker};
pub use frame::{FrameInputs, FrameLoop};
pub use vr::VrLocomotion;
