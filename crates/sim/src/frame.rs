use nightwalk_common::{SceneRng, WalkCamera};
use nightwalk_input::{InputState, VrSession};

use crate::desktop::DesktopLocomotion;
use crate::flicker::CandleFlicker;
use crate::vr::{VR_EYE_HEIGHT, VrLocomotion};

/// Per-frame inputs gathered by the host before the update runs.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    /// Seconds since the previous frame, already clamped by the frame clock.
    pub dt: f32,
    /// Wall-clock seconds since startup. Drives flicker.
    pub wall_time: f64,
    /// VR session state, if any. `None` behaves like a non-presenting
    /// session.
    pub vr: Option<&'a VrSession>,
}

/// Orchestrates one frame: exactly one locomotion path, then every candle.
///
/// The external render step runs after `advance` returns; the only state
/// crossing the boundary is the camera pose and the light intensities.
#[derive(Debug)]
pub struct FrameLoop {
    desktop: DesktopLocomotion,
    noise: SceneRng,
    was_presenting: bool,
}

impl FrameLoop {
    /// `noise_seed` seeds the flicker noise stream so headless runs are
    /// reproducible.
    pub fn new(noise_seed: u64) -> Self {
        Self {
            desktop: DesktopLocomotion::new(),
            noise: SceneRng::new(noise_seed),
            was_presenting: false,
        }
    }

    pub fn desktop(&self) -> &DesktopLocomotion {
        &self.desktop
    }

    /// Run one frame of locomotion and flicker animation.
    pub fn advance<'a, I>(
        &mut self,
        inputs: FrameInputs<'_>,
        keys: &mut InputState,
        camera: &mut WalkCamera,
        candles: I,
    ) where
        I: IntoIterator<Item = &'a mut CandleFlicker>,
    {
        let presenting = inputs.vr.is_some_and(|s| s.presenting);

        // Entering VR drops the camera to headset eye height once, on the
        // transition frame.
        if presenting && !self.was_presenting {
            tracing::info!("vr session started");
            camera.position.y = VR_EYE_HEIGHT;
        }
        self.was_presenting = presenting;

        if presenting {
            if let Some(session) = inputs.vr {
                VrLocomotion::step(&session.sources, camera, inputs.dt);
            }
        } else {
            self.desktop.step(keys, camera, inputs.dt);
        }

        for candle in candles {
            candle.update(inputs.wall_time, &mut self.noise);
        }
    }
}
