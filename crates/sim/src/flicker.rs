use nightwalk_common::SceneRng;
use serde::{Deserialize, Serialize};

/// Base candle intensity before the flicker animation takes over.
pub const CANDLE_BASE_INTENSITY: f32 = 0.9;

/// Per-light random phase offset, assigned at scene build and never mutated.
///
/// Phases decorrelate flicker across lights that share the same wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flicker {
    phase: f32,
}

impl Flicker {
    /// Draw a phase uniformly from `[0, 1000)`.
    pub fn from_rng(rng: &mut SceneRng) -> Self {
        Self {
            phase: rng.range_f32(0.0, 1000.0),
        }
    }

    pub fn with_phase(phase: f32) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Candle intensity at wall-clock second `t`.
    ///
    /// `0.7 + sin(t * 4 + phase) * 0.2 + noise`, noise uniform in
    /// `[0, 0.05)`. Not idempotent: the noise term draws from the RNG on
    /// every call, which is what makes the candle look alive. Result is
    /// always within `[0.5, 0.95)`.
    pub fn intensity(&self, t: f64, rng: &mut SceneRng) -> f32 {
        let wave = (t * 4.0 + f64::from(self.phase)).sin() as f32;
        0.7 + wave * 0.2 + rng.next_f32() * 0.05
    }
}

/// An animated light intensity. The frame loop rewrites `intensity` every
/// frame; nothing caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleFlicker {
    flicker: Flicker,
    pub intensity: f32,
}

impl CandleFlicker {
    pub fn new(rng: &mut SceneRng) -> Self {
        Self {
            flicker: Flicker::from_rng(rng),
            intensity: CANDLE_BASE_INTENSITY,
        }
    }

    pub fn with_phase(phase: f32) -> Self {
        Self {
            flicker: Flicker::with_phase(phase),
            intensity: CANDLE_BASE_INTENSITY,
        }
    }

    pub fn phase(&self) -> f32 {
        self.flicker.phase()
    }

    pub fn update(&mut self, t: f64, rng: &mut SceneRng) {
        self.intensity = self.flicker.intensity(t, rng);
    }
}
