use glam::Vec2;

/// Analog magnitude below which a stick axis reads as neutral.
pub const DEAD_ZONE: f32 = 0.1;

/// Axes-array indices of the thumbstick on a standard VR controller
/// gamepad mapping.
const STICK_X: usize = 2;
const STICK_Y: usize = 3;

/// Which hand a VR input source is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

/// One VR controller as reported by the session each frame.
///
/// `axes` is `None` when the source exposes no gamepad. A short axes array
/// (tracked-hand sources report fewer than four) yields no stick reading.
#[derive(Debug, Clone)]
pub struct VrInputSource {
    pub handedness: Option<Handedness>,
    pub axes: Option<Vec<f32>>,
}

impl VrInputSource {
    pub fn left_stick_controller(axes: [f32; 4]) -> Self {
        Self {
            handedness: Some(Handedness::Left),
            axes: Some(axes.to_vec()),
        }
    }

    /// Raw thumbstick reading for a locomotion-capable source.
    ///
    /// Returns `None` for right-hand sources, sources with unknown
    /// handedness, missing gamepads, and short axes arrays. None of those
    /// are errors; they are "no input this frame".
    pub fn locomotion_stick(&self) -> Option<Vec2> {
        if self.handedness != Some(Handedness::Left) {
            return None;
        }
        let Some(axes) = &self.axes else {
            tracing::debug!("left-hand source has no gamepad, skipping");
            return None;
        };
        if axes.len() <= STICK_Y {
            tracing::debug!(len = axes.len(), "axes array too short, skipping");
            return None;
        }
        Some(Vec2::new(axes[STICK_X], axes[STICK_Y]))
    }
}

/// Per-frame view of the VR session: whether a headset is being rendered to
/// and which input sources are connected.
#[derive(Debug, Clone, Default)]
pub struct VrSession {
    pub presenting: bool,
    pub sources: Vec<VrInputSource>,
}

impl VrSession {
    pub fn presenting(sources: Vec<VrInputSource>) -> Self {
        Self {
            presenting: true,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_controller_reads_axes_two_and_three() {
        let src = VrInputSource::left_stick_controller([9.0, 9.0, 0.5, -0.25]);
        assert_eq!(src.locomotion_stick(), Some(Vec2::new(0.5, -0.25)));
    }

    #[test]
    fn right_hand_is_ignored() {
        let src = VrInputSource {
            handedness: Some(Handedness::Right),
            axes: Some(vec![0.0, 0.0, 1.0, 1.0]),
        };
        assert_eq!(src.locomotion_stick(), None);
    }

    #[test]
    fn unknown_handedness_is_ignored() {
        let src = VrInputSource {
            handedness: None,
            axes: Some(vec![0.0, 0.0, 1.0, 1.0]),
        };
        assert_eq!(src.locomotion_stick(), None);
    }

    #[test]
    fn missing_gamepad_is_no_input() {
        let src = VrInputSource {
            handedness: Some(Handedness::Left),
            axes: None,
        };
        assert_eq!(src.locomotion_stick(), None);
    }

    #[test]
    fn short_axes_array_is_no_input() {
        let src = VrInputSource {
            handedness: Some(Handedness::Left),
            axes: Some(vec![0.1, 0.2]),
        };
        assert_eq!(src.locomotion_stick(), None);
    }
}
