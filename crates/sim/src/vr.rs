use glam::Vec3;
use nightwalk_common::WalkCamera;
use nightwalk_input::{DEAD_ZONE, VrInputSource};

/// VR joystick locomotion speed, units/sec.
pub const VR_SPEED: f32 = 3.5;
/// Seated/standing camera height applied when a VR session starts.
pub const VR_EYE_HEIGHT: f32 = 1.6;

/// Kinematic joystick locomotion for a presenting VR session.
///
/// Pure translation relative to the horizontal look direction: no gravity,
/// no collision, no velocity carried between frames.
pub struct VrLocomotion;

impl VrLocomotion {
    /// Apply one frame of stick input from every connected controller.
    pub fn step(sources: &[VrInputSource], camera: &mut WalkCamera, dt: f32) {
        for source in sources {
            let Some(stick) = source.locomotion_stick() else {
                continue;
            };
            if stick.x.abs() < DEAD_ZONE && stick.y.abs() < DEAD_ZONE {
                continue;
            }

            let forward = camera.ground_forward();
            let right = forward.cross(Vec3::Y).normalize_or_zero();

            camera.position += forward * (-stick.y * VR_SPEED * dt);
            camera.position += right * (stick.x * VR_SPEED * dt);
        }
    }
}
