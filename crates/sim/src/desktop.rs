use glam::Vec3;
use nightwalk_common::WalkCamera;
use nightwalk_input::InputState;

/// Horizontal acceleration from held keys, units/sec.
pub const SPEED: f32 = 8.0;
/// Constant downward acceleration, units/sec^2.
pub const GRAVITY: f32 = 18.0;
/// Horizontal damping coefficient, 1/sec.
pub const FRICTION: f32 = 10.0;
/// Instantaneous upward velocity added by a jump.
pub const JUMP_IMPULSE: f32 = 6.0;
/// Ground floor for the camera while walking.
pub const EYE_HEIGHT: f32 = 1.7;

/// First-person walking integrator: gravity, friction, jump, ground clamp.
///
/// Owns the velocity that persists across frames. The sign conventions and
/// the literal `v -= v * k * dt` damping are the behavioral contract; they
/// are frame-rate dependent on purpose and must not be replaced with exact
/// exponential decay.
#[derive(Debug, Default)]
pub struct DesktopLocomotion {
    pub velocity: Vec3,
}

impl DesktopLocomotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. `dt` is seconds, pre-clamped by the frame clock.
    pub fn step(&mut self, input: &mut InputState, camera: &mut WalkCamera, dt: f32) {
        // Eligibility is judged as of the press, which happened before this
        // frame. A landing later in the step must not retroactively arm it.
        let grounded_at_press = input.can_jump;

        let intent = Vec3::new(
            (input.right as i8 - input.left as i8) as f32,
            0.0,
            (input.back as i8 - input.forward as i8) as f32,
        )
        .normalize_or_zero();

        if input.forward || input.back {
            self.velocity.z -= intent.z * SPEED * dt;
        }
        if input.left || input.right {
            self.velocity.x -= intent.x * SPEED * dt;
        }

        self.velocity.y -= GRAVITY * dt;

        self.velocity.x -= self.velocity.x * FRICTION * dt;
        self.velocity.z -= self.velocity.z * FRICTION * dt;

        let right = camera.right();
        let forward = camera.ground_forward();
        camera.position += right * (-self.velocity.x * dt);
        camera.position += forward * (-self.velocity.z * dt);
        camera.position.y += self.velocity.y * dt;

        if camera.position.y < EYE_HEIGHT {
            self.velocity.y = 0.0;
            camera.position.y = EYE_HEIGHT;
            input.can_jump = true;
        }

        // The edge flag clears every frame; an airborne press is discarded.
        if input.take_jump() && grounded_at_press {
            self.velocity.y += JUMP_IMPULSE;
            input.can_jump = false;
        }
    }
}
