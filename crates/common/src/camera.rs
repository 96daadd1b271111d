use glam::{Mat4, Vec3};

/// First-person walk camera: position, yaw, pitch, projection parameters.
///
/// Locomotion mutates the pose; the renderer only reads it. The camera does
/// not know about gravity or the ground plane, that is locomotion's job.
#[derive(Debug, Clone)]
pub struct WalkCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.7, 5.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 200.0,
            sensitivity: 0.003,
        }
    }
}

impl WalkCamera {
    /// Full look direction including pitch.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Look direction projected onto the ground plane.
    ///
    /// Zero when looking straight up or down; callers treat that as "no
    /// horizontal facing" rather than dividing by zero.
    pub fn ground_forward(&self) -> Vec3 {
        let mut dir = self.forward();
        dir.y = 0.0;
        dir.normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
