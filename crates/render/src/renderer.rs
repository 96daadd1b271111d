use nightwalk_common::WalkCamera;
use nightwalk_scene::NightScene;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the camera pose and the scene's current light
/// intensities, then produces output. It never mutates either; locomotion
/// and the frame loop own those.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene and camera pose.
    fn render(&self, scene: &NightScene, camera: &WalkCamera) -> Self::Output;
}

/// Debug text renderer, the stand-in for a GPU backend.
///
/// Produces a human-readable description of the frame. Useful for the CLI,
/// logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &NightScene, camera: &WalkCamera) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Camera: pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} fov={:.0}\n",
            camera.position.x,
            camera.position.y,
            camera.position.z,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
            camera.fov.to_degrees(),
        ));
        out.push_str(&format!(
            "Ground: {:.0}x{:.0}  Trees: {}  Moon: ({:.0}, {:.0}, {:.0})\n",
            scene.ground_size,
            scene.ground_size,
            scene.trees.len(),
            scene.moon.billboard_position.x,
            scene.moon.billboard_position.y,
            scene.moon.billboard_position.z,
        ));
        out.push_str(&format!(
            "Lighting: hemisphere={:.2} ambient={:.2} fog={:.3}\n",
            scene.lighting.hemisphere_intensity,
            scene.lighting.ambient_intensity,
            scene.lighting.fog_density,
        ));
        out.push_str(&format!("Pumpkins: {}\n", scene.pumpkins.len()));
        for pumpkin in &scene.pumpkins {
            out.push_str(&format!(
                "  candle at ({:6.1}, {:6.1}) intensity={:.3}\n",
                pumpkin.position.x, pumpkin.position.z, pumpkin.flicker.intensity
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_renderer_reports_camera_and_lights() {
        let scene = NightScene::build(42);
        let camera = WalkCamera::default();
        let output = DebugTextRenderer::new().render(&scene, &camera);

        assert!(output.contains("Camera: pos=(0.00, 1.70, 5.00)"));
        assert!(output.contains("Lighting: hemisphere=0.35 ambient=0.12 fog=0.030"));
        assert!(output.contains("Pumpkins: 36"));
        assert!(output.contains("intensity=0.900"));
    }

    #[test]
    fn render_does_not_consume_scene() {
        let scene = NightScene::build(1);
        let camera = WalkCamera::default();
        let renderer = DebugTextRenderer::new();
        let a = renderer.render(&scene, &camera);
        let b = renderer.render(&scene, &camera);
        // Same inputs, same output: the renderer holds no frame state.
        assert_eq!(a, b);
    }
}
