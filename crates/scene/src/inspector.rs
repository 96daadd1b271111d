use crate::scene::NightScene;

/// Read-only queries over the scene for debugging and CLI output.
pub struct SceneInspector;

impl SceneInspector {
    pub fn summary(scene: &NightScene) -> SceneSummary {
        let intensities = scene.candle_intensities();
        let (min, max) = intensities.iter().fold((f32::MAX, f32::MIN), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
        SceneSummary {
            ground_size: scene.ground_size,
            trees: scene.trees.len(),
            pumpkins: scene.pumpkins.len(),
            min_candle_intensity: if intensities.is_empty() { 0.0 } else { min },
            max_candle_intensity: if intensities.is_empty() { 0.0 } else { max },
        }
    }
}

/// Snapshot of scene shape and candle activity.
#[derive(Debug, Clone)]
pub struct SceneSummary {
    pub ground_size: f32,
    pub trees: usize,
    pub pumpkins: usize,
    pub min_candle_intensity: f32,
    pub max_candle_intensity: f32,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: ground={}x{} trees={} pumpkins={} candles=[{:.3}, {:.3}]",
            self.ground_size,
            self.ground_size,
            self.trees,
            self.pumpkins,
            self.min_candle_intensity,
            self.max_candle_intensity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_scene_contents() {
        let scene = NightScene::build(42);
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.trees, scene.trees.len());
        assert_eq!(summary.pumpkins, scene.pumpkins.len());
        assert_eq!(summary.ground_size, 200.0);
    }

    #[test]
    fn summary_reports_base_intensity_before_animation() {
        let scene = NightScene::build(42);
        let summary = SceneInspector::summary(&scene);
        assert_eq!(summary.min_candle_intensity, 0.9);
        assert_eq!(summary.max_candle_intensity, 0.9);
    }

    #[test]
    fn summary_displays_in_one_line() {
        let scene = NightScene::build(42);
        let text = SceneInspector::summary(&scene).to_string();
        assert!(text.contains("trees=140"));
        assert!(text.contains("pumpkins=36"));
    }
}
