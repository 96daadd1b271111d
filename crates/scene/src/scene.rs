use glam::Vec3;
use nightwalk_common::{LightId, SceneRng};
use nightwalk_sim::CandleFlicker;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side length of the square ground plane.
pub const GROUND_SIZE: f32 = 200.0;
/// Trees placed on the outer ring.
pub const TREE_COUNT: usize = 140;
/// Pumpkins scattered inside the walkable area.
pub const PUMPKIN_COUNT: usize = 36;

/// Errors from scene export.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// A positional light with falloff, carried by each pumpkin's candle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointLight {
    pub id: LightId,
    pub color: [f32; 3],
    pub range: f32,
    pub decay: f32,
}

impl PointLight {
    /// Warm candle glow inside a pumpkin.
    pub fn candle() -> Self {
        Self {
            id: LightId::new(),
            color: rgb(0xffa75a),
            range: 5.0,
            decay: 2.0,
        }
    }
}

/// A procedural tree: trunk plus stacked crown cones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub position: Vec3,
    pub trunk_height: f32,
    pub crown_levels: u32,
}

/// A pumpkin with an animated candle inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pumpkin {
    pub position: Vec3,
    pub candle: PointLight,
    pub flicker: CandleFlicker,
}

/// The moon billboard and its directional light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moon {
    pub billboard_position: Vec3,
    pub billboard_radius: f32,
    pub light_position: Vec3,
    pub light_color: [f32; 3],
    pub light_intensity: f32,
}

impl Default for Moon {
    fn default() -> Self {
        Self {
            billboard_position: Vec3::new(-60.0, 50.0, -40.0),
            billboard_radius: 2.2,
            light_position: Vec3::new(-20.0, 25.0, 10.0),
            light_color: rgb(0xbcd0ff),
            light_intensity: 0.9,
        }
    }
}

/// Static lighting and atmosphere: the full-moon hemisphere light, a faint
/// ambient fill, and the night fog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightLighting {
    pub hemisphere_sky: [f32; 3],
    pub hemisphere_ground: [f32; 3],
    pub hemisphere_intensity: f32,
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub fog_color: [f32; 3],
    pub fog_density: f32,
}

impl Default for NightLighting {
    fn default() -> Self {
        Self {
            hemisphere_sky: rgb(0x88aaff),
            hemisphere_ground: rgb(0x0a0c10),
            hemisphere_intensity: 0.35,
            ambient_color: rgb(0x223344),
            ambient_intensity: 0.12,
            fog_color: rgb(0x06080f),
            fog_density: 0.03,
        }
    }
}

/// The full decorative scene, built once at startup from a seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightScene {
    pub ground_size: f32,
    pub trees: Vec<Tree>,
    pub pumpkins: Vec<Pumpkin>,
    pub moon: Moon,
    pub lighting: NightLighting,
}

impl NightScene {
    /// Build the scene deterministically from `seed`.
    ///
    /// Trees land on a ring between radius 60 and 140; pumpkins scatter
    /// between radius 8 and 88 so some are always near the spawn point.
    /// Each pumpkin draws its flicker phase during its own placement, so
    /// per-object draws stay in a fixed order.
    pub fn build(seed: u64) -> Self {
        let mut rng = SceneRng::new(seed);

        let trees = (0..TREE_COUNT)
            .map(|_| {
                let r = 60.0 + rng.next_f32() * 80.0;
                let a = rng.next_f32() * std::f32::consts::TAU;
                Tree {
                    position: Vec3::new(a.cos() * r, 0.0, a.sin() * r),
                    trunk_height: 3.0,
                    crown_levels: 3,
                }
            })
            .collect();

        let pumpkins = (0..PUMPKIN_COUNT)
            .map(|_| {
                let r = 8.0 + rng.next_f32() * 80.0;
                let a = rng.next_f32() * std::f32::consts::TAU;
                Pumpkin {
                    position: Vec3::new(a.cos() * r, 0.35, a.sin() * r),
                    candle: PointLight::candle(),
                    flicker: CandleFlicker::new(&mut rng),
                }
            })
            .collect();

        let scene = Self {
            ground_size: GROUND_SIZE,
            trees,
            pumpkins,
            moon: Moon::default(),
            lighting: NightLighting::default(),
        };
        tracing::info!(
            seed,
            trees = scene.trees.len(),
            pumpkins = scene.pumpkins.len(),
            "night scene built"
        );
        scene
    }

    /// Mutable access to every animated candle, in stable build order. The
    /// frame loop drives these once per frame.
    pub fn candles_mut(&mut self) -> impl Iterator<Item = &mut CandleFlicker> {
        self.pumpkins.iter_mut().map(|p| &mut p.flicker)
    }

    /// Current intensity of every candle, in build order.
    pub fn candle_intensities(&self) -> Vec<f32> {
        self.pumpkins.iter().map(|p| p.flicker.intensity).collect()
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), SceneError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic_for_a_seed() {
        let a = NightScene::build(42);
        let b = NightScene::build(42);
        assert_eq!(a.trees.len(), b.trees.len());
        for (ta, tb) in a.trees.iter().zip(&b.trees) {
            assert_eq!(ta.position, tb.position);
        }
        for (pa, pb) in a.pumpkins.iter().zip(&b.pumpkins) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.flicker.phase(), pb.flicker.phase());
        }
    }

    #[test]
    fn different_seeds_give_different_layouts() {
        let a = NightScene::build(1);
        let b = NightScene::build(2);
        assert_ne!(a.trees[0].position, b.trees[0].position);
    }

    #[test]
    fn counts_match_the_design() {
        let scene = NightScene::build(7);
        assert_eq!(scene.trees.len(), TREE_COUNT);
        assert_eq!(scene.pumpkins.len(), PUMPKIN_COUNT);
    }

    #[test]
    fn trees_sit_on_the_outer_ring() {
        let scene = NightScene::build(11);
        for tree in &scene.trees {
            let r = (tree.position.x * tree.position.x + tree.position.z * tree.position.z).sqrt();
            assert!((60.0..140.0).contains(&r), "tree at radius {r}");
            assert_eq!(tree.position.y, 0.0);
        }
    }

    #[test]
    fn pumpkins_scatter_inside_the_walkable_area() {
        let scene = NightScene::build(11);
        for pumpkin in &scene.pumpkins {
            let r = (pumpkin.position.x * pumpkin.position.x
                + pumpkin.position.z * pumpkin.position.z)
                .sqrt();
            assert!((8.0..88.0).contains(&r), "pumpkin at radius {r}");
            assert_eq!(pumpkin.position.y, 0.35);
        }
    }

    #[test]
    fn flicker_phases_are_spread_out() {
        let scene = NightScene::build(13);
        let first = scene.pumpkins[0].flicker.phase();
        assert!(
            scene
                .pumpkins
                .iter()
                .any(|p| (p.flicker.phase() - first).abs() > 1.0)
        );
        for p in &scene.pumpkins {
            assert!((0.0..1000.0).contains(&p.flicker.phase()));
        }
    }

    #[test]
    fn candle_light_ids_are_unique() {
        let scene = NightScene::build(17);
        let mut ids: Vec<_> = scene.pumpkins.iter().map(|p| p.candle.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PUMPKIN_COUNT);
    }

    #[test]
    fn lighting_carries_the_night_palette() {
        let lighting = NightLighting::default();
        assert_eq!(lighting.hemisphere_sky, rgb(0x88aaff));
        assert_eq!(lighting.hemisphere_ground, rgb(0x0a0c10));
        assert_eq!(lighting.hemisphere_intensity, 0.35);
        assert_eq!(lighting.ambient_color, rgb(0x223344));
        assert_eq!(lighting.ambient_intensity, 0.12);
        assert_eq!(lighting.fog_color, rgb(0x06080f));
        assert_eq!(lighting.fog_density, 0.03);
    }

    #[test]
    fn json_round_trip_preserves_layout() {
        let scene = NightScene::build(23);
        let json = scene.to_json().unwrap();
        let loaded = NightScene::from_json(&json).unwrap();
        assert_eq!(loaded.trees.len(), scene.trees.len());
        assert_eq!(loaded.pumpkins[0].position, scene.pumpkins[0].position);
        assert_eq!(
            loaded.pumpkins[0].flicker.phase(),
            scene.pumpkins[0].flicker.phase()
        );
        assert_eq!(loaded.lighting.fog_density, scene.lighting.fog_density);
        assert_eq!(
            loaded.lighting.hemisphere_sky,
            scene.lighting.hemisphere_sky
        );
    }

    #[test]
    fn candles_mut_visits_every_pumpkin() {
        let mut scene = NightScene::build(29);
        assert_eq!(scene.candles_mut().count(), PUMPKIN_COUNT);
    }
}
