use anyhow::Result;
use clap::{Parser, Subcommand};
use nightwalk_common::{SceneRng, WalkCamera};
use nightwalk_input::{InputState, MoveKey, VrInputSource, VrSession};
use nightwalk_render::{DebugTextRenderer, Renderer};
use nightwalk_scene::{NightScene, SceneInspector};
use nightwalk_sim::{Flicker, FrameInputs, FrameLoop, MAX_FRAME_DT};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nightwalk-cli", about = "Headless nightwalk simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the locomotion constants
    Info,
    /// Run a scripted desktop walk and print the trajectory
    Walk {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Fixed frame time in seconds (clamped to the loop maximum)
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Held keys, comma separated: forward, back, left, right
        #[arg(long, default_value = "forward")]
        hold: String,
        /// Queue a jump press on this frame
        #[arg(long)]
        jump_at: Option<u64>,
        /// Seed for flicker noise
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Drive the camera with a scripted VR thumbstick
    Vr {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Fixed frame time in seconds
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Stick x axis, -1..1
        #[arg(long, default_value = "0.0")]
        stick_x: f32,
        /// Stick y axis, -1..1 (push forward is negative)
        #[arg(long, default_value = "-1.0")]
        stick_y: f32,
    },
    /// Sample candle flicker and report the observed intensity range
    Flicker {
        /// Seconds of wall-clock time to sweep
        #[arg(long, default_value = "30.0")]
        seconds: f64,
        /// Seed for phase and noise
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Build the scene, print a summary, optionally export or render it
    Scene {
        /// Placement seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Write the scene as JSON to this path
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the debug render of the freshly built scene
        #[arg(long)]
        render: bool,
    },
}

fn parse_held_keys(hold: &str, input: &mut InputState) -> Result<()> {
    for name in hold.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let key = match name {
            "forward" => MoveKey::Forward,
            "back" => MoveKey::Back,
            "left" => MoveKey::Left,
            "right" => MoveKey::Right,
            other => anyhow::bail!("unknown key {other:?} (expected forward/back/left/right)"),
        };
        input.apply(key, true, false);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("nightwalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", nightwalk_render::crate_info());
            println!(
                "desktop: speed={} gravity={} friction={} jump={} eye_height={}",
                nightwalk_sim::desktop::SPEED,
                nightwalk_sim::desktop::GRAVITY,
                nightwalk_sim::desktop::FRICTION,
                nightwalk_sim::desktop::JUMP_IMPULSE,
                nightwalk_sim::desktop::EYE_HEIGHT,
            );
            println!(
                "vr: speed={} eye_height={} dead_zone={}",
                nightwalk_sim::vr::VR_SPEED,
                nightwalk_sim::vr::VR_EYE_HEIGHT,
                nightwalk_input::DEAD_ZONE,
            );
            println!("max frame dt: {MAX_FRAME_DT}");
        }
        Commands::Walk {
            frames,
            dt,
            hold,
            jump_at,
            seed,
        } => {
            let dt = dt.min(MAX_FRAME_DT);
            let mut input = InputState::new();
            parse_held_keys(&hold, &mut input)?;

            let mut frame_loop = FrameLoop::new(seed);
            let mut camera = WalkCamera::default();
            let mut scene = NightScene::build(seed);

            println!("Walk: frames={frames} dt={dt} hold={hold:?}");
            for frame in 0..frames {
                if jump_at == Some(frame) {
                    input.apply(MoveKey::Jump, true, false);
                }
                let wall_time = frame as f64 * f64::from(dt);
                frame_loop.advance(
                    FrameInputs {
                        dt,
                        wall_time,
                        vr: None,
                    },
                    &mut input,
                    &mut camera,
                    scene.candles_mut(),
                );
                if frame % 30 == 0 || frame + 1 == frames {
                    let v = frame_loop.desktop().velocity;
                    println!(
                        "  frame {frame:4}: pos=({:7.3}, {:5.3}, {:7.3}) vel=({:6.3}, {:6.3}, {:6.3})",
                        camera.position.x,
                        camera.position.y,
                        camera.position.z,
                        v.x,
                        v.y,
                        v.z,
                    );
                }
            }
        }
        Commands::Vr {
            frames,
            dt,
            stick_x,
            stick_y,
        } => {
            let dt = dt.min(MAX_FRAME_DT);
            let session = VrSession::presenting(vec![VrInputSource::left_stick_controller([
                0.0, 0.0, stick_x, stick_y,
            ])]);
            let mut frame_loop = FrameLoop::new(0);
            let mut input = InputState::new();
            let mut camera = WalkCamera::default();
            let start = camera.position;

            for frame in 0..frames {
                frame_loop.advance(
                    FrameInputs {
                        dt,
                        wall_time: frame as f64 * f64::from(dt),
                        vr: Some(&session),
                    },
                    &mut input,
                    &mut camera,
                    [],
                );
            }

            let end = camera.position;
            println!("VR drift: stick=({stick_x}, {stick_y}) frames={frames}");
            println!("  start=({:.3}, {:.3}, {:.3})", start.x, start.y, start.z);
            println!("  end  =({:.3}, {:.3}, {:.3})", end.x, end.y, end.z);
            println!("  moved {:.3} units", (end - start).length());
        }
        Commands::Flicker { seconds, seed } => {
            let mut phase_rng = SceneRng::new(seed);
            let mut noise = SceneRng::new(seed.wrapping_add(1));
            let flicker = Flicker::from_rng(&mut phase_rng);

            let mut min = f32::MAX;
            let mut max = f32::MIN;
            let steps = (seconds / 0.016).ceil() as u64;
            for i in 0..steps {
                let t = i as f64 * 0.016;
                let v = flicker.intensity(t, &mut noise);
                min = min.min(v);
                max = max.max(v);
            }

            println!("Flicker sweep: phase={:.2} over {seconds}s ({steps} samples)", flicker.phase());
            println!("  observed [{min:.4}, {max:.4}], contract [0.5, 0.95)");
        }
        Commands::Scene { seed, out, render } => {
            let scene = NightScene::build(seed);
            println!("{}", SceneInspector::summary(&scene));
            if render {
                print!("{}", DebugTextRenderer::new().render(&scene, &WalkCamera::default()));
            }
            if let Some(path) = out {
                scene.write_json(&path)?;
                println!("scene written to {}", path.display());
            }
        }
    }

    Ok(())
}
