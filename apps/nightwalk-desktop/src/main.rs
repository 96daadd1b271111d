use anyhow::Result;
use clap::Parser;
use nightwalk_common::WalkCamera;
use nightwalk_input::{InputState, KeyBindings};
use nightwalk_render::{DebugTextRenderer, Renderer};
use nightwalk_scene::{NightScene, SceneInspector};
use nightwalk_sim::{FrameClock, FrameInputs, FrameLoop, FrameTimer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "nightwalk-desktop", about = "Walkable night scene, first person")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Seed for scene placement and flicker noise
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Key-binding set: "wasd" or "arrows"
    #[arg(long, default_value = "wasd")]
    bindings: KeyBindings,
}

/// Application state driven once per redraw.
struct AppState {
    scene: NightScene,
    camera: WalkCamera,
    frame_loop: FrameLoop,
    input: InputState,
    bindings: KeyBindings,
    clock: FrameClock,
    frame_timer: FrameTimer,
    renderer: DebugTextRenderer,
    mouse_captured: bool,
    last_report: Instant,
}

impl AppState {
    fn new(seed: u64, bindings: KeyBindings) -> Self {
        let scene = NightScene::build(seed);
        tracing::info!("{}", SceneInspector::summary(&scene));
        Self {
            scene,
            camera: WalkCamera::default(),
            frame_loop: FrameLoop::new(seed),
            input: InputState::new(),
            bindings,
            clock: FrameClock::new(),
            frame_timer: FrameTimer::new(120),
            renderer: DebugTextRenderer::new(),
            mouse_captured: false,
            last_report: Instant::now(),
        }
    }

    /// One frame: clamped delta, locomotion, flicker, hand-off to render.
    fn frame(&mut self) {
        let frame_start = Instant::now();
        let dt = self.clock.delta();
        let wall_time = self.clock.elapsed();

        // No XR runtime is wired up in the desktop build; the loop sees a
        // non-presenting session and takes the desktop path.
        self.frame_loop.advance(
            FrameInputs {
                dt,
                wall_time,
                vr: None,
            },
            &mut self.input,
            &mut self.camera,
            self.scene.candles_mut(),
        );

        self.frame_timer.record(frame_start.elapsed());

        if self.last_report.elapsed() >= Duration::from_secs(1) {
            self.last_report = Instant::now();
            tracing::info!(
                "camera=({:.1}, {:.1}, {:.1}) avg_frame={:?}",
                self.camera.position.x,
                self.camera.position.y,
                self.camera.position.z,
                self.frame_timer.average(),
            );
            tracing::debug!("\n{}", self.renderer.render(&self.scene, &self.camera));
        }
    }

    fn handle_key(&mut self, key_name: &str, pressed: bool, repeat: bool) {
        if let Some(key) = self.bindings.resolve(key_name) {
            self.input.apply(key, pressed, repeat);
        }
    }
}

struct WalkApp {
    state: AppState,
    window: Option<Arc<Window>>,
}

impl WalkApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
        }
    }
}

impl ApplicationHandler for WalkApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Nightwalk")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let size = window.inner_size();
        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;
        self.window = Some(window);

        tracing::info!("window created, hold RMB to look, WASD to walk, Space to jump");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                // Only the projection cares about size; the core loop does not.
                self.state.camera.aspect =
                    new_size.width as f32 / new_size.height.max(1) as f32;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let name = format!("{code:?}");
                self.state
                    .handle_key(&name, key_state == ElementState::Pressed, repeat);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state: btn_state,
                ..
            } => {
                self.state.mouse_captured = btn_state == ElementState::Pressed;
                if let Some(window) = &self.window {
                    window.set_cursor_visible(!self.state.mouse_captured);
                }
            }
            WindowEvent::RedrawRequested => {
                self.state.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.mouse_captured {
                self.state.camera.rotate(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("nightwalk-desktop starting, seed={}", cli.seed);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = WalkApp::new(AppState::new(cli.seed, cli.bindings));
    event_loop.run_app(&mut app)?;

    Ok(())
}
