use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use pick_animator::camera::PerspectiveCamera;
use pick_animator::cli::Cli;
use pick_animator::config::AnimationConfig;
use pick_animator::core::{Clock, PointerTracker, Session, Viewport};
use pick_animator::frame::{FpsCounter, FrameInfo};
use pick_animator::scene::{ObjectHandle, Scene};
use pick_animator::scenes::{create_courtyard_scene, Courtyard};
use pick_animator::traits::{FrameRenderer, SceneGraph};

/// Hands finished frames to the window. Shading is left to the host renderer;
/// this presenter traces the interactive transforms and reports FPS.
struct WindowPresenter {
    window: Arc<Window>,
    watched: [ObjectHandle; 2],
    fps: FpsCounter,
    quiet: bool,
}

impl FrameRenderer<Scene> for WindowPresenter {
    fn draw(&mut self, scene: &Scene, frame: &FrameInfo) -> anyhow::Result<()> {
        for handle in self.watched {
            if let Some(object) = scene.object(handle) {
                log::trace!(
                    "frame {} {} at {:?}",
                    frame.number,
                    object.name,
                    object.transform.translation
                );
            }
        }

        if let Some(fps) = self.fps.record(frame.delta) {
            if !self.quiet {
                log::info!("FPS: {:.1}", fps);
            }
        }

        self.window.pre_present_notify();
        Ok(())
    }
}

// === Application ===

struct App {
    cli: Cli,
    camera: PerspectiveCamera,
    courtyard: Courtyard,
    session: Session<Clock>,
    tracker: PointerTracker,
    presenter: Option<WindowPresenter>,
}

impl App {
    fn new(cli: Cli, config: AnimationConfig) -> Self {
        let courtyard = create_courtyard_scene();
        let session = courtyard.session(Clock::new(), &config);
        let tracker = PointerTracker::new(Viewport::new(cli.width, cli.height));

        Self {
            cli,
            camera: PerspectiveCamera::default(),
            courtyard,
            session,
            tracker,
            presenter: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Pick Animator")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.tracker.resize(size.width, size.height);
        self.presenter = Some(WindowPresenter {
            window,
            watched: [self.courtyard.ball.handle, self.courtyard.door.handle],
            fps: FpsCounter::new(),
            quiet: self.cli.quiet,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(pointer) = self.tracker.process_event(&event) {
            self.session.push_event(pointer);
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Some(presenter) = self.presenter.as_mut() {
                    let scene = &mut self.courtyard.scene;
                    if let Err(e) = self.session.frame(scene, &self.camera, presenter) {
                        log::error!("Render error: {:#}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(presenter) = &self.presenter {
            presenter.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AnimationConfig::load(path)
            .with_context(|| format!("loading animation config from {}", path.display()))?,
        None => AnimationConfig::default(),
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    log::info!("Pick Animator - left-click the ball, right-click the door, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
