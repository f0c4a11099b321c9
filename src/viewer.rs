//! Standalone visualization window backed by winit.
//!
//! When the `gui` feature is enabled, a wry webview slider panel is created
//! along the right edge of the scene.
//!
//! ```no_run
//! # use gooey::Viewer;
//! Viewer::builder()
//!     .with_title("Gooey")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    error::GooeyError, gpu::render_context::RenderContext, options::Options,
    renderer::SceneRenderer, util::frame_timing::FrameTiming, GooeyEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "Gooey".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the gooey squares scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// [`GooeyError::Viewer`] if the event loop cannot be created or exits
    /// abnormally.
    pub fn run(self) -> Result<(), GooeyError> {
        let event_loop =
            EventLoop::new().map_err(|e| GooeyError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            renderer: None,
            timing: None,
            options: Some(self.options),
            title: self.title,
            #[cfg(feature = "gui")]
            panel: crate::gui::panel::PanelController::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GooeyError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<GooeyEngine>,
    renderer: Option<SceneRenderer>,
    timing: Option<FrameTiming>,
    /// Consumed when the engine is built.
    options: Option<Options>,
    title: String,
    #[cfg(feature = "gui")]
    panel: crate::gui::panel::PanelController,
}

/// Surface size: the full window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    fn resize_to_window(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let (w, h) = viewport_size(window.inner_size());
        if let Some(engine) = &mut self.engine {
            engine.resize(w, h);
        }
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(w, h);
        }
        #[cfg(feature = "gui")]
        self.panel.apply_layout(window);
    }

    fn redraw(&mut self) {
        let (Some(window), Some(engine), Some(renderer), Some(timing)) = (
            &self.window,
            &mut self.engine,
            &mut self.renderer,
            &mut self.timing,
        ) else {
            return;
        };

        #[cfg(all(feature = "gui", target_os = "linux"))]
        while gtk::events_pending() {
            let _ = gtk::main_iteration_do(false);
        }

        let now = Instant::now();
        if !timing.should_render(now) {
            window.request_redraw();
            return;
        }

        #[cfg(feature = "gui")]
        self.panel.drain_and_apply(engine, now);

        if let Err(e) = engine.tick(now) {
            log::warn!("frame update failed: {e}");
        }

        match renderer.render(&engine.uniform()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (w, h) = viewport_size(window.inner_size());
                renderer.resize(w, h);
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }

        timing.end_frame(now);
        window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.6) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.6) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (vp_w, vp_h) = viewport_size(window.inner_size());
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (vp_w, vp_h),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {}", GooeyError::from(e));
                event_loop.exit();
                return;
            }
        };

        let options = self.options.take().unwrap_or_default();
        let now = Instant::now();
        self.timing = Some(FrameTiming::new(options.animation.target_fps, now));

        let mut engine = GooeyEngine::new(options, now);
        engine.resize(vp_w, vp_h);

        #[cfg(feature = "gui")]
        {
            #[cfg(target_os = "linux")]
            if let Err(e) = gtk::init() {
                log::error!("Failed to initialize GTK: {e}");
            }
            self.panel.init_webview(window.as_ref(), &mut engine);
        }

        self.renderer = Some(SceneRenderer::new(context));
        self.engine = Some(engine);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(_)
            | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize_to_window();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if let Some(engine) = &mut self.engine {
                    if engine.pointer_activate(Instant::now()) {
                        log::debug!("swap triggered by click");
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(engine) = &mut self.engine else {
                    return;
                };
                match code {
                    KeyCode::Space => {
                        if !engine.trigger_swap(Instant::now()) {
                            log::debug!("swap ignored: already running");
                        }
                    }
                    KeyCode::KeyR => engine.reset_layout(Instant::now()),
                    KeyCode::Escape => event_loop.exit(),
                    _ => {}
                }
            }

            _ => (),
        }
    }
}
