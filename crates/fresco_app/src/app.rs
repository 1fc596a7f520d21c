//! Application entry point tying a platform backend to a runner
//!
//! [`App`] owns a [`Platform`] implementation and a [`SketchConfig`], and
//! drives a [`Runner`] from the platform's event loop: input events are
//! forwarded as they arrive, and each frame tick becomes an update + draw
//! pair with the window's current geometry.

use fresco_core::Size;
use fresco_platform::{
    AppEvent, ContextHolder, ControlFlow, EventLoop, Platform, PlatformEvent, Window, WindowEvent,
};

use crate::error::Result;
use crate::runnable::Runnable;
use crate::runner::Runner;
use crate::sketch::{Sketch, SketchConfig, SketchHooks};

/// A sketch application bound to a platform backend
///
/// # Example
///
/// ```ignore
/// use fresco_app::prelude::*;
///
/// struct Orbits;
///
/// impl SketchHooks for Orbits {
///     fn draw(&mut self, state: &mut SketchState) {
///         let center = Point::new(state.width() / 2.0, state.height() / 2.0);
///         // draw through state.context() ...
///         let _ = center;
///     }
/// }
///
/// fn main() -> fresco_app::Result<()> {
///     App::<DesktopPlatform>::new()?.run(Orbits)
/// }
/// ```
pub struct App<P: Platform> {
    platform: P,
    config: SketchConfig,
}

impl<P: Platform> App<P> {
    /// Create an app with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SketchConfig::default())
    }

    /// Create an app with a custom configuration
    pub fn with_config(config: SketchConfig) -> Result<Self> {
        let platform = P::new()?;
        tracing::info!(platform = platform.name(), "fresco platform initialized");
        Ok(Self { platform, config })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Run user hooks as a [`Sketch`] until the event loop exits
    pub fn run<H: SketchHooks + 'static>(self, hooks: H) -> Result<()> {
        let config = self.config.clone();
        self.run_runnable(Box::new(Sketch::with_config(hooks, config)))
    }

    /// Run an arbitrary [`Runnable`] until the event loop exits
    ///
    /// Frame events deliver an [`AppEvent`] with the window's current
    /// logical size and scale and an empty context holder; backends that
    /// integrate a renderer construct their own context-carrying events
    /// and drive the [`Runner`] directly instead.
    pub fn run_runnable(self, runnable: Box<dyn Runnable>) -> Result<()> {
        let event_loop = self.platform.create_event_loop()?;
        let mut runner = Runner::new(runnable);

        event_loop.run(move |event, window| match event {
            PlatformEvent::Input(input) => {
                runner.handle_input(&input);
                ControlFlow::Continue
            }
            PlatformEvent::Frame => {
                let (width, height) = window.logical_size();
                let app_event = AppEvent::new(
                    ContextHolder::empty(),
                    Size::new(width, height),
                    window.scale_factor(),
                );
                // The first frame sets the runnable up through draw's
                // implicit path; update is a no-op until then.
                runner.update(&app_event);
                runner.draw(&app_event);
                ControlFlow::Continue
            }
            PlatformEvent::Window(WindowEvent::CloseRequested) => {
                runner.exit(&AppEvent::default());
                ControlFlow::Exit
            }
            PlatformEvent::Window(_) | PlatformEvent::Lifecycle(_) => ControlFlow::Continue,
        })?;
        Ok(())
    }
}
