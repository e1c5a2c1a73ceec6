//! Sandfall - falling-sand cellular automaton
//!
//! Opens a window, deposits sand where the primary mouse button is pressed,
//! and advances the grid at a fixed tick rate.

use std::error::Error;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use sandfall::config::{AppConfig, ConfigError};
use sandfall::input::InputMapper;
use sandfall::systems::{FramePacer, RenderSystem, SimulationSystem, WindowSystem};
use sandfall::{Cell, Grid, SimEvent};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    grid: Grid,
    simulation: SimulationSystem,
    pacer: FramePacer,
    input: InputMapper,
    /// Events collected since the last tick
    pending: Vec<SimEvent>,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    /// Error that ended the loop, reported by `main`
    fatal: Option<Box<dyn Error>>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let grid = Grid::from_resolution(
            config.window.width,
            config.window.height,
            config.grid.cell_size,
        );
        log::info!(
            "Grid {}x{} cells at {}px, {} ticks/s",
            grid.width(),
            grid.height(),
            config.grid.cell_size,
            config.simulation.tick_rate
        );

        Self {
            simulation: SimulationSystem::new(config.grid.cell_size),
            pacer: FramePacer::new(config.simulation.tick_rate),
            input: InputMapper::new(config.window.width, config.window.height),
            pending: Vec::new(),
            window: None,
            renderer: None,
            fatal: None,
            grid,
            config,
        }
    }

    /// Stop the loop with an unrecoverable error
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        log::error!("{}", error);
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn create_window_and_renderer(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), Box<dyn Error>> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let renderer = RenderSystem::new(
            window.window().clone(),
            &self.grid,
            self.config.grid.cell_size,
            self.config.colors.palette(),
            self.config.window.vsync,
        )?;

        let (width, height) = renderer.size();
        self.input.set_surface_size(width, height);
        window.update_title(0);

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Run one simulation tick and draw it, unless the last one was too recent
    ///
    /// Platform-initiated redraws (expose, restore) land here too, so the
    /// pacer gates every tick.
    fn run_tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if !self.pacer.try_begin_tick(Instant::now()) {
            return;
        }

        let result = self
            .simulation
            .tick(&mut self.grid, self.pending.drain(..), renderer);

        match result {
            Ok(outcome) if outcome.quit_requested => {
                log::info!("Quit after {} ticks", self.simulation.ticks());
                event_loop.exit();
                return;
            }
            Ok(_) => {}
            Err(e) if e.is_recoverable() => log::warn!("Frame skipped: {}", e),
            Err(e) => {
                self.fail(event_loop, Box::new(e));
                return;
            }
        }

        // Refresh the title about once a second
        if self.simulation.ticks() % u64::from(self.config.simulation.tick_rate) == 0 {
            if let Some(window) = &self.window {
                window.update_title(self.grid.count(Cell::Sand));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window_and_renderer(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => self.run_tick(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.input.map_window_event(&event);
            }
            _ => {
                if let Some(sim_event) = self.input.map_window_event(&event) {
                    self.pending.push(sim_event);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };
        let now = Instant::now();
        if self.pacer.is_due(now) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline(now)));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Drop GPU resources before the window they render into
        self.renderer = None;
        self.window = None;
        log::info!("Shutting down");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still takes precedence
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting sandfall");

    let config = match loaded {
        Ok(config) => config,
        Err(ConfigError::Load(msg)) => {
            log::warn!("Failed to load config: {}. Using defaults.", msg);
            AppConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
