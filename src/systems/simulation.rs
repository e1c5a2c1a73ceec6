//! Simulation system
//!
//! Runs one tick of the loop, strictly in this order:
//! 1. Drain queued input events into grid writes
//! 2. Advance the grid by one update
//! 3. Hand the grid to the render target
//!
//! Pacing between ticks lives in [`FramePacer`](super::FramePacer).

use sandfall_grid::{Cell, Grid};
use sandfall_input::SimEvent;
use sandfall_render::RenderError;

/// Something that can draw the grid once per tick
pub trait RenderTarget {
    /// Draw the whole grid and present it
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError>;
}

impl<F> RenderTarget for F
where
    F: FnMut(&Grid) -> Result<(), RenderError>,
{
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self(grid)
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A quit event was seen; the caller should stop after this tick
    pub quit_requested: bool,
    /// Primary presses that landed inside the grid
    pub grains_placed: usize,
    /// The grid was cleared by an event
    pub cleared: bool,
}

/// Translate a frame pixel to grid coordinates
///
/// Uses floor division, so pixels left of or above the frame map to `None`
/// rather than to column or row 0. Upper bounds are left to the grid.
pub fn pixel_to_cell(px: i32, py: i32, cell_size: u32) -> Option<(usize, usize)> {
    if px < 0 || py < 0 || cell_size == 0 {
        return None;
    }
    Some(((px as u32 / cell_size) as usize, (py as u32 / cell_size) as usize))
}

/// Drives discrete simulation ticks
pub struct SimulationSystem {
    cell_size: u32,
    ticks: u64,
}

impl SimulationSystem {
    /// Create a simulation system for cells of `cell_size` pixels
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size, ticks: 0 }
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply one input event to the grid
    pub fn apply_event(&self, grid: &mut Grid, event: SimEvent, outcome: &mut TickOutcome) {
        match event {
            SimEvent::Quit => outcome.quit_requested = true,
            SimEvent::Clear => {
                grid.clear();
                outcome.cleared = true;
                log::info!("Grid cleared");
            }
            SimEvent::PointerDown { button, x, y } => {
                if !button.is_primary() {
                    return;
                }
                let placed = pixel_to_cell(x, y, self.cell_size)
                    .map(|(col, row)| grid.set_cell(col, row, Cell::Sand))
                    .unwrap_or(false);
                if placed {
                    outcome.grains_placed += 1;
                    log::debug!("Placed sand at pixel ({}, {})", x, y);
                }
            }
        }
    }

    /// Run one tick: drain `events`, update the grid once, draw once
    ///
    /// A draw failure on a tick that also requested quit is logged and
    /// swallowed, since the loop is shutting down anyway.
    pub fn tick<I, R>(
        &mut self,
        grid: &mut Grid,
        events: I,
        renderer: &mut R,
    ) -> Result<TickOutcome, RenderError>
    where
        I: IntoIterator<Item = SimEvent>,
        R: RenderTarget + ?Sized,
    {
        let mut outcome = TickOutcome::default();

        // 1. Input
        for event in events {
            self.apply_event(grid, event, &mut outcome);
        }

        // 2. Update
        grid.update();
        self.ticks += 1;

        // 3. Render
        match renderer.draw(grid) {
            Ok(()) => Ok(outcome),
            Err(e) if outcome.quit_requested => {
                log::warn!("Final frame not drawn: {}", e);
                Ok(outcome)
            }
            Err(e) => Err(e),
        }
    }
}
