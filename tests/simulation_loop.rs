//! Integration tests for the simulation loop
//!
//! Drives ticks headlessly with a recording render target:
//! 1. Input events become sand placements before the update
//! 2. Each tick updates once and draws once
//! 3. Quit ends the loop after the tick completes
//! 4. Frames rasterise the grid the renderer was given

use sandfall::systems::{FramePacer, RenderTarget, SimulationSystem};
use sandfall::{Cell, Grid, Palette, PointerButton, SimEvent};
use sandfall_render::{FrameBuffer, RenderError};

/// Render target that keeps a copy of every frame
#[derive(Default)]
struct Recorder {
    frames: Vec<Grid>,
}

impl RenderTarget for Recorder {
    fn draw(&mut self, grid: &Grid) -> Result<(), RenderError> {
        self.frames.push(grid.clone());
        Ok(())
    }
}

fn click(x: i32, y: i32) -> SimEvent {
    SimEvent::PointerDown {
        button: PointerButton::Primary,
        x,
        y,
    }
}

/// Run ticks until a quit is seen, feeding one batch of events per tick
fn run_scripted(
    sim: &mut SimulationSystem,
    grid: &mut Grid,
    script: Vec<Vec<SimEvent>>,
    recorder: &mut Recorder,
) -> usize {
    let mut ticks = 0;
    for batch in script {
        let outcome = sim.tick(grid, batch, recorder).unwrap();
        ticks += 1;
        if outcome.quit_requested {
            break;
        }
    }
    ticks
}

#[test]
fn test_one_draw_per_tick() {
    let mut sim = SimulationSystem::new(4);
    let mut grid = Grid::new(10, 10);
    let mut recorder = Recorder::default();

    for _ in 0..7 {
        sim.tick(&mut grid, Vec::new(), &mut recorder).unwrap();
    }
    assert_eq!(recorder.frames.len(), 7);
    assert_eq!(sim.ticks(), 7);
}

#[test]
fn test_end_to_end_two_grains_via_clicks() {
    // 5x5 grid of 10px cells; clicking inside cell (2, 0)
    let cell_size = 10;
    let mut sim = SimulationSystem::new(cell_size);
    let mut grid = Grid::new(5, 5);
    let mut recorder = Recorder::default();

    // Placement happens before the tick's update, so the first tick already
    // moves the grain down one row: four ticks bring it to the floor.
    sim.tick(&mut grid, vec![click(25, 5)], &mut recorder).unwrap();
    for _ in 0..3 {
        sim.tick(&mut grid, Vec::new(), &mut recorder).unwrap();
    }
    assert_eq!(grid.get(2, 4), Some(Cell::Sand));

    // Second grain lands on the first after three ticks
    sim.tick(&mut grid, vec![click(29, 9)], &mut recorder).unwrap();
    sim.tick(&mut grid, Vec::new(), &mut recorder).unwrap();
    sim.tick(&mut grid, Vec::new(), &mut recorder).unwrap();
    assert_eq!(grid.get(2, 3), Some(Cell::Sand));

    // and slides down-left on the next
    sim.tick(&mut grid, Vec::new(), &mut recorder).unwrap();
    assert_eq!(grid.get(1, 4), Some(Cell::Sand));
    assert_eq!(grid.get(2, 4), Some(Cell::Sand));
    assert_eq!(grid.count(Cell::Sand), 2);
}

#[test]
fn test_clicks_outside_grid_are_harmless() {
    let mut sim = SimulationSystem::new(4);
    let mut grid = Grid::new(10, 10);
    let mut recorder = Recorder::default();

    let outcome = sim
        .tick(
            &mut grid,
            vec![click(-1, 5), click(5, -1), click(40, 0), click(0, 40), click(i32::MAX, i32::MAX)],
            &mut recorder,
        )
        .unwrap();
    assert_eq!(outcome.grains_placed, 0);
    assert_eq!(grid.count(Cell::Sand), 0);
}

#[test]
fn test_only_primary_button_places() {
    let mut sim = SimulationSystem::new(1);
    let mut grid = Grid::new(4, 4);
    let mut recorder = Recorder::default();

    let events = vec![
        SimEvent::PointerDown { button: PointerButton::Secondary, x: 0, y: 0 },
        SimEvent::PointerDown { button: PointerButton::Middle, x: 1, y: 0 },
        SimEvent::PointerDown { button: PointerButton::Other(7), x: 2, y: 0 },
        click(3, 0),
    ];
    let outcome = sim.tick(&mut grid, events, &mut recorder).unwrap();
    assert_eq!(outcome.grains_placed, 1);
    assert_eq!(grid.count(Cell::Sand), 1);
}

#[test]
fn test_quit_stops_scripted_loop() {
    let mut sim = SimulationSystem::new(1);
    let mut grid = Grid::new(4, 4);
    let mut recorder = Recorder::default();

    let script = vec![
        vec![click(1, 0)],
        vec![],
        vec![SimEvent::Quit],
        vec![click(2, 0)],
    ];
    let ticks = run_scripted(&mut sim, &mut grid, script, &mut recorder);

    assert_eq!(ticks, 3);
    // The quitting tick still updated and drew
    assert_eq!(recorder.frames.len(), 3);
    assert_eq!(grid.get(1, 3), Some(Cell::Sand));
    assert_eq!(grid.count(Cell::Sand), 1);
}

#[test]
fn test_mass_conserved_across_loop() {
    let cell_size = 2;
    let mut sim = SimulationSystem::new(cell_size);
    let mut grid = Grid::new(16, 12);
    let mut recorder = Recorder::default();

    for tick in 0..60i32 {
        let x = (tick * 7) % 32;
        let before = grid.count(Cell::Sand);
        // A press on a cell that already holds sand adds nothing
        let target_was_empty = grid.get((x as u32 / cell_size) as usize, 0) == Some(Cell::Empty);

        sim.tick(&mut grid, vec![click(x, 0)], &mut recorder).unwrap();

        let expected = before + usize::from(target_was_empty);
        assert_eq!(grid.count(Cell::Sand), expected, "tick {}", tick);
    }
    assert_eq!(recorder.frames.len(), 60);
}

#[test]
fn test_frames_rasterise_recorded_grid() {
    let cell_size = 3;
    let mut sim = SimulationSystem::new(cell_size);
    let mut grid = Grid::new(4, 4);
    let palette = Palette::default();
    let mut frame = FrameBuffer::for_grid(&grid, cell_size);

    let mut renderer = |g: &Grid| -> Result<(), RenderError> {
        frame.paint(g, &palette);
        Ok(())
    };
    sim.tick(&mut grid, vec![click(4, 1)], &mut renderer).unwrap();

    // Grain placed in cell (1, 0) fell to (1, 1): pixels 3..6 x 3..6
    assert_eq!(frame.pixel(4, 4), Some(Palette::SAND));
    assert_eq!(frame.pixel(4, 1), Some(Palette::BLACK));
}

#[test]
fn test_pacer_spacing_matches_tick_rate() {
    use std::time::{Duration, Instant};

    let mut pacer = FramePacer::new(60);
    let start = Instant::now();
    pacer.begin_tick(start);
    let deadline = pacer.next_deadline(start);
    assert_eq!(deadline - start, Duration::from_secs(1) / 60);
}

#[test]
fn test_redraws_within_one_interval_run_one_tick() {
    use std::time::{Duration, Instant};

    let mut pacer = FramePacer::new(60);
    let mut sim = SimulationSystem::new(1);
    let mut grid = Grid::new(4, 4);
    let mut recorder = Recorder::default();

    // A paced redraw followed by a platform redraw 2ms later
    let start = Instant::now();
    for now in [start, start + Duration::from_millis(2)] {
        if pacer.try_begin_tick(now) {
            sim.tick(&mut grid, vec![click(1, 0)], &mut recorder).unwrap();
        }
    }

    assert_eq!(sim.ticks(), 1);
    assert_eq!(recorder.frames.len(), 1);
    assert_eq!(grid.get(1, 1), Some(Cell::Sand));
}
