use std::time::Duration;

use mystify::world_gen::GenerationConfig;
use mystify::{
    Color, RecordingSurface, ShapeConfig, Simulation, SimulationConfig, StopSignal, Viewport,
};

fn simulation(
    polygons: u32,
    vertices: usize,
    layers: usize,
    seed: u64,
) -> Simulation<RecordingSurface> {
    Simulation::new(
        GenerationConfig {
            shape: ShapeConfig::new(vertices, layers, 10).unwrap(),
            polygons,
            seed,
        },
        SimulationConfig {
            tick_interval: Duration::from_millis(1),
        },
        RecordingSurface::new(Viewport::new(640, 480)),
    )
    .unwrap()
}

#[test]
fn tick_draws_one_frame() {
    let mut simulation = simulation(2, 4, 12, 3);
    simulation.tick();

    assert_eq!(simulation.ticks(), 1);
    let (clears, presents, lines) = simulation
        .with_surface(|surface| (surface.clears(), surface.presents(), surface.lines().to_vec()))
        .unwrap();
    assert_eq!(clears, 1);
    assert_eq!(presents, 1);
    // Two shapes, two filled layers each, four edges per layer.
    assert_eq!(lines.len(), 2 * 2 * 4);
    assert!(lines[..8].iter().all(|line| line.color == Color::RED));
    assert!(lines[8..].iter().all(|line| line.color == Color::GREEN));
}

#[test]
fn trail_grows_to_layer_count() {
    let layers = 5;
    let mut simulation = simulation(3, 3, layers, 11);
    for tick in 1..=12 {
        simulation.tick();
        for shape in simulation.shapes() {
            assert_eq!(shape.filled_layers(), std::cmp::min(tick + 1, layers));
        }
        let lines = simulation
            .with_surface(|surface| surface.lines().len())
            .unwrap();
        assert_eq!(lines, 3 * std::cmp::min(tick + 1, layers) * 3);
    }
}

#[test]
fn trail_follows_head() {
    let mut simulation = simulation(2, 4, 6, 5);
    let mut previous = simulation.shapes();
    for _ in 0..30 {
        simulation.tick();
        let current = simulation.shapes();
        for (before, after) in previous.iter().zip(current.iter()) {
            for layer in 1..after.filled_layers() {
                assert_eq!(after.layer(layer), before.layer(layer - 1));
            }
        }
        previous = current;
    }
}

#[test]
fn same_seed_same_animation() {
    let mut first = simulation(2, 5, 8, 42);
    let mut second = simulation(2, 5, 8, 42);
    for _ in 0..50 {
        first.tick();
        second.tick();
    }
    assert_eq!(first.shapes(), second.shapes());
    let first_lines = first.with_surface(|surface| surface.lines().to_vec());
    let second_lines = second.with_surface(|surface| surface.lines().to_vec());
    assert_eq!(first_lines, second_lines);

    let mut other = simulation(2, 5, 8, 43);
    for _ in 0..50 {
        other.tick();
    }
    assert_ne!(first.shapes(), other.shapes());
}

#[test]
fn run_stops_at_tick_limit() {
    let mut simulation = simulation(1, 4, 3, 1);
    let stop = StopSignal::new();
    let ticks = simulation.run(&stop, Some(7), |_| {});
    assert_eq!(ticks, 7);
    assert_eq!(simulation.ticks(), 7);
}

#[test]
fn run_stops_on_signal() {
    let mut simulation = simulation(1, 4, 3, 1);
    let stop = StopSignal::new();
    let mut polls = 0;
    let ticks = simulation.run(&stop, None, |stop| {
        polls += 1;
        if polls > 3 {
            stop.stop();
        }
    });
    assert_eq!(ticks, 3);
    assert_eq!(polls, 4);

    // Already stopped: nothing more runs.
    assert_eq!(simulation.run(&stop, None, |_| {}), 0);
}

#[test]
fn shapes_stay_bounded_after_resize() {
    let mut simulation = simulation(2, 4, 4, 9);
    simulation.tick();
    let large = Viewport::new(800, 600);
    simulation.with_surface_mut(|surface| surface.resize(large));
    for _ in 0..1000 {
        simulation.tick();
        for shape in simulation.shapes() {
            for vertex in shape.head() {
                assert!(vertex.x >= -10 && vertex.x <= large.width + 10);
                assert!(vertex.y >= -10 && vertex.y <= large.height + 10);
            }
        }
    }
}
