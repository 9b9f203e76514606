use legion::*;
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::MystifyError;
use crate::render::{render_shapes, sync_viewport};
use crate::shape::Shape;
use crate::surface::Surface;
use crate::world_gen::{init_world, GenerationConfig};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationData {
    pub tick: u64,
    pub last_tick: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Shared shutdown flag, checked once per tick.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> StopSignal {
        StopSignal::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// The raw flag, for handing to signal handlers.
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.0.clone()
    }
}

#[system]
pub fn advance_time(
    #[resource] simulation_data: &mut SimulationData,
    #[resource] simulation_config: &SimulationConfig,
) {
    simulation_data.tick += 1;
    let frame_time = simulation_data.last_tick.elapsed();
    debug!(
        "Tick {} frame time: {:?}",
        simulation_data.tick, frame_time
    );
    if let Some(remaining) = simulation_config.tick_interval.checked_sub(frame_time) {
        std::thread::sleep(remaining);
    }
    simulation_data.last_tick = Instant::now();
}

/// Shapes, their resources and the per-tick schedule, drawing onto `S`.
pub struct Simulation<S: Surface + 'static> {
    world: World,
    resources: Resources,
    schedule: Schedule,
    _surface: PhantomData<S>,
}

impl<S: Surface + 'static> Simulation<S> {
    pub fn new(
        generation_config: GenerationConfig,
        simulation_config: SimulationConfig,
        surface: S,
    ) -> Result<Simulation<S>, MystifyError> {
        let viewport = surface.viewport_size();
        let mut rng = Pcg64::seed_from_u64(generation_config.seed);
        let mut world = World::default();
        init_world(&mut world, &generation_config, viewport, &mut rng)?;
        info!(
            "Spawned {} shapes ({} vertices, {} layers, speed {}) in {}x{}, seed {}",
            generation_config.polygons,
            generation_config.shape.vertices(),
            generation_config.shape.layers(),
            generation_config.shape.speed(),
            viewport.width,
            viewport.height,
            generation_config.seed
        );

        let mut resources = Resources::default();
        resources.insert(surface);
        resources.insert(viewport);
        resources.insert(rng);
        resources.insert(simulation_config);
        resources.insert(SimulationData {
            tick: 0,
            last_tick: Instant::now(),
        });

        let schedule = Schedule::builder()
            .add_thread_local_fn(sync_viewport::<S>)
            .add_system(crate::advance::advance_shapes_system())
            .add_thread_local_fn(render_shapes::<S>)
            .add_system(advance_time_system())
            .build();

        Ok(Simulation {
            world,
            resources,
            schedule,
            _surface: PhantomData,
        })
    }

    /// Advances and draws every shape once.
    pub fn tick(&mut self) {
        self.schedule.execute(&mut self.world, &mut self.resources);
    }

    /// Ticks until `stop` is raised or `max_ticks` ticks have run. `poll` is
    /// called before every tick and may raise `stop`. Returns the ticks run.
    pub fn run<F: FnMut(&StopSignal)>(
        &mut self,
        stop: &StopSignal,
        max_ticks: Option<u64>,
        mut poll: F,
    ) -> u64 {
        let mut ticks = 0;
        while max_ticks.map_or(true, |max| ticks < max) {
            poll(stop);
            if stop.is_stopped() {
                info!("Stop requested after {} ticks", ticks);
                break;
            }
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn ticks(&self) -> u64 {
        self.resources
            .get::<SimulationData>()
            .map_or(0, |data| data.tick)
    }

    pub fn shapes(&self) -> Vec<Shape> {
        <&Shape>::query().iter(&self.world).cloned().collect()
    }

    pub fn with_surface<R, F: FnOnce(&S) -> R>(&self, f: F) -> Option<R> {
        self.resources.get::<S>().map(|surface| f(&surface))
    }

    pub fn with_surface_mut<R, F: FnOnce(&mut S) -> R>(&mut self, f: F) -> Option<R> {
        self.resources
            .get_mut::<S>()
            .map(|mut surface| f(&mut surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_signal_is_shared() {
        let stop = StopSignal::new();
        let other = stop.clone();
        assert!(!stop.is_stopped());
        other.stop();
        assert!(stop.is_stopped());
        assert!(stop.flag().load(Ordering::SeqCst));
    }

    #[test]
    fn default_cadence_is_fifty_ticks_per_second() {
        assert_eq!(
            SimulationConfig::default().tick_interval,
            Duration::from_millis(20)
        );
    }
}
