pub mod advance;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod shape;
pub mod simulation;
pub mod surface;
pub mod world_gen;

pub use error::{ConfigError, MystifyError, SurfaceError};
pub use shape::{Shape, ShapeColor, ShapeConfig, Velocity, Vertex};
pub use simulation::{Simulation, SimulationConfig, StopSignal};
pub use surface::{Color, RecordingSurface, Surface, Viewport};
