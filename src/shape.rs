use nalgebra::Vector2;
use rand::Rng;

use crate::error::{ConfigError, MystifyError, SurfaceError};
use crate::surface::{Color, Surface, Viewport};

pub type Vertex = Vector2<i32>;
pub type Velocity = Vector2<i32>;

/// Distance from the viewport edge that initial vertices keep.
pub const MARGIN: i32 = 10;
pub const MIN_VELOCITY: i32 = 2;
pub const MAX_SPEED: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeConfig {
    vertices: usize,
    layers: usize,
    speed: i32,
}

impl ShapeConfig {
    pub fn new(vertices: usize, layers: usize, speed: i32) -> Result<ShapeConfig, ConfigError> {
        if vertices < 3 {
            return Err(ConfigError::TooFewVertices(vertices));
        }
        if layers < 1 {
            return Err(ConfigError::TooFewLayers(layers));
        }
        if speed < 3 {
            return Err(ConfigError::SpeedTooLow(speed));
        }
        if speed > MAX_SPEED {
            return Err(ConfigError::SpeedTooHigh {
                speed,
                max: MAX_SPEED,
            });
        }
        Ok(ShapeConfig {
            vertices,
            layers,
            speed,
        })
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeColor(pub Color);

/// A bouncing polygon and its trail.
///
/// All layers share one arena of `layers * vertices` points. `head` is the
/// slot holding layer 0; layer `k` lives in slot `(head + k) % layers`.
/// Advancing moves `head` back one slot, so the oldest slot is reused for the
/// new head polygon and every other layer shifts down without copying.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    config: ShapeConfig,
    points: Vec<Vertex>,
    velocities: Vec<Velocity>,
    head: usize,
    filled: usize,
}

pub fn random_coord<R: Rng + ?Sized>(max: i32, rng: &mut R) -> i32 {
    rng.gen_range(MARGIN..(max - MARGIN))
}

/// Magnitude only; callers pick the sign.
pub fn random_velocity<R: Rng + ?Sized>(speed: i32, rng: &mut R) -> i32 {
    rng.gen_range(MIN_VELOCITY..speed)
}

/// Moves one coordinate by its velocity, bouncing off `[0, limit]`.
fn step_axis<R: Rng + ?Sized>(
    position: i32,
    velocity: &mut i32,
    limit: i32,
    speed: i32,
    rng: &mut R,
) -> i32 {
    let candidate = position.saturating_add(*velocity);
    if candidate < 0 || candidate > limit {
        let magnitude = random_velocity(speed, rng);
        *velocity = if *velocity > 0 { -magnitude } else { magnitude };
    }
    position.saturating_add(*velocity)
}

impl Shape {
    pub fn new<R: Rng + ?Sized>(
        config: ShapeConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Shape, MystifyError> {
        if viewport.width <= 2 * MARGIN || viewport.height <= 2 * MARGIN {
            return Err(MystifyError::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let mut points = vec![Vertex::zeros(); config.layers * config.vertices];
        let mut velocities = Vec::with_capacity(config.vertices);
        for point in points.iter_mut().take(config.vertices) {
            *point = Vertex::new(
                random_coord(viewport.width, rng),
                random_coord(viewport.height, rng),
            );
            velocities.push(Velocity::new(
                random_velocity(config.speed, rng),
                random_velocity(config.speed, rng),
            ));
        }
        Ok(Shape {
            config,
            points,
            velocities,
            head: 0,
            filled: 1,
        })
    }

    /// Builds a shape from explicit head positions and velocities.
    pub fn from_parts(
        config: ShapeConfig,
        head: &[Vertex],
        velocities: &[Velocity],
    ) -> Option<Shape> {
        if head.len() != config.vertices || velocities.len() != config.vertices {
            return None;
        }
        let mut points = vec![Vertex::zeros(); config.layers * config.vertices];
        points[..config.vertices].copy_from_slice(head);
        Some(Shape {
            config,
            points,
            velocities: velocities.to_vec(),
            head: 0,
            filled: 1,
        })
    }

    /// Number of layers currently holding a polygon.
    pub fn filled_layers(&self) -> usize {
        self.filled
    }

    pub fn velocities(&self) -> &[Velocity] {
        &self.velocities
    }

    fn slot_range(&self, layer: usize) -> std::ops::Range<usize> {
        let slot = (self.head + layer) % self.config.layers;
        let start = slot * self.config.vertices;
        start..start + self.config.vertices
    }

    /// Vertices of `layer`, or `None` while that layer is still empty.
    pub fn layer(&self, layer: usize) -> Option<&[Vertex]> {
        if layer >= self.filled {
            return None;
        }
        Some(&self.points[self.slot_range(layer)])
    }

    pub fn head(&self) -> &[Vertex] {
        &self.points[self.slot_range(0)]
    }

    /// Shifts the trail down one layer and moves the head polygon one step.
    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let layers = self.config.layers;
        let old = self.slot_range(0);
        self.head = (self.head + layers - 1) % layers;
        self.filled = std::cmp::min(self.filled + 1, layers);
        let new = self.slot_range(0);

        // With a single layer `old` and `new` are the same slot; each vertex
        // only reads itself so the update stays correct in place.
        for i in 0..self.config.vertices {
            let position = self.points[old.start + i];
            let velocity = &mut self.velocities[i];
            let x = step_axis(
                position.x,
                &mut velocity.x,
                viewport.width,
                self.config.speed,
                rng,
            );
            let y = step_axis(
                position.y,
                &mut velocity.y,
                viewport.height,
                self.config.speed,
                rng,
            );
            self.points[new.start + i] = Vertex::new(x, y);
        }
    }

    /// Draws every filled layer, oldest first, so newer layers end up on top.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        color: Color,
    ) -> Result<(), SurfaceError> {
        for layer in (0..self.filled).rev() {
            let polygon = &self.points[self.slot_range(layer)];
            draw_polygon(surface, polygon, color)?;
        }
        Ok(())
    }
}

fn draw_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    polygon: &[Vertex],
    color: Color,
) -> Result<(), SurfaceError> {
    for pair in polygon.windows(2) {
        surface.draw_line(pair[0], pair[1], color)?;
    }
    // Connect last and first point.
    if let (Some(last), Some(first)) = (polygon.last(), polygon.first()) {
        surface.draw_line(*last, *first, color)?;
    }
    Ok(())
}
