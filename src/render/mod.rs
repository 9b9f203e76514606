#[cfg(feature = "sdl")]
pub mod sdl;

use legion::{IntoQuery, Resources, World};
use log::error;

use crate::error::SurfaceError;
use crate::shape::{Shape, ShapeColor};
use crate::surface::{Color, Surface};

/// Red and green match the classic two-shape look; the rest are for extra polygons.
pub const PALETTE: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Copies the surface size into the `Viewport` resource.
pub fn sync_viewport<S: Surface + 'static>(_world: &mut World, resources: &mut Resources) {
    let size = match resources.get::<S>() {
        Some(surface) => surface.viewport_size(),
        None => return,
    };
    resources.insert(size);
}

/// Clears the surface, draws every shape in its color and presents the frame.
pub fn render_shapes<S: Surface + 'static>(world: &mut World, resources: &mut Resources) {
    if let Some(mut surface) = resources.get_mut::<S>() {
        if let Err(e) = draw_frame(world, &mut *surface) {
            error!("Failed to draw frame: {}", e);
        }
    }
}

fn draw_frame<S: Surface>(world: &World, surface: &mut S) -> Result<(), SurfaceError> {
    surface.clear()?;
    for (shape, color) in <(&Shape, &ShapeColor)>::query().iter(world) {
        shape.render(surface, color.0)?;
    }
    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), Color::RED);
        assert_eq!(palette_color(1), Color::GREEN);
        assert_eq!(palette_color(6), Color::RED);
        assert_eq!(palette_color(8), Color::BLUE);
    }
}
