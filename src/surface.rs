use crate::error::SurfaceError;
use crate::shape::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

/// Size of the area shapes bounce within, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Viewport {
        Viewport { width, height }
    }
}

/// Something line segments can be drawn onto, one frame at a time.
pub trait Surface {
    fn viewport_size(&self) -> Viewport;
    /// Fills the whole surface with black.
    fn clear(&mut self) -> Result<(), SurfaceError>;
    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), SurfaceError>;
    fn present(&mut self) -> Result<(), SurfaceError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    pub from: Vertex,
    pub to: Vertex,
    pub color: Color,
}

/// In-memory surface. Keeps the lines drawn since the last clear.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    lines: Vec<Line>,
    clears: u64,
    presents: u64,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> RecordingSurface {
        RecordingSurface {
            viewport,
            lines: Vec::new(),
            clears: 0,
            presents: 0,
        }
    }

    /// Resizes the surface. Takes effect on the next viewport query.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl Surface for RecordingSurface {
    fn viewport_size(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.lines.clear();
        self.clears += 1;
        Ok(())
    }

    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), SurfaceError> {
        self.lines.push(Line { from, to, color });
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_frame() {
        let mut surface = RecordingSurface::new(Viewport::new(100, 50));
        surface
            .draw_line(Vertex::new(0, 0), Vertex::new(10, 10), Color::RED)
            .unwrap();
        assert_eq!(surface.lines().len(), 1);
        surface.clear().unwrap();
        assert!(surface.lines().is_empty());
        assert_eq!(surface.clears(), 1);
    }

    #[test]
    fn resize_changes_viewport() {
        let mut surface = RecordingSurface::new(Viewport::new(100, 50));
        surface.resize(Viewport::new(30, 40));
        assert_eq!(surface.viewport_size(), Viewport::new(30, 40));
    }
}
