use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::error::SurfaceError;
use crate::shape::Vertex;
use crate::simulation::StopSignal;
use crate::surface::{Color, Surface, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

pub struct SdlSurface {
    canvas: Canvas<Window>,
}

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub surface: SdlSurface,
}

fn surface_error<E: std::fmt::Display>(e: E) -> SurfaceError {
    SurfaceError(e.to_string())
}

pub fn init_graphics(display_config: DisplayConfig) -> Result<Graphics, SurfaceError> {
    let sdl_context = sdl2::init().map_err(surface_error)?;
    let video_subsystem = sdl_context.video().map_err(surface_error)?;

    let mut builder = video_subsystem.window("Mystify", display_config.width, display_config.height);
    builder.position_centered().resizable();
    if display_config.fullscreen {
        builder.fullscreen_desktop();
    }
    let window = builder.build().map_err(surface_error)?;
    // No vsync: the simulation clock sets the pace.
    let canvas = window.into_canvas().build().map_err(surface_error)?;

    Ok(Graphics {
        sdl_context,
        surface: SdlSurface { canvas },
    })
}

impl Surface for SdlSurface {
    fn viewport_size(&self) -> Viewport {
        match self.canvas.output_size() {
            Ok((width, height)) => Viewport::new(width as i32, height as i32),
            Err(_) => {
                let (width, height) = self.canvas.window().size();
                Viewport::new(width as i32, height as i32)
            }
        }
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let black = Color::BLACK;
        self.canvas
            .set_draw_color(pixels::Color::RGB(black.r, black.g, black.b));
        self.canvas.clear();
        Ok(())
    }

    fn draw_line(&mut self, from: Vertex, to: Vertex, color: Color) -> Result<(), SurfaceError> {
        self.canvas
            .set_draw_color(pixels::Color::RGB(color.r, color.g, color.b));
        self.canvas
            .draw_line(Point::new(from.x, from.y), Point::new(to.x, to.y))
            .map_err(SurfaceError)
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.canvas.present();
        Ok(())
    }
}

/// Drains pending window events, raising `stop` on quit or Escape.
pub fn poll_events(event_pump: &mut EventPump, stop: &StopSignal) {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => stop.stop(),
            _ => {}
        }
    }
}
