use clap::Parser;
use log::{error, info, warn};
use signal_hook::consts::{SIGINT, SIGTERM};

use mystify::config::{Options, Settings};
use mystify::logging::init_logging;
use mystify::{MystifyError, Simulation, StopSignal};

#[cfg(feature = "sdl")]
fn run_display(settings: &Settings, stop: &StopSignal) -> Result<u64, MystifyError> {
    use mystify::render::sdl::{init_graphics, poll_events, DisplayConfig, Graphics};
    use mystify::SurfaceError;

    let Graphics {
        sdl_context,
        surface,
    } = init_graphics(DisplayConfig {
        width: settings.width,
        height: settings.height,
        fullscreen: settings.fullscreen,
    })?;
    let mut event_pump = sdl_context.event_pump().map_err(SurfaceError)?;
    let mut simulation = Simulation::new(settings.generation, settings.simulation, surface)?;
    Ok(simulation.run(stop, settings.ticks, |stop| {
        poll_events(&mut event_pump, stop)
    }))
}

#[cfg(not(feature = "sdl"))]
fn run_display(settings: &Settings, stop: &StopSignal) -> Result<u64, MystifyError> {
    use mystify::{RecordingSurface, Viewport};

    info!("Built without the sdl feature, running headless");
    let surface = RecordingSurface::new(Viewport::new(
        settings.width as i32,
        settings.height as i32,
    ));
    let mut simulation = Simulation::new(settings.generation, settings.simulation, surface)?;
    let ticks = simulation.run(stop, settings.ticks, |_| {});
    if let Some(lines) = simulation.with_surface(|surface| surface.lines().len()) {
        info!("Last frame had {} line segments", lines);
    }
    Ok(ticks)
}

fn run(options: &Options) -> Result<(), MystifyError> {
    let settings = options.validate()?;
    if settings.fade {
        warn!("Fading trails are not supported, drawing flat colors");
    }

    let stop = StopSignal::new();
    signal_hook::flag::register(SIGINT, stop.flag())?;
    signal_hook::flag::register(SIGTERM, stop.flag())?;

    let ticks = run_display(&settings, &stop)?;
    info!("Finished after {} ticks", ticks);
    Ok(())
}

pub fn main() {
    let options = Options::parse();
    if let Err(e) = init_logging(options.log_level, options.log_file.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    if let Err(e) = run(&options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
