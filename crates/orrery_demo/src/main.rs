//! Orrery — a small procedural-mesh demo: a subdivided icosphere planet,
//! an orbiting moon, a cube and a ground quad, lambert-lit by a drifting
//! sun.  `[` / `]` re-tessellate the planet live; Escape quits.

mod app;
mod clock;
mod config;
mod surface;

use winit::event_loop::{ControlFlow, EventLoop};

use app::DemoApp;
use config::DemoConfig;

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        // wgpu is chatty at info level; keep it down by default.
        builder
            .filter_level(log::LevelFilter::Info)
            .filter_module("wgpu_core", log::LevelFilter::Warn)
            .filter_module("wgpu_hal", log::LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DemoConfig::new()
        .with_title("Orrery")
        .with_size(1280, 720)
        .with_vsync(true)
        .with_planet_subdivisions(4);
    let mut app = DemoApp::new(config);

    let event_loop = EventLoop::new()?;
    // Poll: spin the loop as fast as possible, one frame per iteration.
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    Ok(())
}
