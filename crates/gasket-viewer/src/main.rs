use anyhow::Result;
use winit::dpi::LogicalSize;

use gasket_engine::device::GpuInit;
use gasket_engine::logging::{init_logging, LoggingConfig};
use gasket_engine::window::{Runtime, RuntimeConfig};

mod app;
mod camera;
mod menu;

use app::ViewerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("gasket viewer: right-click opens the level menu, left-drag rotates, Q quits");

    let app = ViewerApp::new()?;

    Runtime::run(
        RuntimeConfig {
            title: "Sierpinski Gasket".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        },
        GpuInit::default(),
        app,
    )
}
