mod app;
mod cache;
mod gallery;
mod infra;
mod ui;

use std::process::ExitCode;

use app::controller::GalleryController;
use infra::config::AppConfig;
use infra::logging::init_logging;
use infra::seed::demo_artifacts;
use ui::app_shell::launch_gallery_window;

fn main() -> ExitCode {
    init_logging();
    let config = AppConfig::load();

    let mut controller = GalleryController::new(&config);
    if config.seed_demo {
        controller.seed(&demo_artifacts());
    }

    match launch_gallery_window(controller, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::from(1)
        }
    }
}
