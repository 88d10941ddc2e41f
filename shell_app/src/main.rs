//! Shell demo application
//!
//! Opens a single window through the windowing driver, logs key input,
//! and runs until the window is closed.

use pane_ui::core::config::{Config, DriverConfig};
use pane_ui::foundation::logging;
use pane_ui::ui::{Canvas, Window};
use pane_ui::Driver;

const CONFIG_PATH: &str = "shell.toml";

fn main() {
    let config = DriverConfig::load_from_file(CONFIG_PATH).unwrap_or_default();
    logging::init_with_filter(&config.log_filter);

    log::info!("starting shell...");

    let mut driver = match Driver::new(config.clone()) {
        Ok(driver) => driver,
        Err(err) => {
            log::error!("failed to start windowing driver: {err}");
            std::process::exit(1);
        }
    };

    let id = driver.create_window(&config.window.title);
    log::info!("windows registered: {}", driver.all_windows().len());

    {
        let mut window = driver.window(id).expect("window just created");
        window.set_size(config.window.width, config.window.height);
        window.canvas().set_on_key_down(Box::new(|event| {
            log::info!(
                "key down: {} (string {:?}, code {}, modifiers {:?})",
                event.name,
                event.string,
                event.code,
                event.modifiers
            );
        }));
        window.show();
        log::info!("window {:?} shown ({:?})", window.id(), window.title());
    }

    driver.run();
    log::info!("shell exited");
}
