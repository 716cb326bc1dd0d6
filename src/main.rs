//! GPU-accelerated OBJ mesh viewer with an arcball orbit camera.

use std::path::Path;

use meshview::{Options, Viewer};

/// Optional config file, read from the working directory when present.
const OPTIONS_FILE: &str = "meshview.toml";

fn load_options() -> Options {
    if !Path::new(OPTIONS_FILE).exists() {
        return Options::default();
    }
    match Options::load(OPTIONS_FILE) {
        Ok(options) => {
            log::info!("loaded options from {OPTIONS_FILE}");
            options
        }
        Err(e) => {
            log::warn!("ignoring {OPTIONS_FILE}: {e}");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder().with_options(load_options());
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_path(path);
    } else {
        log::info!("no OBJ path given, showing the built-in demo mesh");
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
