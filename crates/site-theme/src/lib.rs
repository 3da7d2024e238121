pub mod color;
pub mod cover;
pub mod pair;
pub mod plugin;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

/// Selector of the landing page's cover element.
pub const COVER_SELECTOR: &str = ".cover";

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
