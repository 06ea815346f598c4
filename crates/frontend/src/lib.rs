pub mod app;
pub mod layout;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::mount_behaviors();
}

#[wasm_bindgen(start)]
pub fn start() {
    init();
}
