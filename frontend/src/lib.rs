use wasm_bindgen::JsValue;
use web_sys::console;

pub mod config;
pub mod redirect;

pub use redirect::{redirect_to_time_zone, PathEncoding, RedirectError};

#[cfg_attr(not(test), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second init (hot reload) only means a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting Bnuuy Time redirector (wasm)".into());

    redirect_to_time_zone().map_err(|err| {
        log::error!("{}", err);
        JsValue::from(err)
    })
}
