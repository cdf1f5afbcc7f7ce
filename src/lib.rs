//! Decorative effects for the portfolio page, compiled to WebAssembly.
//!
//! The animation cores (`companion`, `field`) and their helpers are plain Rust
//! and build on any target, which is how the host-side tests exercise them.
//! The browser glue below them is wasm-only.

pub mod companion;
pub mod constants;
pub mod ease;
pub mod field;
pub mod input;
pub mod theme;
pub mod timers;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod companion_view;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use mount::PortfolioFx;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[fx] portfolio-fx loaded");
    Ok(())
}
