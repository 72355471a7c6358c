//! Decorative page enhancements for a static site, compiled to WebAssembly.
//!
//! The main piece is a glowing particle background: a canvas behind the page
//! content where particles drift, lean towards the pointer and wrap at the
//! edges. The simulation lives in [`field`] and draws through the
//! [`renderer::Surface`] trait, so it runs and tests without a browser.
//! [`web`] connects it to the DOM.

mod utils;

pub mod color;
pub mod config;
pub mod field;
pub mod frame_loop;
pub mod parallax;
pub mod particle;
pub mod pointer;
pub mod renderer;
pub mod web;

pub use config::{FieldConfig, Span};
pub use field::ParticleField;
pub use frame_loop::{FrameLoop, FrameScheduler};
pub use particle::Particle;
pub use pointer::Pointer;
pub use renderer::{RadialGlow, Surface, Viewport};
pub use utils::Timer;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Installs the panic hook and the console logger. Call once before anything else.
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Stamps footer years, hooks up the hero parallax and starts the particle background.
#[wasm_bindgen]
pub fn enhance_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    web::stamp_footer_years(&document);
    web::mount_hero_parallax(&document)?;
    web::mount_particle_background(&window, &document)
}
