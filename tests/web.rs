//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use glowfield::{Surface, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn enhance_page_appends_particle_canvas() {
    glowfield::initialize();
    glowfield::enhance_page().unwrap();

    let canvas = document()
        .query_selector("canvas.particle-canvas")
        .unwrap()
        .expect("particle canvas was not mounted")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    assert!(canvas.width() > 0);
}

#[wasm_bindgen_test]
fn canvas_surface_scales_backing_store() {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let mut context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();

    context.resize(&Viewport::new(300.0, 150.0, 2.0)).unwrap();

    assert_eq!(canvas.width(), 600);
    assert_eq!(canvas.height(), 300);
    assert_eq!(
        canvas.style().get_property_value("width").unwrap(),
        "300px"
    );
}

#[wasm_bindgen_test]
fn footer_years_are_stamped() {
    let document = document();
    let slot = document.create_element("span").unwrap();
    slot.set_id("year-3");
    document.body().unwrap().append_child(&slot).unwrap();

    glowfield::web::stamp_footer_years(&document);

    let year = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(slot.text_content(), Some(year));
}
