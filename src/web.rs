// Browser wiring: creates the background canvas, forwards pointer, resize and
// visibility events to the field, and drives it with requestAnimationFrame.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::frame_loop::{FrameLoop, FrameScheduler};
use crate::parallax::{self, Rect};
use crate::renderer::Viewport;
#[cfg(feature = "frame-timing")]
use crate::utils::Timer;
use rand::rngs::ThreadRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, Window,
};

const FOOTER_YEAR_IDS: [&str; 4] = ["year", "year-2", "year-3", "year-4"];

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame behind the `FrameScheduler` seam. The callback slot
/// is filled after the background exists, since the callback needs it.
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;
    type Error = JsValue;

    fn request_frame(&mut self) -> Result<i32, JsValue> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback is not installed"))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn cancel_frame(&mut self, handle: i32) -> Result<(), JsValue> {
        self.window.cancel_animation_frame(handle)
    }
}

struct ParticleBackground {
    window: Window,
    context: CanvasRenderingContext2d,
    field: ParticleField<ThreadRng>,
    frames: FrameLoop<AnimationFrames>,
}

impl ParticleBackground {
    fn resize(&mut self) -> Result<(), JsValue> {
        let viewport = viewport(&self.window)?;
        log::debug!(
            "particle field resized to {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        self.field.resize(&mut self.context, viewport)
    }

    fn frame(&mut self) -> Result<(), JsValue> {
        if !self.frames.begin_frame() {
            return Ok(());
        }
        {
            #[cfg(feature = "frame-timing")]
            let _timer = Timer::new("ParticleBackground::frame");
            self.field.tick(&mut self.context)?;
        }
        self.frames.end_frame()
    }

    fn visibility_changed(&mut self, hidden: bool) -> Result<(), JsValue> {
        if hidden {
            self.field.release_pointer();
            self.frames.pause()
        } else {
            self.frames.resume().map(|_| ())
        }
    }
}

fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok(Viewport::new(width, height, window.device_pixel_ratio()))
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Appends a full-bleed `canvas.particle-canvas` to the body and starts the
/// animation. Without a 2d context the background stays inert.
pub fn mount_particle_background(window: &Window, document: &Document) -> Result<(), JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_class_name("particle-canvas");
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&canvas)?;

    let context = match canvas.get_context("2d")? {
        Some(context) => context.dyn_into::<CanvasRenderingContext2d>()?,
        None => {
            log::warn!("2d canvas context unavailable, particle background disabled");
            return Ok(());
        }
    };

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let frames = FrameLoop::new(AnimationFrames {
        window: window.clone(),
        callback: callback.clone(),
    });
    let background = Rc::new(RefCell::new(ParticleBackground {
        window: window.clone(),
        context,
        field: ParticleField::new(FieldConfig::default(), rand::thread_rng()),
        frames,
    }));
    background.borrow_mut().resize()?;

    {
        let background = background.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Err(e) = background.borrow_mut().frame() {
                log::error!("particle frame failed: {:?}", e);
            }
        }) as Box<dyn FnMut()>));
    }

    {
        let background = background.clone();
        listen(window, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                background
                    .borrow_mut()
                    .field
                    .move_pointer(mouse.client_x() as f64, mouse.client_y() as f64);
            }
        })?;
    }

    if let Some(root) = document.document_element() {
        let background = background.clone();
        listen(&root, "mouseleave", move |_| {
            background.borrow_mut().field.release_pointer();
        })?;
    }

    {
        let background = background.clone();
        let page = document.clone();
        listen(document, "visibilitychange", move |_| {
            let hidden = page.hidden();
            if let Err(e) = background.borrow_mut().visibility_changed(hidden) {
                log::error!("visibility change failed: {:?}", e);
            }
        })?;
    }

    {
        let background = background.clone();
        listen(window, "resize", move |_| {
            if let Err(e) = background.borrow_mut().resize() {
                log::error!("particle resize failed: {:?}", e);
            }
        })?;
    }

    let particles = background.borrow().field.particles().len();
    log::info!("particle background started with {} particles", particles);
    background.borrow_mut().frames.resume()?;
    Ok(())
}

fn layer(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    match document.query_selector(selector)? {
        Some(element) => Ok(Some(element.dyn_into::<HtmlElement>()?)),
        None => Ok(None),
    }
}

/// Moves `.layer-1` and `.layer-2` with the pointer while it is over `.hero`.
pub fn mount_hero_parallax(document: &Document) -> Result<(), JsValue> {
    let hero = match document.query_selector(".hero")? {
        Some(hero) => hero,
        None => return Ok(()),
    };
    let layers = [layer(document, ".layer-1")?, layer(document, ".layer-2")?];
    let bounds_of = hero.clone();
    listen(&hero, "mousemove", move |event| {
        let mouse = match event.dyn_ref::<MouseEvent>() {
            Some(mouse) => mouse,
            None => return,
        };
        let bounds = bounds_of.get_bounding_client_rect();
        let rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let transforms =
            match parallax::layer_transforms(mouse.client_x() as f64, mouse.client_y() as f64, &rect) {
                Some(transforms) => transforms,
                None => return,
            };
        for (layer, transform) in layers.iter().zip(transforms.iter()) {
            if let Some(layer) = layer {
                if let Err(e) = layer.style().set_property("transform", transform) {
                    log::error!("parallax transform failed: {:?}", e);
                }
            }
        }
    })
}

/// Writes the current year into whichever footer year slots the page has.
pub fn stamp_footer_years(document: &Document) {
    let year = js_sys::Date::new_0().get_full_year().to_string();
    for id in FOOTER_YEAR_IDS.iter() {
        if let Some(element) = document.get_element_by_id(id) {
            element.set_text_content(Some(&year));
        }
    }
}
