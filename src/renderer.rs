// Drawing seam between the particle field and the canvas. The field only
// describes what to draw; a Surface turns that into context calls.

use crate::color::{Hsla, Rgba};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Logical size of the drawing area plus the device pixel ratio used for
/// the backing store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Viewport {
        Viewport {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).ceil().max(0.0) as u32,
            (self.height * self.pixel_ratio).ceil().max(0.0) as u32,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Hsla,
}

impl ColorStop {
    pub fn new(offset: f32, color: Hsla) -> ColorStop {
        ColorStop { offset, color }
    }
}

/// A filled circle of `radius` painted with a radial gradient that starts at
/// the center and reaches `extent`. Stops are ordered by offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: [f64; 2],
    pub radius: f64,
    pub extent: f64,
    pub stops: [ColorStop; 3],
}

pub trait Surface {
    type Error;

    /// Sizes the backing store for `viewport` and scales drawing so callers
    /// keep working in logical coordinates.
    fn resize(&mut self, viewport: &Viewport) -> Result<(), Self::Error>;

    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, width: f64, height: f64, color: &Rgba);

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn resize(&mut self, viewport: &Viewport) -> Result<(), JsValue> {
        let canvas = self
            .canvas()
            .ok_or_else(|| JsValue::from_str("context is not attached to a canvas"))?;
        let (backing_width, backing_height) = viewport.backing_size();
        canvas.set_width(backing_width);
        canvas.set_height(backing_height);
        let style = canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        self.set_transform(
            viewport.pixel_ratio,
            0.0,
            0.0,
            viewport.pixel_ratio,
            0.0,
            0.0,
        )
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, width: f64, height: f64, color: &Rgba) {
        self.set_fill_style(&JsValue::from_str(&color.to_string()));
        CanvasRenderingContext2d::fill_rect(self, 0.0, 0.0, width, height);
    }

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), JsValue> {
        let [x, y] = glow.center;
        let gradient = self.create_radial_gradient(x, y, 0.0, x, y, glow.extent)?;
        for stop in &glow.stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_string())?;
        }
        self.set_fill_style(&gradient);
        self.begin_path();
        self.arc(x, y, glow.radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.fill();
        Ok(())
    }
}

/// Surface that only remembers what it was asked to draw.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub viewports: Vec<Viewport>,
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum DrawOp {
    Clear(f64, f64),
    Rect(f64, f64, Rgba),
    Glow(RadialGlow),
}

#[cfg(test)]
impl Surface for RecordingSurface {
    type Error = ();

    fn resize(&mut self, viewport: &Viewport) -> Result<(), ()> {
        self.viewports.push(*viewport);
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear(width, height));
    }

    fn fill_rect(&mut self, width: f64, height: f64, color: &Rgba) {
        self.ops.push(DrawOp::Rect(width, height, *color));
    }

    fn fill_glow(&mut self, glow: &RadialGlow) -> Result<(), ()> {
        self.ops.push(DrawOp::Glow(*glow));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_size_rounds_up_device_pixels() {
        assert_eq!(Viewport::new(1200.0, 800.0, 2.0).backing_size(), (2400, 1600));
        assert_eq!(Viewport::new(333.3, 100.0, 1.5).backing_size(), (500, 150));
        assert_eq!(Viewport::new(0.0, 0.0, 1.0).backing_size(), (0, 0));
    }
}
