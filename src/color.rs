// CSS color values handed to the canvas as strings

use std::fmt;

/// Opaque channels with a fractional alpha, printed as `rgba(r,g,b,a)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Builds the channels from an unsigned 32 laid out as 0x00RRGGBB.
    pub fn from_u32(num: u32, a: f64) -> Rgba {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Rgba { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Hsla {
        Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_prints_as_css() {
        assert_eq!(Rgba::new(6, 10, 18, 0.18).to_string(), "rgba(6,10,18,0.18)");
        assert_eq!(Rgba::from_u32(0x060a12, 0.18), Rgba::new(6, 10, 18, 0.18));
    }

    #[test]
    fn hsla_prints_percentages() {
        let color = Hsla::new(200.5, 90.0, 60.0, 0.25);
        assert_eq!(color.to_string(), "hsla(200.5, 90%, 60%, 0.25)");
    }
}
