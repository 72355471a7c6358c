// Tuning constants for the particle field, grouped so a field can be built
// with non-default values in tests or on pages that want a denser background

use crate::color::Rgba;
use rand::Rng;

/// Half-open range `[min, max)` sampled uniformly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Span {
        Span { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen::<f64>() * (self.max - self.min) + self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Viewport width that receives `particles_per_reference_width` particles.
    pub reference_width: f64,
    pub particles_per_reference_width: f64,
    pub radius: Span,
    pub hue: Span,
    /// Applied to each velocity component independently.
    pub initial_velocity: Span,
    pub opacity: Span,
    pub attraction_strength: f64,
    pub attraction_cap: f64,
    pub attraction_scale: f64,
    /// Added to the pointer distance so a coincident pointer never divides by zero.
    pub distance_epsilon: f64,
    /// How far past an edge a particle may drift before it wraps.
    pub wrap_margin: f64,
    /// Gradient extent as a multiple of the particle radius.
    pub glow_scale: f64,
    pub backdrop: Rgba,
    pub max_pixel_ratio: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            reference_width: 1200.0,
            particles_per_reference_width: 45.0,
            radius: Span::new(8.0, 22.0),
            hue: Span::new(180.0, 360.0),
            initial_velocity: Span::new(-0.1, 0.1),
            opacity: Span::new(0.15, 0.6),
            attraction_strength: 0.08,
            attraction_cap: 0.03,
            attraction_scale: 0.0005,
            distance_epsilon: 0.001,
            wrap_margin: 50.0,
            glow_scale: 3.0,
            backdrop: Rgba::new(6, 10, 18, 0.18),
            max_pixel_ratio: 2.0,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a viewport `width` logical pixels wide.
    /// Scales linearly with width and has no upper bound.
    pub fn particle_count(&self, width: f64) -> usize {
        let count = (width / self.reference_width * self.particles_per_reference_width).ceil();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    pub fn cap_pixel_ratio(&self, ratio: f64) -> f64 {
        if ratio.is_finite() && ratio > 0.0 {
            ratio.min(self.max_pixel_ratio)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particle_count_scales_with_width() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(1200.0), 45);
        assert_eq!(config.particle_count(600.0), 23);
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(2400.0), 90);
        assert_eq!(config.particle_count(-300.0), 0);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        let config = FieldConfig::default();
        assert_eq!(config.cap_pixel_ratio(3.0), 2.0);
        assert_eq!(config.cap_pixel_ratio(1.5), 1.5);
        assert_eq!(config.cap_pixel_ratio(0.0), 1.0);
    }

    #[test]
    fn span_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let span = Span::new(8.0, 22.0);
        for _ in 0..1000 {
            assert!(span.contains(span.sample(&mut rng)));
        }
    }
}
