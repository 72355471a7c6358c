// Simple particle struct to keep track of individual position, velocity, and color.
// Everything but position and velocity is fixed when the particle is created.

use crate::color::Hsla;
use crate::config::FieldConfig;
use crate::pointer::Pointer;
use crate::renderer::{ColorStop, RadialGlow};
use rand::Rng;
use nalgebra_glm as glm;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub hue: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], radius: f64, hue: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            hue,
            opacity,
        }
    }

    /// Places a particle uniformly inside a `width` by `height` viewport.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = config.radius.sample(rng);
        let hue = config.hue.sample(rng);
        let vel_x = config.initial_velocity.sample(rng);
        let vel_y = config.initial_velocity.sample(rng);
        let opacity = config.opacity.sample(rng);
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, hue, opacity)
    }

    /// Advances one frame: pull towards the pointer, move, then wrap.
    /// Velocity is never damped, so it keeps accumulating while the pointer stays close.
    pub fn update(&mut self, pointer: &Pointer, width: f64, height: f64, config: &FieldConfig) {
        let to_pointer = glm::vec2(pointer.x - self.pos[0], pointer.y - self.pos[1]);
        let distance = glm::length(&to_pointer) + config.distance_epsilon;
        let attract = attraction(distance, config);
        self.vel[0] += to_pointer[0] * attract * config.attraction_scale;
        self.vel[1] += to_pointer[1] * attract * config.attraction_scale;
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        self.pos[0] = wrap(self.pos[0], width, config.wrap_margin);
        self.pos[1] = wrap(self.pos[1], height, config.wrap_margin);
    }

    pub fn glow(&self, config: &FieldConfig) -> RadialGlow {
        RadialGlow {
            center: self.pos,
            radius: self.radius,
            extent: self.radius * config.glow_scale,
            stops: [
                ColorStop::new(0.0, Hsla::new(self.hue, 90.0, 60.0, self.opacity)),
                ColorStop::new(0.4, Hsla::new(self.hue, 80.0, 50.0, self.opacity * 0.35)),
                ColorStop::new(1.0, Hsla::new(self.hue, 70.0, 40.0, 0.0)),
            ],
        }
    }
}

/// Inverse-distance pull, capped so a pointer sitting on a particle stays gentle.
pub fn attraction(distance: f64, config: &FieldConfig) -> f64 {
    (config.attraction_strength / distance).min(config.attraction_cap)
}

/// Moves `value` to the opposite margin once it is strictly outside
/// `[-margin, extent + margin]`.
pub fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
    let mut value = value;
    if value < -margin {
        value = extent + margin;
    }
    if value > extent + margin {
        value = -margin;
    }
    value
}
