use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::particle::{ParticleSet, Phase};
use crate::shapes::heart::generate_heart_points;
use crate::surface::{CircleStyle, Surface};

/// Explosion ends early once a particle has faded below this opacity.
const EXPLOSION_MIN_ALPHA: f32 = 0.1;

pub struct ParticleField {
    pub particles: ParticleSet,
    pub config: FieldConfig,
    active_color: Color,
    viewport: Vec2,
    formed: bool,
}

impl ParticleField {
    /// Scatter `config.particle_count` particles over the viewport and give each
    /// one a point on a freshly generated heart.
    pub fn initialize<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        config: FieldConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let count = config.particle_count;
        let targets =
            generate_heart_points(width, height, count, config.heart_scale_factor, rng);
        let mut particles = ParticleSet::new(count, config.glow_color);

        for i in 0..count {
            particles.position[i] =
                Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
            particles.target[i] = targets[i % targets.len()];
            particles.radius[i] =
                rng.gen::<f32>() * (config.max_radius - config.min_radius) + config.min_radius;
            particles.velocity[i] = Vec2::new(
                (rng.gen::<f32>() - 0.5) * config.explosion_speed,
                (rng.gen::<f32>() - 0.5) * config.explosion_speed,
            );
            particles.life[i] = config.explosion_duration as i32;
            particles.ease[i] = 0.05 + rng.gen::<f32>() * 0.05;
            particles.jiggle_offset[i] = rng.gen::<f32>() * TAU;
        }

        Ok(Self {
            particles,
            active_color: config.glow_color,
            config,
            viewport: Vec2::new(width, height),
            formed: false,
        })
    }

    /// Advance every particle by one frame.
    ///
    /// `time_ms` is the host's monotonic clock; it only drives the idle jiggle,
    /// so a stalled frame rate never makes idle particles drift. Returns true
    /// when every particle is settling and inside the formed tolerance.
    pub fn step_frame(&mut self, time_ms: f64) -> bool {
        let cfg = &self.config;
        let active = self.active_color;
        let tolerance = cfg.formed_tolerance();
        let p = &mut self.particles;
        let mut all_formed = true;

        for i in 0..p.count {
            match p.phase[i] {
                Phase::Exploding => {
                    p.position[i] += p.velocity[i];
                    p.velocity[i].y += cfg.gravity;
                    p.velocity[i] *= cfg.friction;
                    p.life[i] -= 1;
                    p.alpha[i] = (p.alpha[i] - cfg.fade_rate).max(0.0);

                    if p.life[i] <= 0 || p.alpha[i] <= EXPLOSION_MIN_ALPHA {
                        p.phase[i] = Phase::Settling;
                        // The explosion fade does not carry into the heart
                        p.alpha[i] = 1.0;
                    }
                }
                Phase::Settling => {
                    let delta = p.target[i] - p.position[i];
                    if delta.length() > cfg.arrive_distance {
                        p.position[i] += delta * cfg.form_speed;
                    } else {
                        p.position[i] = p.target[i]
                            + jiggle(
                                time_ms,
                                cfg.jiggle_frequency,
                                p.jiggle_offset[i],
                                cfg.jiggle_amplitude,
                            );
                    }
                    p.color[i] = active;
                }
            }

            if p.phase[i] == Phase::Exploding {
                all_formed = false;
            } else {
                let off = (p.position[i] - p.target[i]).abs();
                if off.x > tolerance || off.y > tolerance {
                    all_formed = false;
                }
            }
        }

        self.formed = all_formed;
        all_formed
    }

    /// Draw every particle as a glowing dot. Does not clear the surface.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let p = &self.particles;
        for i in 0..p.count {
            let style = CircleStyle {
                fill: p.color[i],
                alpha: p.alpha[i],
                glow: self.active_color,
                glow_blur: self.config.glow_blur,
            };
            surface.fill_circle(p.position[i], p.radius[i], &style);
        }
    }

    /// Switch the heart color. Settling particles pick it up on their next
    /// step; the glow uses it from the next render on.
    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Result of the most recent `step_frame`.
    pub fn is_formed(&self) -> bool {
        self.formed
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn particle_count(&self) -> usize {
        self.particles.count
    }
}

// ---------- helper functions ----------

/// Idle offset around the target. Evaluated in f64 since `time_ms` grows large.
#[inline]
fn jiggle(time_ms: f64, frequency: f32, offset: f32, amplitude: f32) -> Vec2 {
    let angle = time_ms * f64::from(frequency) + f64::from(offset);
    Vec2::new(angle.sin() as f32, angle.cos() as f32) * amplitude
}
