use crate::color::Color;
use crate::error::ConfigError;

/// Particle field tuning. Distances are in canvas pixels, rates are per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub explosion_speed: f32,
    pub gravity: f32,
    pub friction: f32,
    pub form_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub glow_color: Color,
    pub glow_blur: f32,
    /// Frames spent in the explosion phase at most.
    pub explosion_duration: u32,
    pub fade_rate: f32,
    pub jiggle_amplitude: f32,
    /// Radians per millisecond of host clock.
    pub jiggle_frequency: f32,
    /// Below this distance a settling particle snaps to its target and idles.
    pub arrive_distance: f32,
    /// "Formed" tolerance as a multiple of `jiggle_amplitude`.
    pub formed_tolerance_factor: f32,
    /// Heart size as a fraction of the shorter viewport side.
    pub heart_scale_factor: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            explosion_speed: 8.0,
            gravity: 0.2,
            friction: 0.96,
            form_speed: 0.015,
            min_radius: 1.2,
            max_radius: 3.0,
            glow_color: Color::ORCHID,
            glow_blur: 8.0,
            explosion_duration: 300,
            fade_rate: 0.002,
            jiggle_amplitude: 2.0,
            jiggle_frequency: 0.005,
            arrive_distance: 0.5,
            formed_tolerance_factor: 2.0,
            heart_scale_factor: 0.18,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(ConfigError::RadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.form_speed > 0.0 && self.form_speed <= 1.0) {
            return Err(ConfigError::FormSpeed(self.form_speed));
        }
        if self.fade_rate.is_nan() || self.fade_rate < 0.0 {
            return Err(ConfigError::FadeRate(self.fade_rate));
        }
        if self.jiggle_amplitude.is_nan() || self.jiggle_amplitude < 0.0 {
            return Err(ConfigError::JiggleAmplitude(self.jiggle_amplitude));
        }
        Ok(())
    }

    /// Per-axis distance under which a settling particle counts as formed.
    pub fn formed_tolerance(&self) -> f32 {
        self.jiggle_amplitude * self.formed_tolerance_factor
    }
}

/// Message reveal and color-change timing.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceConfig {
    pub message: String,
    pub initial_delay_ms: f64,
    pub reveal_delay_ms: f64,
    pub highlight_delay_ms: f64,
    /// Normalized words (lowercase, no punctuation) to highlight once revealed.
    pub target_phrase: Vec<String>,
    pub color_delay_ms: f64,
    pub new_color: Color,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            message: "Esse é meu jeito de dizer: \nEu te amo!".to_string(),
            initial_delay_ms: 1000.0,
            reveal_delay_ms: 400.0,
            highlight_delay_ms: 2000.0,
            target_phrase: vec!["eu".into(), "te".into(), "amo".into()],
            color_delay_ms: 42_000.0,
            new_color: Color::BLOOD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub field: FieldConfig,
    pub sequence: SequenceConfig,
    pub music_volume: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            sequence: SequenceConfig::default(),
            music_volume: 0.3,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field.validate()?;
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::Volume(self.music_volume));
        }
        Ok(())
    }
}
