use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("radius range [{min}, {max}] is empty or not positive")]
    RadiusRange { min: f32, max: f32 },
    #[error("friction {0} must be in (0, 1]")]
    Friction(f32),
    #[error("form speed {0} must be in (0, 1]")]
    FormSpeed(f32),
    #[error("fade rate {0} must not be negative")]
    FadeRate(f32),
    #[error("jiggle amplitude {0} must not be negative")]
    JiggleAmplitude(f32),
    #[error("music volume {0} must be in [0, 1]")]
    Volume(f32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected a #rrggbb or #rgb color, got {0:?}")]
    Format(String),
}

/// Failures reported by the page-side collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("audio playback failed: {0}")]
    Audio(String),
}
