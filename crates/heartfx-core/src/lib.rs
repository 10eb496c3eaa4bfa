//! Exploding-particle heart with a timed message reveal.
//!
//! Everything here is plain Rust with no web dependencies; the browser crate
//! provides the [`surface::Surface`] and [`host::Host`] implementations and the
//! frame clock.

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod host;
pub mod particle;
pub mod scheduler;
pub mod sequence;
pub mod session;
pub mod shapes;
pub mod surface;

pub use color::Color;
pub use config::{FieldConfig, SequenceConfig, SessionConfig};
pub use error::{ColorError, ConfigError, HostError};
pub use field::ParticleField;
pub use session::Session;
