use heartfx_core::config::{FieldConfig, SequenceConfig, SessionConfig};
use heartfx_core::{Color, ColorError, ConfigError};

#[test]
fn test_field_config_default_values() {
    let config = FieldConfig::default();

    assert_eq!(config.particle_count, 1000);
    assert_eq!(config.explosion_speed, 8.0);
    assert_eq!(config.gravity, 0.2);
    assert_eq!(config.friction, 0.96);
    assert_eq!(config.form_speed, 0.015);
    assert_eq!(config.min_radius, 1.2);
    assert_eq!(config.max_radius, 3.0);
    assert_eq!(config.glow_color, Color::rgb(0xe0, 0x80, 0xe0));
    assert_eq!(config.glow_blur, 8.0);
    assert_eq!(config.explosion_duration, 300);
    assert_eq!(config.fade_rate, 0.002);
    assert_eq!(config.jiggle_amplitude, 2.0);
    assert_eq!(config.jiggle_frequency, 0.005);
    assert_eq!(config.arrive_distance, 0.5);
    assert_eq!(config.formed_tolerance(), 4.0);
    assert_eq!(config.heart_scale_factor, 0.18);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_sequence_config_default_values() {
    let config = SequenceConfig::default();

    assert_eq!(config.initial_delay_ms, 1000.0);
    assert_eq!(config.reveal_delay_ms, 400.0);
    assert_eq!(config.highlight_delay_ms, 2000.0);
    assert_eq!(config.color_delay_ms, 42_000.0);
    assert_eq!(config.target_phrase, ["eu", "te", "amo"]);
    assert_eq!(config.new_color, Color::rgb(0x66, 0x00, 0x00));
}

#[test]
fn test_field_config_validation() {
    let base = FieldConfig::default();

    let cases = [
        (FieldConfig { particle_count: 0, ..base.clone() }, ConfigError::NoParticles),
        (
            FieldConfig { min_radius: 0.0, ..base.clone() },
            ConfigError::RadiusRange { min: 0.0, max: 3.0 },
        ),
        (FieldConfig { friction: 0.0, ..base.clone() }, ConfigError::Friction(0.0)),
        (FieldConfig { form_speed: 2.0, ..base.clone() }, ConfigError::FormSpeed(2.0)),
        (FieldConfig { fade_rate: -0.1, ..base.clone() }, ConfigError::FadeRate(-0.1)),
        (
            FieldConfig { jiggle_amplitude: -1.0, ..base.clone() },
            ConfigError::JiggleAmplitude(-1.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }

    let no_jiggle = FieldConfig { jiggle_amplitude: 0.0, ..base };
    assert_eq!(no_jiggle.validate(), Ok(()));
}

#[test]
fn test_session_config_validation() {
    assert_eq!(SessionConfig::default().music_volume, 0.3);
    assert_eq!(SessionConfig::default().validate(), Ok(()));

    let loud = SessionConfig { music_volume: 1.5, ..SessionConfig::default() };
    assert_eq!(loud.validate(), Err(ConfigError::Volume(1.5)));
}

#[test]
fn test_config_error_messages() {
    assert_eq!(ConfigError::NoParticles.to_string(), "particle count must be at least 1");
    assert_eq!(
        ConfigError::RadiusRange { min: 4.0, max: 1.0 }.to_string(),
        "radius range [4, 1] is empty or not positive"
    );
}

#[test]
fn test_color_css_round_trip() {
    assert_eq!(Color::ORCHID.to_css(), "#e080e0");
    assert_eq!(Color::BLOOD.to_string(), "#660000");
    assert_eq!("#E080E0".parse::<Color>(), Ok(Color::ORCHID));
    assert_eq!(" #660000 ".parse::<Color>(), Ok(Color::BLOOD));
    assert_eq!("#f0a".parse::<Color>(), Ok(Color::rgb(0xff, 0x00, 0xaa)));
}

#[test]
fn test_color_rejects_malformed() {
    for bad in ["", "e080e0", "#e080e", "#gg0000", "#+10000", "#e080e0ff"] {
        assert_eq!(
            bad.parse::<Color>(),
            Err(ColorError::Format(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
}
