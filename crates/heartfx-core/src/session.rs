use glam::Vec2;
use rand::rngs::StdRng;

use crate::color::Color;
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::host::Host;
use crate::sequence::{SequenceEvent, SequenceOrchestrator};
use crate::surface::Surface;

/// All state of one heart animation: particles, timers, message and flags.
///
/// A run goes: `start` -> `frame` per display refresh -> heart formed ->
/// message reveal -> idle jiggle. `click` on an idle run returns to the
/// pre-start state; `start` during a run restarts it from scratch.
pub struct Session {
    config: SessionConfig,
    field: Option<ParticleField>,
    sequence: SequenceOrchestrator,
    viewport: Vec2,
    animating: bool,
    message_visible: bool,
    rng: StdRng,
}

impl Session {
    pub fn new(config: SessionConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sequence: SequenceOrchestrator::new(config.sequence.clone()),
            config,
            field: None,
            viewport: Vec2::ZERO,
            animating: false,
            message_visible: false,
            rng,
        })
    }

    /// Record the drawing size. Existing particles keep their targets; the
    /// new size applies from the next `start`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn start<H: Host + ?Sized>(&mut self, now_ms: f64, host: &mut H) -> Result<(), ConfigError> {
        if self.animating {
            log::info!("restarting active run");
            self.stop_run(host);
        }

        let field = ParticleField::initialize(
            self.viewport.x,
            self.viewport.y,
            self.config.field.clone(),
            &mut self.rng,
        )?;
        log::info!(
            "run started: {} particles on {}x{}",
            field.particle_count(),
            self.viewport.x,
            self.viewport.y
        );
        self.field = Some(field);

        host.set_intro_visible(false);
        if let Err(err) = host.play_music(self.config.music_volume) {
            log::error!("{err}");
        }
        self.sequence.arm_color_change(now_ms);
        self.animating = true;
        Ok(())
    }

    /// One display refresh. Returns whether the host should request another frame.
    pub fn frame<H, S>(&mut self, now_ms: f64, host: &mut H, surface: &mut S) -> bool
    where
        H: Host + ?Sized,
        S: Surface + ?Sized,
    {
        if !self.animating {
            return false;
        }

        for event in self.sequence.advance(now_ms) {
            self.apply(event, host);
        }

        surface.clear();
        if let Some(field) = self.field.as_mut() {
            let formed = field.step_frame(now_ms);
            field.render(surface);

            if formed && !self.message_visible {
                log::info!("heart formed");
                self.message_visible = true;
                host.clear_message();
                host.set_message_visible(true);
                self.sequence.start(&self.config.sequence.message, now_ms);
            }
        }
        true
    }

    fn apply<H: Host + ?Sized>(&mut self, event: SequenceEvent, host: &mut H) {
        match event {
            SequenceEvent::WordRevealed { index } => {
                if let Some(word) = self.sequence.revealed().get(index) {
                    log::debug!("word {index}: {:?}", word.text);
                    host.append_word(word);
                }
            }
            SequenceEvent::PhraseHighlighted(found) => {
                for index in found.start..found.start + found.len {
                    host.highlight_word(index);
                }
            }
            SequenceEvent::PhraseNotFound => {}
            SequenceEvent::ColorChanged(color) => {
                if let Some(field) = self.field.as_mut() {
                    field.set_active_color(color);
                }
            }
        }
    }

    /// Canvas click. Only an idle run with its message showing is reset;
    /// returns whether the reset happened.
    pub fn click<H, S>(&mut self, host: &mut H, surface: &mut S) -> bool
    where
        H: Host + ?Sized,
        S: Surface + ?Sized,
    {
        if !(self.is_idle() && self.message_visible) {
            return false;
        }
        self.reset(host);
        surface.clear();
        true
    }

    /// Back to the pre-start state. Idempotent.
    pub fn reset<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.stop_run(host);
        host.set_intro_visible(true);
        host.stop_music();
    }

    /// Cancel timers and drop the field before anything new is created.
    fn stop_run<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.sequence.reset();
        self.field = None;
        self.animating = false;
        self.message_visible = false;
        host.set_message_visible(false);
        host.clear_message();
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn field_mut(&mut self) -> Option<&mut ParticleField> {
        self.field.as_mut()
    }

    pub fn sequence(&self) -> &SequenceOrchestrator {
        &self.sequence
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_message_visible(&self) -> bool {
        self.message_visible
    }

    /// Heart formed and the message sequence has run to the end.
    pub fn is_idle(&self) -> bool {
        self.field.as_ref().is_some_and(ParticleField::is_formed) && self.sequence.is_done()
    }

    /// Color the heart is drawn with; the configured color when no run exists.
    pub fn active_color(&self) -> Color {
        self.field
            .as_ref()
            .map_or(self.config.field.glow_color, ParticleField::active_color)
    }
}
