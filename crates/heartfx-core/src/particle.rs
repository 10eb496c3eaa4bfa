use glam::Vec2;

use crate::color::Color;

/// Motion phase. Particles only ever move from `Exploding` to `Settling`.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Exploding = 0, // Ballistic: velocity, gravity, friction, fading
    Settling  = 1, // Homing toward the heart target, then idle jiggle
}

/// SoA particle storage
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    /// Heart point assigned at creation, never changed afterwards
    pub target: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    pub radius: Vec<f32>,
    /// Opacity in [0, 1]
    pub alpha: Vec<f32>,
    /// Explosion frames left
    pub life: Vec<i32>,
    pub phase: Vec<Phase>,
    /// Per-particle easing variation, sampled once
    pub ease: Vec<f32>,
    /// Idle jiggle phase offset in radians
    pub jiggle_offset: Vec<f32>,
    /// Last active color this particle picked up
    pub color: Vec<Color>,
}

impl ParticleSet {
    pub fn new(count: usize, color: Color) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            target: vec![Vec2::ZERO; count],
            velocity: vec![Vec2::ZERO; count],
            radius: vec![1.0; count],
            alpha: vec![1.0; count],
            life: vec![0; count],
            phase: vec![Phase::Exploding; count],
            ease: vec![0.05; count],
            jiggle_offset: vec![0.0; count],
            color: vec![color; count],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
