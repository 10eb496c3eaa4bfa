use glam::Vec2;

use crate::color::Color;

/// Paint parameters for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleStyle {
    pub fill: Color,
    pub alpha: f32,
    pub glow: Color,
    pub glow_blur: f32,
}

/// 2D drawing target the field renders into (a canvas on the web).
pub trait Surface {
    /// Drawable size in pixels.
    fn size(&self) -> Vec2;

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle);
}
