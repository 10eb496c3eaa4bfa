use std::f64::consts::TAU;

use glam::Vec2;
use heartfx_core::surface::{CircleStyle, Surface};
use heartfx_core::Color;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` over a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    // A thousand particles share one or two colors; skip re-formatting them
    fill_css: CssCache,
    glow_css: CssCache,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            fill_css: CssCache::default(),
            glow_css: CssCache::default(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(size.x), f64::from(size.y));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(f64::from(style.alpha));
        ctx.set_shadow_color(self.glow_css.get(style.glow));
        ctx.set_shadow_blur(f64::from(style.glow_blur));
        ctx.begin_path();
        if ctx
            .arc(f64::from(center.x), f64::from(center.y), f64::from(radius), 0.0, TAU)
            .is_ok()
        {
            ctx.set_fill_style_str(self.fill_css.get(style.fill));
            ctx.fill();
        }
        ctx.restore();
    }
}

#[derive(Default)]
struct CssCache {
    color: Option<Color>,
    css: String,
}

impl CssCache {
    fn get(&mut self, color: Color) -> &str {
        if self.color != Some(color) {
            self.color = Some(color);
            self.css = color.to_css();
        }
        &self.css
    }
}
