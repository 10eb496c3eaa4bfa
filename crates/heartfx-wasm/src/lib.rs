use heartfx_core::{Color, Session, SessionConfig};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, HtmlCanvasElement, HtmlElement};

mod canvas;
mod dom;
mod logger;

use canvas::CanvasSurface;
use dom::DomHost;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
}

/// The heart page. JS owns the `requestAnimationFrame` loop and DOM events and
/// forwards them here.
#[wasm_bindgen]
pub struct HeartScene {
    session: Session,
    host: DomHost,
    surface: CanvasSurface,
    frame_cost_ms: f64,
}

#[wasm_bindgen]
impl HeartScene {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        start_button: HtmlElement,
        intro_image: HtmlElement,
        message_container: HtmlElement,
        message: HtmlElement,
        music: Option<HtmlAudioElement>,
    ) -> Result<HeartScene, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let session = Session::new(SessionConfig::default(), StdRng::from_entropy())
            .map_err(to_js)?;
        let host = DomHost::new(start_button, intro_image, message_container, message, music);
        log::info!(
            "HeartScene created: {} particles",
            session.config().field.particle_count
        );

        Ok(HeartScene {
            session,
            host,
            surface,
            frame_cost_ms: 0.0,
        })
    }

    /// Start button. Restarts the run if one is active.
    #[wasm_bindgen]
    pub fn start(&mut self, now: f64) -> Result<(), JsValue> {
        self.session.start(now, &mut self.host).map_err(to_js)
    }

    /// One animation frame at `now` (the rAF timestamp). Returns false once
    /// the loop should stop.
    #[wasm_bindgen]
    pub fn frame(&mut self, now: f64) -> bool {
        let start = js_sys::Date::now();
        let keep_going = self.session.frame(now, &mut self.host, &mut self.surface);
        self.frame_cost_ms = js_sys::Date::now() - start;
        keep_going
    }

    /// Window resize. Only the canvas changes; particles keep their targets.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.session.resize(width as f32, height as f32);
    }

    /// Canvas click. Returns true if the page went back to its intro state.
    #[wasm_bindgen]
    pub fn click(&mut self) -> bool {
        self.session.click(&mut self.host, &mut self.surface)
    }

    #[wasm_bindgen]
    pub fn set_active_color(&mut self, css: &str) -> Result<(), JsValue> {
        let color: Color = css.parse().map_err(to_js)?;
        if let Some(field) = self.session.field_mut() {
            field.set_active_color(color);
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn active_color(&self) -> String {
        self.session.active_color().to_css()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.session.field().map_or(0, |f| f.particle_count())
    }

    #[wasm_bindgen]
    pub fn is_formed(&self) -> bool {
        self.session.field().is_some_and(|f| f.is_formed())
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.session.is_animating()
    }

    /// Wall time spent in the last `frame` call, in milliseconds.
    #[wasm_bindgen]
    pub fn frame_cost_ms(&self) -> f64 {
        self.frame_cost_ms
    }
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
