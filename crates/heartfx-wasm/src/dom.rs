use heartfx_core::host::Host;
use heartfx_core::sequence::RevealedWord;
use heartfx_core::HostError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlAudioElement, HtmlElement};

const HIDDEN_IMAGE_CLASS: &str = "hidden-image";
const VISIBLE_CLASS: &str = "visible";
const HIGHLIGHT_CLASS: &str = "highlight-red";

/// `Host` over the page elements: start button, intro image, message area
/// and the background music.
pub struct DomHost {
    start_button: HtmlElement,
    intro_image: HtmlElement,
    message_container: HtmlElement,
    message: HtmlElement,
    music: Option<HtmlAudioElement>,
    words: Vec<Element>,
}

impl DomHost {
    pub fn new(
        start_button: HtmlElement,
        intro_image: HtmlElement,
        message_container: HtmlElement,
        message: HtmlElement,
        music: Option<HtmlAudioElement>,
    ) -> Self {
        Self {
            start_button,
            intro_image,
            message_container,
            message,
            music,
            words: Vec::new(),
        }
    }

    fn try_append_word(&mut self, word: &RevealedWord) -> Result<(), JsValue> {
        let document = self
            .message
            .owner_document()
            .ok_or_else(|| JsValue::from_str("message element is detached"))?;

        let span = document.create_element("span")?;
        span.set_text_content(Some(&word.text));
        self.message.append_child(&span)?;
        if word.trailing_space {
            self.message.append_child(&document.create_text_node(" "))?;
        }

        // Force a reflow so the fade-in transition runs
        if let Some(el) = span.dyn_ref::<HtmlElement>() {
            let _ = el.offset_width();
        }
        span.class_list().add_1(VISIBLE_CLASS)?;
        self.words.push(span);
        Ok(())
    }
}

impl Host for DomHost {
    fn set_intro_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        warn_on_err(
            self.start_button.style().set_property("display", display),
            "toggle start button",
        );
        warn_on_err(
            self.intro_image
                .class_list()
                .toggle_with_force(HIDDEN_IMAGE_CLASS, !visible)
                .map(drop),
            "toggle intro image",
        );
    }

    fn play_music(&mut self, volume: f32) -> Result<(), HostError> {
        let Some(music) = &self.music else {
            return Ok(());
        };
        music.set_volume(f64::from(volume));
        let promise = music.play().map_err(|err| HostError::Audio(describe(&err)))?;
        // Autoplay refusals arrive later as a rejected promise
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::error!("{}", HostError::Audio(describe(&err)));
            }
        });
        Ok(())
    }

    fn stop_music(&mut self) {
        if let Some(music) = &self.music {
            warn_on_err(music.pause(), "pause music");
            music.set_current_time(0.0);
        }
    }

    fn set_message_visible(&mut self, visible: bool) {
        warn_on_err(
            self.message_container
                .class_list()
                .toggle_with_force(VISIBLE_CLASS, visible)
                .map(drop),
            "toggle message",
        );
    }

    fn clear_message(&mut self) {
        self.message.set_inner_html("");
        self.words.clear();
    }

    fn append_word(&mut self, word: &RevealedWord) {
        let result = self.try_append_word(word);
        warn_on_err(result, "append word");
    }

    fn highlight_word(&mut self, index: usize) {
        if let Some(span) = self.words.get(index) {
            warn_on_err(span.class_list().add_1(HIGHLIGHT_CLASS), "highlight word");
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn warn_on_err(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {}", describe(&err));
    }
}
