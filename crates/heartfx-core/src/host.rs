use crate::error::HostError;
use crate::sequence::RevealedWord;

/// Page-side collaborators driven by a [`Session`](crate::session::Session):
/// intro controls, background music and the message area.
pub trait Host {
    /// Show or hide the start control together with the intro image.
    fn set_intro_visible(&mut self, visible: bool);

    fn play_music(&mut self, volume: f32) -> Result<(), HostError>;

    /// Pause and rewind to the beginning.
    fn stop_music(&mut self);

    fn set_message_visible(&mut self, visible: bool);

    fn clear_message(&mut self);

    /// Append one revealed word, followed by a space if `word.trailing_space`.
    fn append_word(&mut self, word: &RevealedWord);

    /// Apply the highlight look to the word at `index` in reveal order.
    fn highlight_word(&mut self, index: usize);
}
