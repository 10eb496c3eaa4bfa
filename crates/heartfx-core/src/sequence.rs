//! Word-by-word message reveal, phrase highlight and the delayed color change.
//!
//! The reveal chain is an explicit cursor over the words: each fired tick
//! reveals one word and queues the next tick on the scheduler. Cancelling the
//! pending handle stops the chain.

use crate::color::Color;
use crate::config::SequenceConfig;
use crate::scheduler::{Scheduler, TaskHandle};

/// Characters dropped before comparing a revealed word with the target phrase.
const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SequenceState {
    Idle,
    Revealing { next: usize, total: usize },
    HighlightPending,
    Done,
}

/// Render handle for one revealed word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedWord {
    pub text: String,
    pub highlighted: bool,
    /// A separating space follows every word except the last one.
    pub trailing_space: bool,
}

/// Window of revealed words matching the target phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: usize,
    pub len: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SequenceEvent {
    WordRevealed { index: usize },
    PhraseHighlighted(PhraseMatch),
    PhraseNotFound,
    ColorChanged(Color),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SequenceTask {
    RevealNext,
    Highlight,
    ChangeColor,
}

pub struct SequenceOrchestrator {
    config: SequenceConfig,
    timers: Scheduler<SequenceTask>,
    state: SequenceState,
    words: Vec<String>,
    revealed: Vec<RevealedWord>,
    highlight: Option<PhraseMatch>,
    reveal_task: Option<TaskHandle>,
    highlight_task: Option<TaskHandle>,
    color_task: Option<TaskHandle>,
}

impl SequenceOrchestrator {
    pub fn new(config: SequenceConfig) -> Self {
        Self {
            config,
            timers: Scheduler::new(),
            state: SequenceState::Idle,
            words: Vec::new(),
            revealed: Vec::new(),
            highlight: None,
            reveal_task: None,
            highlight_task: None,
            color_task: None,
        }
    }

    /// Queue the one-shot color change `color_delay_ms` from now. Replaces a
    /// change that is still pending.
    pub fn arm_color_change(&mut self, now_ms: f64) {
        if let Some(handle) = self.color_task.take() {
            self.timers.cancel(handle);
        }
        let handle = self
            .timers
            .schedule(now_ms, self.config.color_delay_ms, SequenceTask::ChangeColor);
        self.color_task = Some(handle);
    }

    /// Begin revealing `message`. Any earlier reveal is discarded; a pending
    /// color change is left alone.
    pub fn start(&mut self, message: &str, now_ms: f64) {
        self.clear_message();

        self.words = split_words(message);
        self.state = SequenceState::Revealing {
            next: 0,
            total: self.words.len(),
        };
        log::debug!("revealing {} words", self.words.len());

        let handle = self
            .timers
            .schedule(now_ms, self.config.initial_delay_ms, SequenceTask::RevealNext);
        self.reveal_task = Some(handle);
    }

    /// Fire everything due at `now_ms`, including ticks queued by earlier ticks
    /// in the same call.
    pub fn advance(&mut self, now_ms: f64) -> Vec<SequenceEvent> {
        let mut events = Vec::new();

        while let Some((due_ms, task)) = self.timers.pop_due(now_ms) {
            match task {
                SequenceTask::RevealNext => {
                    self.reveal_task = None;
                    self.reveal_next(due_ms, &mut events);
                }
                SequenceTask::Highlight => {
                    self.highlight_task = None;
                    match self.highlight_phrase() {
                        Some(found) => events.push(SequenceEvent::PhraseHighlighted(found)),
                        None => events.push(SequenceEvent::PhraseNotFound),
                    }
                    self.state = SequenceState::Done;
                }
                SequenceTask::ChangeColor => {
                    self.color_task = None;
                    log::info!("heart color change to {}", self.config.new_color);
                    events.push(SequenceEvent::ColorChanged(self.config.new_color));
                }
            }
        }

        events
    }

    fn reveal_next(&mut self, due_ms: f64, events: &mut Vec<SequenceEvent>) {
        let SequenceState::Revealing { mut next, total } = self.state else {
            return;
        };

        if next < total {
            self.revealed.push(RevealedWord {
                text: self.words[next].clone(),
                highlighted: false,
                trailing_space: next + 1 < total,
            });
            events.push(SequenceEvent::WordRevealed { index: next });
            next += 1;
        }

        // Follow-up ticks are timed from this tick's due time, not the frame
        // that fired it, so frame jitter does not stretch the reveal.
        if next < total {
            self.state = SequenceState::Revealing { next, total };
            let handle =
                self.timers
                    .schedule(due_ms, self.config.reveal_delay_ms, SequenceTask::RevealNext);
            self.reveal_task = Some(handle);
        } else {
            self.state = SequenceState::HighlightPending;
            let handle = self.timers.schedule(
                due_ms,
                self.config.highlight_delay_ms,
                SequenceTask::Highlight,
            );
            self.highlight_task = Some(handle);
        }
    }

    /// Mark the first revealed window matching the target phrase. Calling it
    /// again with the same words changes nothing.
    pub fn highlight_phrase(&mut self) -> Option<PhraseMatch> {
        let texts: Vec<&str> = self.revealed.iter().map(|w| w.text.as_str()).collect();
        let Some(start) = find_phrase(&texts, &self.config.target_phrase) else {
            log::warn!(
                "phrase {:?} not found in revealed words {:?}",
                self.config.target_phrase,
                texts
            );
            return None;
        };

        let found = PhraseMatch {
            start,
            len: self.config.target_phrase.len(),
        };
        for word in &mut self.revealed[start..start + found.len] {
            word.highlighted = true;
        }
        log::debug!("highlighted words {}..{}", start, start + found.len);
        self.highlight = Some(found);
        Some(found)
    }

    /// Cancel every pending task and forget the message. Safe to call at any time.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.color_task = None;
        self.clear_message();
    }

    fn clear_message(&mut self) {
        for handle in [self.reveal_task.take(), self.highlight_task.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(handle);
        }
        self.words.clear();
        self.revealed.clear();
        self.highlight = None;
        self.state = SequenceState::Idle;
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SequenceState::Done
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn revealed(&self) -> &[RevealedWord] {
        &self.revealed
    }

    pub fn highlight(&self) -> Option<PhraseMatch> {
        self.highlight
    }

    pub fn color_change_pending(&self) -> bool {
        self.color_task.is_some()
    }

    /// Number of timers still queued (reveal, highlight, color).
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Revealed text as displayed, words joined by their separating spaces.
    pub fn revealed_text(&self) -> String {
        let mut text = String::new();
        for word in &self.revealed {
            text.push_str(&word.text);
            if word.trailing_space {
                text.push(' ');
            }
        }
        text
    }
}

// ---------- helper functions ----------

/// Split on any run of whitespace; never yields empty tokens.
pub fn split_words(message: &str) -> Vec<String> {
    message.split_whitespace().map(str::to_string).collect()
}

/// Strip punctuation and lowercase, e.g. `"Amo!"` -> `"amo"`.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Index of the first contiguous window of `words` whose normalized forms equal
/// `phrase` in order. An empty phrase never matches.
pub fn find_phrase<W: AsRef<str>, P: AsRef<str>>(words: &[W], phrase: &[P]) -> Option<usize> {
    if phrase.is_empty() || phrase.len() > words.len() {
        return None;
    }
    (0..=words.len() - phrase.len()).find(|&start| {
        phrase
            .iter()
            .zip(&words[start..])
            .all(|(want, got)| normalize_word(got.as_ref()) == want.as_ref())
    })
}
