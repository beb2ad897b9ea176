// crates/folio-core/src/typewriter.rs
// Type, pause, delete, advance: the hero's rotating phrase

use crate::config::TypewriterConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterConfig,
    word: usize,
    /// Visible length in chars
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type
    pub fn new<S: Into<String>>(
        phrases: impl IntoIterator<Item = S>,
        timing: TypewriterConfig,
    ) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            timing,
            word: 0,
            shown: 0,
            deleting: false,
        })
    }

    fn phrase(&self) -> &str {
        &self.phrases[self.word]
    }

    fn full_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Visible prefix of the current phrase
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// How long to wait before the next [`tick`](Self::tick)
    pub fn delay(&self) -> Duration {
        if self.deleting {
            if self.shown == 0 {
                Duration::ZERO
            } else {
                self.timing.deleting()
            }
        } else if self.shown >= self.full_len() {
            self.timing.pause()
        } else {
            self.timing.typing()
        }
    }

    /// Apply one transition and return the delay before the next one
    pub fn tick(&mut self) -> Duration {
        if self.deleting {
            if self.shown == 0 {
                self.deleting = false;
                self.word = (self.word + 1) % self.phrases.len();
            } else {
                self.shown -= 1;
            }
        } else if self.shown >= self.full_len() {
            self.deleting = true;
        } else {
            self.shown += 1;
        }
        self.delay()
    }
}
