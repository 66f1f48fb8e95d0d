//! Type/delete cursor for the hero banner's rotating phrases.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::time::Duration;

use crate::config::TypingTiming;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingPhase {
    #[default]
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

/// What to display after a tick, and how long until the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

/// Cursor over a fixed phrase list.
///
/// `char_index` counts characters, not bytes, and never exceeds the current
/// phrase's length; an empty phrase (or an empty list) simply pauses.
#[derive(Clone, Debug)]
pub struct PhraseCycle {
    phrases: Vec<String>,
    timing: TypingTiming,
    phrase_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl PhraseCycle {
    pub fn new(phrases: Vec<String>, timing: TypingTiming) -> Self {
        Self { phrases, timing, phrase_index: 0, char_index: 0, phase: TypingPhase::Typing }
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.phrase_index).map_or("", String::as_str)
    }

    /// Prefix of the current phrase currently on screen.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_index)
            .map_or(phrase.len(), |(byte, _)| byte);
        &phrase[..end]
    }

    /// Advance one step of the animation.
    pub fn tick(&mut self) -> TypingFrame {
        match self.phase {
            TypingPhase::PausingFull => self.phase = TypingPhase::Deleting,
            TypingPhase::PausingEmpty => {
                self.advance_phrase();
                self.phase = TypingPhase::Typing;
            }
            TypingPhase::Typing | TypingPhase::Deleting => {}
        }

        let len = self.current_phrase().chars().count();
        let delay = if self.phase == TypingPhase::Typing {
            if self.char_index < len {
                self.char_index += 1;
            }
            if self.char_index >= len {
                self.phase = TypingPhase::PausingFull;
                self.timing.hold_full()
            } else {
                self.timing.type_delay()
            }
        } else {
            self.char_index = self.char_index.saturating_sub(1);
            if self.char_index == 0 {
                self.phase = TypingPhase::PausingEmpty;
                self.timing.hold_empty()
            } else {
                self.timing.delete_delay()
            }
        };

        TypingFrame { text: self.visible_text().to_owned(), delay }
    }

    fn advance_phrase(&mut self) {
        self.char_index = 0;
        if self.phrases.is_empty() {
            self.phrase_index = 0;
        } else {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        }
    }
}
