//! Word-by-word transcript reveal.

use super::anim::{split_into_words, stagger_delay, Hsla};
use super::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl RevealSpeed {
    /// Milliseconds between consecutive words.
    pub fn interval_ms(self) -> u32 {
        match self {
            RevealSpeed::Slow => WORD_INTERVAL_SLOW_MS,
            RevealSpeed::Medium => WORD_INTERVAL_MEDIUM_MS,
            RevealSpeed::Fast => WORD_INTERVAL_FAST_MS,
        }
    }

    /// Lenient parse; unknown names map to `Medium`.
    pub fn parse_or_medium(s: &str) -> RevealSpeed {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => RevealSpeed::Slow,
            "fast" => RevealSpeed::Fast,
            _ => RevealSpeed::Medium,
        }
    }
}

/// Text colour for a transcript shown all at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranscriptTone {
    #[default]
    Primary,
    Secondary,
    Muted,
}

impl TranscriptTone {
    pub fn color(self) -> Hsla {
        match self {
            TranscriptTone::Primary => TONE_PRIMARY,
            TranscriptTone::Secondary => TONE_SECONDARY,
            TranscriptTone::Muted => TONE_MUTED,
        }
    }

    /// Lenient parse; unknown names map to `Primary`.
    pub fn parse_or_primary(s: &str) -> TranscriptTone {
        match s.trim().to_ascii_lowercase().as_str() {
            "secondary" => TranscriptTone::Secondary,
            "muted" => TranscriptTone::Muted,
            _ => TranscriptTone::Primary,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TranscriptReveal {
    words: Vec<String>,
    speed: RevealSpeed,
    active: bool,
    visible: usize,
    elapsed_ms: f64,
}

impl TranscriptReveal {
    pub fn new(text: &str, speed: RevealSpeed) -> Self {
        Self {
            words: split_into_words(text).into_iter().map(str::to_owned).collect(),
            speed,
            active: false,
            visible: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Replace the text and restart the reveal from the first word.
    pub fn set_text(&mut self, text: &str) {
        self.words = split_into_words(text).into_iter().map(str::to_owned).collect();
        self.restart();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.restart();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn speed(&self) -> RevealSpeed {
        self.speed
    }

    fn restart(&mut self) {
        self.visible = 0;
        self.elapsed_ms = 0.0;
    }

    /// Advance the reveal clock; returns the number of newly visible words.
    pub fn advance(&mut self, elapsed_ms: f64) -> usize {
        if !self.active || self.is_complete() || !(elapsed_ms > 0.0) {
            return 0;
        }
        self.elapsed_ms += elapsed_ms;
        let interval = f64::from(self.speed.interval_ms());
        let target = ((self.elapsed_ms / interval).floor() as usize).min(self.words.len());
        let added = target.saturating_sub(self.visible);
        self.visible = self.visible.max(target);
        added
    }

    /// Reveal one more word, as one interval tick does.
    pub fn reveal_next(&mut self) -> bool {
        if !self.active || self.is_complete() {
            return false;
        }
        self.visible += 1;
        self.elapsed_ms = self.visible as f64 * f64::from(self.speed.interval_ms());
        true
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn visible_words(&self) -> usize {
        self.visible
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.visible
    }

    pub fn is_complete(&self) -> bool {
        self.visible >= self.words.len()
    }

    /// CSS transition delay for the word at `index`.
    pub fn word_delay_ms(index: usize) -> u64 {
        stagger_delay(index, WORD_TRANSITION_STAGGER_MS)
    }
}
