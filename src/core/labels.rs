//! Floating destination labels orbiting the particle cloud.
//!
//! The model is clock-driven: callers pass the current time in milliseconds
//! and the model never schedules anything itself. [`crate::frame::LabelDriver`]
//! wires it to a refresh interval and a per-frame loop.

use super::anim::{clamp, orbit_position, polar, smooth_step, stagger_delay};
use super::constants::*;
use fnv::FnvHashSet;
use glam::DVec2;
use rand::prelude::*;
use rand::seq::index;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct LabelConfig {
    pub batch: usize,
    pub radius: f64,
    pub stagger_ms: u64,
    pub refresh_ms: u32,
    pub fade_ms: f64,
    pub vocabulary: &'static [&'static str],
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            batch: LABEL_BATCH,
            radius: LABEL_RADIUS,
            stagger_ms: LABEL_STAGGER_MS,
            refresh_ms: LABEL_REFRESH_MS,
            fade_ms: LABEL_FADE_MS,
            vocabulary: LOCATIONS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FloatingLabel {
    pub text: &'static str,
    /// Polar angle in radians, relative to the overlay center.
    pub angle: f64,
    pub radius: f64,
    /// Resting opacity once fully revealed.
    pub opacity: f64,
    pub scale: f64,
    /// Radians per millisecond.
    pub rotation_speed: f64,
    pub phase_offset: f64,
    /// Current pulse multiplier on `scale`.
    pub pulse: f64,
    /// Fade-in progress in \[0, 1\].
    pub fade: f64,
    reveal_at_ms: f64,
}

impl FloatingLabel {
    /// Offset from the overlay center.
    pub fn position(&self) -> DVec2 {
        polar(self.radius, self.angle)
    }

    pub fn visible_opacity(&self) -> f64 {
        self.opacity * self.fade
    }

    pub fn visible_scale(&self) -> f64 {
        self.scale * self.pulse
    }

    pub fn reveal_at_ms(&self) -> f64 {
        self.reveal_at_ms
    }
}

pub struct LabelOverlay {
    config: LabelConfig,
    labels: Vec<FloatingLabel>,
    active: bool,
    rng: StdRng,
    last_frame_ms: Option<f64>,
}

impl LabelOverlay {
    pub fn new(config: LabelConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            labels: Vec::new(),
            active: false,
            rng,
            last_frame_ms: None,
        }
    }

    pub fn labels(&self) -> &[FloatingLabel] {
        &self.labels
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn set_radius(&mut self, radius: f64) {
        if !radius.is_finite() || radius < 0.0 {
            return;
        }
        self.config.radius = radius;
        for label in &mut self.labels {
            label.radius = radius;
        }
    }

    /// Create a fresh batch with staggered reveals starting at `now_ms`.
    /// Activating an already active overlay keeps the current batch.
    pub fn activate(&mut self, now_ms: f64) {
        if self.active {
            return;
        }
        self.active = true;
        self.last_frame_ms = None;

        let vocab = self.config.vocabulary;
        let batch = self.config.batch;
        let picks: Vec<&'static str> = if vocab.is_empty() {
            Vec::new()
        } else if batch <= vocab.len() {
            index::sample(&mut self.rng, vocab.len(), batch)
                .into_iter()
                .map(|i| vocab[i])
                .collect()
        } else {
            // Not enough distinct names; repeat from a shuffled order.
            let mut shuffled = vocab.to_vec();
            shuffled.shuffle(&mut self.rng);
            shuffled.iter().copied().cycle().take(batch).collect()
        };

        let total = picks.len();
        self.labels = picks
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let jitter = self.rng.gen_range(-LABEL_ANGLE_JITTER..=LABEL_ANGLE_JITTER);
                let slot = orbit_position(i, total, self.config.radius, jitter);
                FloatingLabel {
                    text,
                    angle: slot.angle.to_radians(),
                    radius: self.config.radius,
                    opacity: self.rng.gen_range(0.6..=1.0),
                    scale: self.rng.gen_range(0.85..=1.15),
                    rotation_speed: self.rng.gen_range(-LABEL_ROTATION_MAX..=LABEL_ROTATION_MAX),
                    phase_offset: self.rng.gen_range(0.0..std::f64::consts::TAU),
                    pulse: 1.0,
                    fade: 0.0,
                    reveal_at_ms: now_ms + stagger_delay(i, self.config.stagger_ms) as f64,
                }
            })
            .collect();
        log::debug!("[labels] activated with {} labels", self.labels.len());
    }

    /// Drop every label at once; no fade-out.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.labels.clear();
        self.last_frame_ms = None;
    }

    /// Swap 2–3 random slots for names not currently shown, fading them in from zero.
    /// Returns the replaced slot indices.
    pub fn refresh(&mut self, now_ms: f64) -> SmallVec<[usize; 4]> {
        let mut replaced = SmallVec::new();
        if !self.active || self.labels.is_empty() || self.config.vocabulary.is_empty() {
            return replaced;
        }
        let upper = LABEL_REPLACE_MAX.min(self.labels.len());
        let lower = LABEL_REPLACE_MIN.min(upper);
        let count = self.rng.gen_range(lower..=upper);
        let slots = index::sample(&mut self.rng, self.labels.len(), count);

        let mut shown: FnvHashSet<&'static str> = self.labels.iter().map(|l| l.text).collect();
        for slot in slots.iter() {
            let fresh: SmallVec<[&'static str; 32]> = self
                .config
                .vocabulary
                .iter()
                .copied()
                .filter(|name| !shown.contains(name))
                .collect();
            let text = match fresh.choose(&mut self.rng) {
                Some(name) => *name,
                None => match self.config.vocabulary.choose(&mut self.rng) {
                    Some(name) => *name,
                    None => continue,
                },
            };
            shown.remove(self.labels[slot].text);
            shown.insert(text);
            let label = &mut self.labels[slot];
            label.text = text;
            label.fade = 0.0;
            label.reveal_at_ms = now_ms;
            replaced.push(slot);
        }
        log::debug!("[labels] refreshed slots {:?}", replaced.as_slice());
        replaced
    }

    /// Per-frame drift, pulse and fade-in at `now_ms`.
    pub fn animate(&mut self, now_ms: f64) {
        if !self.active {
            return;
        }
        let dt = match self.last_frame_ms {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        let fade_ms = self.config.fade_ms.max(1.0);
        for label in &mut self.labels {
            label.angle += label.rotation_speed * dt;
            label.pulse = 1.0 + (now_ms * LABEL_PULSE_RATE + label.phase_offset).sin() * LABEL_PULSE_DEPTH;
            let progress = clamp((now_ms - label.reveal_at_ms) / fade_ms, 0.0, 1.0);
            label.fade = smooth_step(progress);
        }
    }
}
