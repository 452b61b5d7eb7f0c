//! Particle field model: owns the particle set and advances it each tick.
//!
//! The field knows nothing about drawing. A tick consumes the current
//! [`ActivityParams`] and intensity, moves every particle toward its breathing
//! orbit target and refreshes the per-particle [`Sprite`] the renderer reads.

use super::activity::{sanitize_intensity, ActivityParams};
use super::anim::{clamp, polar, Hsla};
use super::constants::*;
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Field construction parameters.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub min_radius: f64,
    pub base_radius: f64,
    pub smoothing: f64,
    pub color_cycling: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            min_radius: MIN_RADIUS,
            base_radius: BASE_RADIUS,
            smoothing: SMOOTHING_FACTOR,
            color_cycling: true,
        }
    }
}

/// One orbiting dot. Everything except `position` is fixed at creation.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVec2,
    pub base_position: DVec2,
    /// Seeded but not integrated.
    pub velocity: DVec2,
    pub radius: f64,
    pub color_phase: f64,
    pub alpha: f64,
    pub phase: f64,
    pub tint: Hsla,
}

/// Paint-ready view of a particle after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub position: DVec2,
    pub radius: f64,
    /// Color with the instantaneous alpha folded in.
    pub color: Hsla,
}

/// Read-only snapshot handed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct FieldFrame<'a> {
    pub center: DVec2,
    pub sprites: &'a [Sprite],
}

pub struct ParticleField {
    config: FieldConfig,
    center: DVec2,
    particles: Vec<Particle>,
    sprites: Vec<Sprite>,
    /// Oscillator time in seconds, scaled by activity speed.
    time: f64,
    /// Unscaled elapsed milliseconds driving the color cycle.
    clock_ms: f64,
}

impl ParticleField {
    /// Seed `config.count` particles in a disc around the center of a `size`
    /// square. `seed` makes initialization reproducible; `None` uses entropy.
    pub fn new(config: FieldConfig, size: f64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let center = DVec2::splat(sanitize_size(size) / 2.0);
        let (lo, hi) = if config.min_radius <= config.base_radius {
            (config.min_radius, config.base_radius)
        } else {
            (config.base_radius, config.min_radius)
        };
        let lo = lo.max(0.0);
        let hi = hi.max(lo);

        // Uniform over radius rather than area: the cloud thins toward the center.
        let particles: Vec<Particle> = (0..config.count)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let distance = rng.gen_range(lo..=hi);
                let home = center + polar(distance, angle);
                Particle {
                    position: home,
                    base_position: home,
                    velocity: DVec2::new(
                        (rng.gen::<f64>() - 0.5) * SEED_VELOCITY_SPAN,
                        (rng.gen::<f64>() - 0.5) * SEED_VELOCITY_SPAN,
                    ),
                    radius: rng.gen_range(DOT_RADIUS_MIN..=DOT_RADIUS_MAX),
                    color_phase: rng.gen_range(0.0..TAU),
                    alpha: rng.gen_range(BASE_ALPHA_MIN..=BASE_ALPHA_MAX),
                    phase: rng.gen_range(0.0..TAU),
                    tint: TINTS[rng.gen_range(0..TINTS.len())],
                }
            })
            .collect();

        let sprites = particles
            .iter()
            .map(|p| Sprite {
                position: p.position,
                radius: p.radius,
                color: p.tint.with_alpha(clamp(p.alpha, ALPHA_MIN, ALPHA_MAX)),
            })
            .collect();

        let config = FieldConfig {
            min_radius: lo,
            base_radius: hi,
            ..config
        };
        Self {
            config,
            center,
            particles,
            sprites,
            time: 0.0,
            clock_ms: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn set_color_cycling(&mut self, enabled: bool) {
        self.config.color_cycling = enabled;
    }

    /// Move the cloud to the center of a `size` square without reseeding.
    pub fn recenter(&mut self, size: f64) {
        let center = DVec2::splat(sanitize_size(size) / 2.0);
        let delta = center - self.center;
        if delta == DVec2::ZERO {
            return;
        }
        for p in &mut self.particles {
            p.position += delta;
            p.base_position += delta;
        }
        for s in &mut self.sprites {
            s.position += delta;
        }
        self.center = center;
    }

    /// Advance by `dt` seconds (scaled by `params.speed`) and refresh sprites.
    pub fn step(&mut self, dt: f64, params: &ActivityParams, intensity: f64) {
        let i = sanitize_intensity(intensity);
        self.time += dt * params.speed;
        self.clock_ms += dt * 1000.0;

        let t = self.time;
        let voice_pulse = (t * VOICE_PULSE_RATE).sin() * i * VOICE_PULSE_DEPTH;
        let jitter_amount = params.jitter * (1.0 + i * JITTER_INTENSITY_GAIN);
        let reach = self.config.base_radius.max(f64::EPSILON);
        let center = self.center;
        let smoothing = self.config.smoothing;

        for (p, sprite) in self.particles.iter_mut().zip(self.sprites.iter_mut()) {
            let offset = p.base_position - center;
            let base_distance = offset.length();
            let angle = offset.y.atan2(offset.x);

            let breathe = (t * BREATHE_RATE + p.phase).sin() * BREATHE_DEPTH * params.expansion;
            let voice_expansion = voice_pulse * (base_distance / reach);
            let target = center + polar(base_distance * (1.0 + breathe + voice_expansion), angle);

            let jitter = DVec2::new(
                (t * JITTER_RATE + p.phase).sin() * jitter_amount * JITTER_AMPLITUDE,
                (t * JITTER_RATE + p.phase * 1.5).cos() * jitter_amount * JITTER_AMPLITUDE,
            );
            p.position = p.position.lerp(target + jitter, smoothing);

            let pulse = ALPHA_PULSE_BASE + (t * ALPHA_PULSE_RATE + p.phase).sin() * params.pulse_strength;
            let alpha = clamp(
                p.alpha * pulse * params.brightness + i * ALPHA_INTENSITY_BOOST,
                ALPHA_MIN,
                ALPHA_MAX,
            );
            let color = if self.config.color_cycling {
                cycle_color(self.clock_ms, p.color_phase)
            } else {
                p.tint
            };

            *sprite = Sprite {
                position: p.position,
                radius: p.radius,
                color: color.with_alpha(alpha),
            };
        }
    }

    pub fn frame(&self) -> FieldFrame<'_> {
        FieldFrame {
            center: self.center,
            sprites: &self.sprites,
        }
    }
}

/// Palette color at `clock_ms` for a particle with `color_phase`, blending
/// linearly between adjacent palette entries.
pub fn cycle_color(clock_ms: f64, color_phase: f64) -> Hsla {
    let n = CYCLE_PALETTE.len();
    let cycle = (clock_ms + color_phase * COLOR_PHASE_MS).rem_euclid(COLOR_CYCLE_MS) / COLOR_CYCLE_MS;
    let pos = cycle * n as f64;
    let idx = (pos.floor() as usize) % n;
    let frac = pos - pos.floor();
    CYCLE_PALETTE[idx].lerp(CYCLE_PALETTE[(idx + 1) % n], frac)
}

/// Non-finite or non-positive sizes fall back to the default viewport.
#[inline]
pub fn sanitize_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        DEFAULT_SIZE
    }
}
