use super::anim::Hsla;

// Shared physics/timing tuning constants for the particle field and overlays.

// Field layout (logical pixels)
pub const PARTICLE_COUNT: usize = 150;
pub const MIN_RADIUS: f64 = 80.0; // inner edge of the seeded disc
pub const BASE_RADIUS: f64 = 120.0; // outer edge of the seeded disc
pub const DEFAULT_SIZE: f64 = 400.0; // logical square viewport side

// Per-particle seed ranges
pub const DOT_RADIUS_MIN: f64 = 1.0;
pub const DOT_RADIUS_MAX: f64 = 3.0;
pub const BASE_ALPHA_MIN: f64 = 0.4;
pub const BASE_ALPHA_MAX: f64 = 1.0;
pub const SEED_VELOCITY_SPAN: f64 = 0.5;

// Motion
pub const BASE_STEP_SEC: f64 = 1.0 / 60.0; // fixed tick length before speed scaling
pub const SMOOTHING_FACTOR: f64 = 0.06; // exponential approach per tick
pub const BREATHE_RATE: f64 = 0.8;
pub const BREATHE_DEPTH: f64 = 0.15;
pub const VOICE_PULSE_RATE: f64 = 8.0;
pub const VOICE_PULSE_DEPTH: f64 = 0.3;
pub const JITTER_RATE: f64 = 3.0;
pub const JITTER_AMPLITUDE: f64 = 2.0;
pub const JITTER_INTENSITY_GAIN: f64 = 2.0;

// Alpha
pub const ALPHA_PULSE_RATE: f64 = 2.0;
pub const ALPHA_PULSE_BASE: f64 = 0.5;
pub const ALPHA_INTENSITY_BOOST: f64 = 0.2;
pub const ALPHA_MIN: f64 = 0.2;
pub const ALPHA_MAX: f64 = 1.0;

// Color cycling
pub const COLOR_CYCLE_MS: f64 = 8000.0;
pub const COLOR_PHASE_MS: f64 = 1000.0; // ms of cycle offset per radian of color phase

pub const ROSE: Hsla = Hsla::new(15.0, 55.0, 70.0, 1.0);
pub const CHAMPAGNE: Hsla = Hsla::new(35.0, 45.0, 75.0, 1.0);
pub const CORAL: Hsla = Hsla::new(25.0, 50.0, 72.0, 1.0);
pub const GOLD: Hsla = Hsla::new(40.0, 50.0, 55.0, 1.0);
pub const NAVY: Hsla = Hsla::new(222.0, 40.0, 32.0, 1.0);
pub const GREEN: Hsla = Hsla::new(150.0, 28.0, 42.0, 1.0);

/// Ordered color-cycle palette; the cycle wraps from the last entry back to the first.
pub const CYCLE_PALETTE: [Hsla; 6] = [GOLD, NAVY, GREEN, ROSE, CHAMPAGNE, CORAL];
/// Fixed tints used when color cycling is off.
pub const TINTS: [Hsla; 3] = [ROSE, CHAMPAGNE, CORAL];

// Floating labels
pub const LABEL_BATCH: usize = 8;
pub const LABEL_RADIUS: f64 = 200.0;
pub const LABEL_STAGGER_MS: u64 = 300;
pub const LABEL_REFRESH_MS: u32 = 3000;
pub const LABEL_FADE_MS: f64 = 600.0;
pub const LABEL_ANGLE_JITTER: f64 = 0.15; // radians either side of the even slot
pub const LABEL_ROTATION_MAX: f64 = 0.000_08; // radians per ms
pub const LABEL_PULSE_RATE: f64 = 0.002; // radians per ms
pub const LABEL_PULSE_DEPTH: f64 = 0.05;
pub const LABEL_REPLACE_MIN: usize = 2;
pub const LABEL_REPLACE_MAX: usize = 3;

pub const LOCATIONS: &[&str] = &[
    "Bali",
    "Maldives",
    "Santorini",
    "Tokyo",
    "Paris",
    "Sydney",
    "New York",
    "Marrakech",
    "Iceland",
    "Patagonia",
    "Amalfi Coast",
    "Seychelles",
    "Kyoto",
    "Dubai",
    "Cape Town",
    "Bora Bora",
    "Venice",
    "Swiss Alps",
    "Maui",
    "Tuscany",
];

// Transcript reveal (ms per word)
pub const WORD_INTERVAL_SLOW_MS: u32 = 150;
pub const WORD_INTERVAL_MEDIUM_MS: u32 = 80;
pub const WORD_INTERVAL_FAST_MS: u32 = 40;
pub const WORD_TRANSITION_STAGGER_MS: u64 = 30;

pub const TONE_PRIMARY: Hsla = Hsla::new(30.0, 20.0, 15.0, 0.9);
pub const TONE_SECONDARY: Hsla = Hsla::new(30.0, 20.0, 15.0, 0.7);
pub const TONE_MUTED: Hsla = Hsla::new(30.0, 15.0, 45.0, 1.0);
