// Host-side tests for tuning constants and their relationships.

use voyage_viz::constants::*;
use voyage_viz::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_geometry_fits_the_viewport() {
    assert!(MIN_RADIUS > 0.0 && MIN_RADIUS < BASE_RADIUS);
    // Fully breathed out and voice-expanded, the cloud still fits.
    let peak = BASE_RADIUS * 1.6 * (1.0 + BREATHE_DEPTH + VOICE_PULSE_DEPTH);
    assert!(peak < DEFAULT_SIZE / 2.0 + BASE_RADIUS);
    assert!(DOT_RADIUS_MIN > 0.0 && DOT_RADIUS_MIN < DOT_RADIUS_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_bounds_are_ordered() {
    assert!(ALPHA_MIN > 0.0 && ALPHA_MIN < ALPHA_MAX);
    assert!(ALPHA_MAX <= 1.0);
    assert!(BASE_ALPHA_MIN >= ALPHA_MIN && BASE_ALPHA_MAX <= ALPHA_MAX);
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR < 1.0);
}

#[test]
fn palettes_are_well_formed() {
    for c in CYCLE_PALETTE.iter().chain(TINTS.iter()) {
        assert!((0.0..360.0).contains(&c.h));
        assert!((0.0..=100.0).contains(&c.s));
        assert!((0.0..=100.0).contains(&c.l));
        assert_eq!(c.a, 1.0);
    }
    assert_eq!(AMBIENT_OUTER.a, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn label_timing_is_consistent() {
    // The whole batch is revealed before the first refresh.
    assert!((LABEL_BATCH as u64 - 1) * LABEL_STAGGER_MS + LABEL_FADE_MS as u64 <= LABEL_REFRESH_MS as u64);
    assert!(LABEL_REPLACE_MIN <= LABEL_REPLACE_MAX && LABEL_REPLACE_MAX < LABEL_BATCH);
    assert!(LOCATIONS.len() >= LABEL_BATCH + LABEL_REPLACE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn word_intervals_are_ordered() {
    assert!(WORD_INTERVAL_FAST_MS < WORD_INTERVAL_MEDIUM_MS);
    assert!(WORD_INTERVAL_MEDIUM_MS < WORD_INTERVAL_SLOW_MS);
}
