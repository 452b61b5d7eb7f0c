// Host-side tests for the activity → physics parameter mapping.

use voyage_viz::core::*;

const TOL: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOL
}

fn expected(activity: Activity, i: f64) -> [f64; 5] {
    match activity {
        Activity::Idle => [1.0 + 0.1 * i, 0.5 + i, 0.7 + 0.2 * i, 0.3 + 0.5 * i, 0.1 + 0.3 * i],
        Activity::Listening => [
            1.1 + 0.2 * i,
            1.0 + 1.5 * i,
            0.85 + 0.15 * i,
            0.6 + 0.8 * i,
            0.3 + 0.5 * i,
        ],
        Activity::Speaking => [
            1.2 + 0.4 * i,
            1.5 + 2.0 * i,
            0.9 + 0.1 * i,
            0.8 + 1.5 * i,
            0.5 + 0.8 * i,
        ],
        Activity::Processing => [1.15, 2.0, 0.9, 0.8, 0.4],
    }
}

fn as_array(p: &ActivityParams) -> [f64; 5] {
    [p.expansion, p.speed, p.brightness, p.jitter, p.pulse_strength]
}

#[test]
fn params_match_table_across_intensity_grid() {
    for activity in Activity::ALL {
        for step in 0..=20 {
            let i = step as f64 / 20.0;
            let got = as_array(&ActivityParams::derive(activity, i));
            let want = expected(activity, i);
            for k in 0..5 {
                assert!(
                    close(got[k], want[k]),
                    "{activity} i={i} param {k}: got {}, want {}",
                    got[k],
                    want[k]
                );
            }
        }
    }
}

#[test]
fn params_are_monotonic_in_intensity_for_live_states() {
    for activity in [Activity::Idle, Activity::Listening, Activity::Speaking] {
        let mut prev = as_array(&ActivityParams::derive(activity, 0.0));
        for step in 1..=100 {
            let cur = as_array(&ActivityParams::derive(activity, step as f64 / 100.0));
            for k in 0..5 {
                assert!(cur[k] >= prev[k], "{activity} param {k} decreased at step {step}");
            }
            prev = cur;
        }
    }
}

#[test]
fn processing_ignores_intensity() {
    let low = ActivityParams::derive(Activity::Processing, 0.0);
    let high = ActivityParams::derive(Activity::Processing, 1.0);
    assert_eq!(low, high);
    assert!(Activity::Processing.is_fixed());
}

#[test]
fn out_of_range_intensity_is_clamped() {
    assert_eq!(
        ActivityParams::derive(Activity::Speaking, 7.0),
        ActivityParams::derive(Activity::Speaking, 1.0)
    );
    assert_eq!(
        ActivityParams::derive(Activity::Listening, -3.0),
        ActivityParams::derive(Activity::Listening, 0.0)
    );
    assert_eq!(
        ActivityParams::derive(Activity::Idle, f64::NAN),
        ActivityParams::derive(Activity::Idle, 0.0)
    );
}

#[test]
fn unknown_activity_falls_back_to_idle() {
    assert_eq!("speaking".parse::<Activity>(), Ok(Activity::Speaking));
    assert_eq!(" Listening ".parse::<Activity>(), Ok(Activity::Listening));
    assert!("speking".parse::<Activity>().is_err());
    assert_eq!(Activity::parse_or_idle("speking"), Activity::Idle);
    assert_eq!(Activity::parse_or_idle("processing"), Activity::Processing);
}

#[test]
fn assistant_state_maps_onto_activity() {
    assert_eq!(AssistantState::Searching.activity(), Activity::Processing);
    assert_eq!(AssistantState::Results.activity(), Activity::Idle);
    assert_eq!(AssistantState::Speaking.activity(), Activity::Speaking);
    assert!(AssistantState::Searching.shows_locations());
    assert!(!AssistantState::Results.shows_locations());
    assert!(AssistantState::Speaking.reveals_transcript());
    assert_eq!(AssistantState::Results.status_label(), "Found for you");
    assert_eq!("searching".parse::<AssistantState>(), Ok(AssistantState::Searching));
    assert!("browsing".parse::<AssistantState>().is_err());
}
