// Host-side tests for the frame loop and the particle driver lifecycle,
// driven by a hand-fired frame scheduler.

mod common;

use common::{ManualFrames, Op, RecordingSurface};
use std::cell::Cell;
use std::rc::Rc;
use voyage_viz::core::{Activity, FieldConfig};
use voyage_viz::frame::{AnimationLoop, DriverState, ParticleDriver};

fn driver(frames: &Rc<ManualFrames>) -> ParticleDriver<ManualFrames> {
    ParticleDriver::new(FieldConfig::default(), 400.0, Some(42), frames.clone())
}

#[test]
fn loop_reschedules_until_stopped() {
    let frames = Rc::new(ManualFrames::default());
    let count = Rc::new(Cell::new(0));
    let mut frame_loop = AnimationLoop::new(frames.clone());
    let c = count.clone();
    frame_loop.start(move |_| c.set(c.get() + 1));

    for n in 1..=5 {
        assert_eq!(frames.fire(n as f64 * 16.0), 1);
        assert_eq!(frames.pending(), 1);
    }
    assert_eq!(count.get(), 5);

    frame_loop.stop();
    assert!(!frame_loop.is_running());
    assert_eq!(frames.pending(), 0);
    assert_eq!(frames.fire(200.0), 0);
    assert_eq!(count.get(), 5);
}

#[test]
fn start_while_ends_itself() {
    let frames = Rc::new(ManualFrames::default());
    let count = Rc::new(Cell::new(0));
    let mut frame_loop = AnimationLoop::new(frames.clone());
    let c = count.clone();
    frame_loop.start_while(move |_| {
        c.set(c.get() + 1);
        c.get() < 3
    });
    while frames.fire(0.0) > 0 {}
    assert_eq!(count.get(), 3);
    assert!(!frame_loop.is_running());
    assert_eq!(frames.pending(), 0);
}

#[test]
fn dropping_the_loop_cancels_its_frame() {
    let frames = Rc::new(ManualFrames::default());
    let count = Rc::new(Cell::new(0));
    {
        let mut frame_loop = AnimationLoop::new(frames.clone());
        let c = count.clone();
        frame_loop.start(move |_| c.set(c.get() + 1));
        assert_eq!(frames.pending(), 1);
    }
    assert_eq!(frames.pending(), 0);
    frames.fire(16.0);
    assert_eq!(count.get(), 0);
}

#[test]
fn refused_first_frame_leaves_loop_stopped() {
    let frames = Rc::new(ManualFrames::default());
    frames.refuse.set(true);
    let mut frame_loop = AnimationLoop::new(frames.clone());
    frame_loop.start(|_| {});
    assert!(!frame_loop.is_running());
}

#[test]
fn attach_runs_ticks_and_paints() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    assert_eq!(d.state(), DriverState::Stopped);

    let surface = RecordingSurface::new(400.0);
    assert!(d.attach(Some(surface.clone())));
    assert_eq!(d.state(), DriverState::Running);

    for n in 0..10 {
        frames.fire(n as f64 * 16.0);
    }
    assert_eq!(d.ticks(), 10);
    // One trail fill per tick.
    assert_eq!(surface.count(|op| matches!(op, Op::Rect { .. })), 10);
    assert_eq!(d.field().len(), 150);
}

#[test]
fn attaching_twice_keeps_a_single_loop() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    let first = RecordingSurface::new(400.0);
    let second = RecordingSurface::new(400.0);
    d.attach(Some(first.clone()));
    d.attach(Some(second.clone()));
    assert_eq!(frames.pending(), 1);

    frames.fire(16.0);
    assert_eq!(d.ticks(), 1);
    assert_eq!(first.ops.borrow().len(), 0);
    assert!(!second.ops.borrow().is_empty());
}

#[test]
fn missing_surface_is_a_no_op() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    assert!(!d.attach(None::<RecordingSurface>));
    assert_eq!(d.state(), DriverState::Stopped);
    assert_eq!(frames.pending(), 0);
}

#[test]
fn no_ticks_after_detach() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    d.attach(Some(RecordingSurface::new(400.0)));
    frames.fire(0.0);
    frames.fire(16.0);
    d.detach();
    assert_eq!(d.state(), DriverState::Stopped);
    assert_eq!(frames.pending(), 0);

    let fired = frames.fired.get();
    for n in 0..5 {
        frames.fire(100.0 + n as f64);
    }
    assert_eq!(frames.fired.get(), fired);
    assert_eq!(d.ticks(), 2);
}

#[test]
fn dropping_the_driver_stops_the_loop() {
    let frames = Rc::new(ManualFrames::default());
    let surface = RecordingSurface::new(400.0);
    {
        let mut d = driver(&frames);
        d.attach(Some(surface.clone()));
    }
    assert_eq!(frames.pending(), 0);
    frames.fire(16.0);
    assert!(surface.ops.borrow().is_empty());
}

#[test]
fn attach_recenters_on_surface_size() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    d.attach(Some(RecordingSurface::new(300.0)));
    assert_eq!(d.field().center(), glam::DVec2::splat(150.0));
}

#[test]
fn parameter_changes_apply_on_next_tick_without_reseeding() {
    let frames = Rc::new(ManualFrames::default());
    let mut d = driver(&frames);
    d.attach(Some(RecordingSurface::new(400.0)));
    frames.fire(0.0);
    let phases: Vec<f64> = d.field().particles().iter().map(|p| p.phase).collect();
    let t0 = d.field().time();

    d.apply(Activity::Processing, 0.3);
    assert_eq!(d.inputs(), (Activity::Processing, 0.3));
    // Nothing moves until the next tick.
    assert_eq!(d.field().time(), t0);

    frames.fire(16.0);
    let dt = d.field().time() - t0;
    // Processing runs at speed 2.0.
    assert!((dt - 2.0 / 60.0).abs() < 1e-12);
    let after: Vec<f64> = d.field().particles().iter().map(|p| p.phase).collect();
    assert_eq!(phases, after);
}

#[test]
fn latest_input_wins_and_is_sanitized() {
    let frames = Rc::new(ManualFrames::default());
    let d = driver(&frames);
    d.set_activity(Activity::Listening);
    d.set_activity(Activity::Speaking);
    d.set_intensity(0.2);
    d.set_intensity(4.0);
    assert_eq!(d.inputs(), (Activity::Speaking, 1.0));
    d.set_intensity(f64::NAN);
    assert_eq!(d.inputs().1, 0.0);
}
