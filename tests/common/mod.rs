// Instrumented host stand-ins for the browser: a hand-fired frame scheduler,
// hand-fired interval timers, and a surface that records draw calls.

#![allow(dead_code)]

use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use voyage_viz::core::{FloatingLabel, Hsla};
use voyage_viz::frame::LabelSink;
use voyage_viz::render::Surface;
use voyage_viz::schedule::{
    FrameCallback, FrameHandle, FrameScheduler, TimerCallback, TimerHandle, TimerScheduler,
};

#[derive(Default)]
pub struct ManualFrames {
    next_id: Cell<i32>,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    pub fired: Cell<usize>,
    pub cancelled: Cell<usize>,
    pub refuse: Cell<bool>,
}

impl ManualFrames {
    /// Run every callback queued before this call; returns how many ran.
    pub fn fire(&self, ts: f64) -> usize {
        let due: Vec<(FrameHandle, FrameCallback)> = self.pending.borrow_mut().drain(..).collect();
        for (_, cb) in &due {
            cb(ts);
            self.fired.set(self.fired.get() + 1);
        }
        due.len()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        if self.refuse.get() {
            return None;
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.pending.borrow_mut().push((FrameHandle(id), callback));
        Some(FrameHandle(id))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(h, _)| *h != handle);
        self.cancelled.set(self.cancelled.get() + 1);
    }
}

#[derive(Default)]
pub struct ManualTimers {
    pub now: Cell<f64>,
    next_id: Cell<i32>,
    intervals: RefCell<Vec<(TimerHandle, TimerCallback, u32)>>,
}

impl ManualTimers {
    pub fn set_now(&self, ms: f64) {
        self.now.set(ms);
    }

    /// Fire every registered interval once at `now_ms`.
    pub fn fire_all(&self, now_ms: f64) -> usize {
        self.now.set(now_ms);
        let due: Vec<TimerCallback> = self.intervals.borrow().iter().map(|(_, cb, _)| cb.clone()).collect();
        for cb in &due {
            cb();
        }
        due.len()
    }

    pub fn active(&self) -> usize {
        self.intervals.borrow().len()
    }

    pub fn periods(&self) -> Vec<u32> {
        self.intervals.borrow().iter().map(|(_, _, p)| *p).collect()
    }
}

impl TimerScheduler for ManualTimers {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn set_interval(&self, callback: TimerCallback, period_ms: u32) -> Option<TimerHandle> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.intervals.borrow_mut().push((TimerHandle(id), callback, period_ms));
        Some(TimerHandle(id))
    }

    fn clear_interval(&self, handle: TimerHandle) {
        self.intervals.borrow_mut().retain(|(h, _, _)| *h != handle);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Rect { color: Hsla },
    Line { from: DVec2, to: DVec2, color: Hsla },
    Glow { center: DVec2, radius: f64, stops: Vec<(f64, Hsla)> },
    Circle { center: DVec2, radius: f64, color: Hsla },
}

#[derive(Clone)]
pub struct RecordingSurface {
    pub size: f64,
    pub ops: Rc<RefCell<Vec<Op>>>,
}

impl RecordingSurface {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.borrow().iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> f64 {
        self.size
    }

    fn fill_rect(&mut self, _origin: DVec2, _size: DVec2, color: Hsla) {
        self.ops.borrow_mut().push(Op::Rect { color });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, _width: f64, color: Hsla) {
        self.ops.borrow_mut().push(Op::Line { from, to, color });
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[(f64, Hsla)]) {
        self.ops.borrow_mut().push(Op::Glow {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsla) {
        self.ops.borrow_mut().push(Op::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Label sink that remembers what it was last asked to show.
#[derive(Default)]
pub struct CountingSink {
    pub renders: usize,
    pub clears: usize,
    pub shown: Vec<&'static str>,
}

impl LabelSink for CountingSink {
    fn render(&mut self, labels: &[FloatingLabel]) {
        self.renders += 1;
        self.shown = labels.iter().map(|l| l.text).collect();
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.shown.clear();
    }
}
