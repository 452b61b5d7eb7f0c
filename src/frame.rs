use crate::core::constants::BASE_STEP_SEC;
use crate::core::{
    sanitize_intensity, Activity, ActivityParams, FieldConfig, FloatingLabel, LabelConfig,
    LabelOverlay, ParticleField,
};
use crate::render::{paint_frame, Surface};
use crate::schedule::{FrameCallback, FrameHandle, FrameScheduler, Interval, TimerScheduler};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

struct LoopRun {
    running: Cell<bool>,
    pending: Cell<Option<FrameHandle>>,
    tick: RefCell<Option<FrameCallback>>,
}

/// Self-rescheduling frame loop that can be cancelled.
///
/// Each tick runs the body and then requests the next frame. `stop` cancels
/// the pending frame and drops the tick closure, so no callback fires after
/// teardown. Starting a running loop stops the previous run first.
pub struct AnimationLoop<S: FrameScheduler + 'static> {
    scheduler: Rc<S>,
    run: Option<Rc<LoopRun>>,
}

impl<S: FrameScheduler + 'static> AnimationLoop<S> {
    pub fn new(scheduler: Rc<S>) -> Self {
        Self {
            scheduler,
            run: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.as_ref().map_or(false, |r| r.running.get())
    }

    pub fn start(&mut self, mut body: impl FnMut(f64) + 'static) {
        self.start_while(move |ts| {
            body(ts);
            true
        });
    }

    /// Like `start`, but the loop ends on its own once `body` returns `false`.
    pub fn start_while(&mut self, body: impl FnMut(f64) -> bool + 'static) {
        self.stop();
        let run = Rc::new(LoopRun {
            running: Cell::new(true),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&run);
        let scheduler = self.scheduler.clone();
        let body = RefCell::new(body);
        let tick: FrameCallback = Rc::new(move |ts: f64| {
            let Some(run) = weak.upgrade() else { return };
            if !run.running.get() {
                return;
            }
            run.pending.set(None);
            let more = (body.borrow_mut())(ts);
            if !more {
                run.running.set(false);
                run.tick.borrow_mut().take();
                return;
            }
            if !run.running.get() {
                return;
            }
            let next = run.tick.borrow().clone();
            if let Some(next) = next {
                let handle = scheduler.request_frame(next);
                if handle.is_none() {
                    log::warn!("[loop] host refused next frame; loop stopped");
                    run.running.set(false);
                }
                run.pending.set(handle);
            }
        });
        *run.tick.borrow_mut() = Some(tick.clone());
        match self.scheduler.request_frame(tick) {
            Some(h) => run.pending.set(Some(h)),
            None => {
                log::warn!("[loop] host refused first frame");
                run.running.set(false);
                run.tick.borrow_mut().take();
            }
        }
        self.run = Some(run);
    }

    pub fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            run.running.set(false);
            if let Some(h) = run.pending.take() {
                self.scheduler.cancel_frame(h);
            }
            run.tick.borrow_mut().take();
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Latest-value-wins activity/intensity signals, sampled once per tick.
#[derive(Debug, Default)]
pub struct VizInputs {
    activity: Cell<Activity>,
    intensity: Cell<f64>,
}

impl VizInputs {
    pub fn set_activity(&self, activity: Activity) {
        self.activity.set(activity);
    }

    pub fn set_intensity(&self, intensity: f64) {
        self.intensity.set(sanitize_intensity(intensity));
    }

    pub fn sample(&self) -> (Activity, f64) {
        (self.activity.get(), self.intensity.get())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Drives the particle field and paints it every frame while attached.
pub struct ParticleDriver<S: FrameScheduler + 'static> {
    field: Rc<RefCell<ParticleField>>,
    inputs: Rc<VizInputs>,
    frame_loop: AnimationLoop<S>,
    ticks: Rc<Cell<u64>>,
}

impl<S: FrameScheduler + 'static> ParticleDriver<S> {
    pub fn new(config: FieldConfig, size: f64, seed: Option<u64>, scheduler: Rc<S>) -> Self {
        Self {
            field: Rc::new(RefCell::new(ParticleField::new(config, size, seed))),
            inputs: Rc::new(VizInputs::default()),
            frame_loop: AnimationLoop::new(scheduler),
            ticks: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> DriverState {
        if self.frame_loop.is_running() {
            DriverState::Running
        } else {
            DriverState::Stopped
        }
    }

    /// Start ticking against `surface`, replacing any previous loop.
    /// A missing surface leaves the driver stopped. Returns whether it is running.
    pub fn attach<R: Surface + 'static>(&mut self, surface: Option<R>) -> bool {
        self.frame_loop.stop();
        let Some(mut surface) = surface else {
            log::warn!("[particles] drawing surface unavailable; not starting");
            return false;
        };
        self.field.borrow_mut().recenter(surface.logical_size());

        let field = self.field.clone();
        let inputs = self.inputs.clone();
        let ticks = self.ticks.clone();
        self.frame_loop.start(move |_ts| {
            let (activity, intensity) = inputs.sample();
            let params = ActivityParams::derive(activity, intensity);
            let mut field = field.borrow_mut();
            field.step(BASE_STEP_SEC, &params, intensity);
            paint_frame(&mut surface, &field.frame(), &params, intensity);
            ticks.set(ticks.get() + 1);
        });
        let running = self.frame_loop.is_running();
        if running {
            log::info!("[particles] attached ({} particles)", self.field.borrow().len());
        }
        running
    }

    pub fn detach(&mut self) {
        if self.frame_loop.is_running() {
            log::info!("[particles] detached after {} ticks", self.ticks.get());
        }
        self.frame_loop.stop();
    }

    /// New parameters take effect on the next tick; the particle set is kept.
    pub fn apply(&self, activity: Activity, intensity: f64) {
        self.inputs.set_activity(activity);
        self.inputs.set_intensity(intensity);
    }

    pub fn set_activity(&self, activity: Activity) {
        self.inputs.set_activity(activity);
    }

    pub fn set_intensity(&self, intensity: f64) {
        self.inputs.set_intensity(intensity);
    }

    pub fn inputs(&self) -> (Activity, f64) {
        self.inputs.sample()
    }

    pub fn field(&self) -> Ref<'_, ParticleField> {
        self.field.borrow()
    }

    /// Ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}

/// Presentation target for floating labels.
pub trait LabelSink {
    fn render(&mut self, labels: &[FloatingLabel]);
    fn clear(&mut self);
}

/// Runs the label overlay: a refresh interval plus its own frame loop.
pub struct LabelDriver<F, T, K>
where
    F: FrameScheduler + 'static,
    T: TimerScheduler + 'static,
    K: LabelSink + 'static,
{
    overlay: Rc<RefCell<LabelOverlay>>,
    sink: Rc<RefCell<K>>,
    timers: Rc<T>,
    frame_loop: AnimationLoop<F>,
    refresh: Option<Interval<T>>,
}

impl<F, T, K> LabelDriver<F, T, K>
where
    F: FrameScheduler + 'static,
    T: TimerScheduler + 'static,
    K: LabelSink + 'static,
{
    pub fn new(config: LabelConfig, seed: Option<u64>, frames: Rc<F>, timers: Rc<T>, sink: K) -> Self {
        Self {
            overlay: Rc::new(RefCell::new(LabelOverlay::new(config, seed))),
            sink: Rc::new(RefCell::new(sink)),
            timers,
            frame_loop: AnimationLoop::new(frames),
            refresh: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.overlay.borrow().is_active()
    }

    pub fn set_active(&mut self, active: bool) {
        if active == self.is_active() {
            return;
        }
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    fn activate(&mut self) {
        let now = self.timers.now_ms();
        {
            let mut overlay = self.overlay.borrow_mut();
            overlay.activate(now);
            overlay.animate(now);
        }
        self.sink.borrow_mut().render(self.overlay.borrow().labels());

        let period = self.overlay.borrow().config().refresh_ms;
        let (overlay, sink, timers) = (self.overlay.clone(), self.sink.clone(), self.timers.clone());
        self.refresh = Some(Interval::start(self.timers.clone(), period, move || {
            overlay.borrow_mut().refresh(timers.now_ms());
            sink.borrow_mut().render(overlay.borrow().labels());
        }));

        let (overlay, sink) = (self.overlay.clone(), self.sink.clone());
        self.frame_loop.start(move |ts| {
            overlay.borrow_mut().animate(ts);
            sink.borrow_mut().render(overlay.borrow().labels());
        });
        log::info!("[labels] overlay active");
    }

    fn deactivate(&mut self) {
        if let Some(mut refresh) = self.refresh.take() {
            refresh.cancel();
        }
        self.frame_loop.stop();
        self.overlay.borrow_mut().deactivate();
        self.sink.borrow_mut().clear();
        log::info!("[labels] overlay cleared");
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.overlay.borrow_mut().set_radius(radius);
        if self.is_active() {
            self.sink.borrow_mut().render(self.overlay.borrow().labels());
        }
    }

    pub fn labels(&self) -> Ref<'_, [FloatingLabel]> {
        Ref::map(self.overlay.borrow(), |o| o.labels())
    }

    pub fn sink(&self) -> Ref<'_, K> {
        self.sink.borrow()
    }

    pub fn refresh_running(&self) -> bool {
        self.refresh.as_ref().map_or(false, |r| r.is_running())
    }

    pub fn frame_loop_running(&self) -> bool {
        self.frame_loop.is_running()
    }
}

impl<F, T, K> Drop for LabelDriver<F, T, K>
where
    F: FrameScheduler + 'static,
    T: TimerScheduler + 'static,
    K: LabelSink + 'static,
{
    fn drop(&mut self) {
        if let Some(mut refresh) = self.refresh.take() {
            refresh.cancel();
        }
        self.frame_loop.stop();
    }
}
