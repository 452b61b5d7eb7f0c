//! Host scheduling seams.
//!
//! Every loop in the crate yields to the host between ticks by scheduling its
//! continuation through one of these traits. The browser implements them with
//! `requestAnimationFrame` and `setInterval`; tests drive them by hand.

use std::rc::Rc;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Rc<dyn Fn(f64)>;
pub type TimerCallback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// One-shot next-frame callbacks.
pub trait FrameScheduler {
    /// Queue `callback` for the next frame. `None` if the host refused.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Repeating timers plus the clock they run against.
pub trait TimerScheduler {
    fn now_ms(&self) -> f64;
    fn set_interval(&self, callback: TimerCallback, period_ms: u32) -> Option<TimerHandle>;
    fn clear_interval(&self, handle: TimerHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        (**self).request_frame(callback)
    }
    fn cancel_frame(&self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

impl<T: TimerScheduler + ?Sized> TimerScheduler for Rc<T> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
    fn set_interval(&self, callback: TimerCallback, period_ms: u32) -> Option<TimerHandle> {
        (**self).set_interval(callback, period_ms)
    }
    fn clear_interval(&self, handle: TimerHandle) {
        (**self).clear_interval(handle)
    }
}

/// A running interval that clears itself when dropped.
pub struct Interval<T: TimerScheduler> {
    timers: Rc<T>,
    handle: Option<TimerHandle>,
}

impl<T: TimerScheduler> Interval<T> {
    pub fn start(timers: Rc<T>, period_ms: u32, callback: impl Fn() + 'static) -> Self {
        let handle = timers.set_interval(Rc::new(callback), period_ms);
        if handle.is_none() {
            log::warn!("[timers] host refused a {period_ms} ms interval");
        }
        Self { timers, handle }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            self.timers.clear_interval(h);
        }
    }
}

impl<T: TimerScheduler> Drop for Interval<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
