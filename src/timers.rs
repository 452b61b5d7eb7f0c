use crate::schedule::{
    FrameCallback, FrameHandle, FrameScheduler, TimerCallback, TimerHandle, TimerScheduler,
};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduler with one outstanding request.
///
/// A single long-lived JS closure dispatches to whichever callback was queued
/// last, so nothing is leaked when a request is cancelled.
pub struct RafScheduler {
    next: Rc<RefCell<Option<FrameCallback>>>,
    trampoline: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new() -> Self {
        let next: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let slot = next.clone();
        let trampoline = Closure::wrap(Box::new(move |ts: f64| {
            let cb = slot.borrow_mut().take();
            if let Some(cb) = cb {
                cb(ts);
            }
        }) as Box<dyn FnMut(f64)>);
        Self { next, trampoline }
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let window = web::window()?;
        *self.next.borrow_mut() = Some(callback);
        let f: &js_sys::Function = self.trampoline.as_ref().unchecked_ref();
        match window.request_animation_frame(f) {
            Ok(id) => Some(FrameHandle(id)),
            Err(_) => {
                self.next.borrow_mut().take();
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle.0);
        }
        self.next.borrow_mut().take();
    }
}

/// `setInterval` timers keyed by handle; clearing a timer drops its closure.
#[derive(Default)]
pub struct WindowTimers {
    closures: RefCell<FnvHashMap<i32, Closure<dyn FnMut()>>>,
}

impl WindowTimers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimerScheduler for WindowTimers {
    fn now_ms(&self) -> f64 {
        instant::now()
    }

    fn set_interval(&self, callback: TimerCallback, period_ms: u32) -> Option<TimerHandle> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .ok()?;
        self.closures.borrow_mut().insert(id, closure);
        Some(TimerHandle(id))
    }

    fn clear_interval(&self, handle: TimerHandle) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle.0);
        }
        self.closures.borrow_mut().remove(&handle.0);
    }
}

impl Drop for WindowTimers {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            for id in self.closures.borrow().keys() {
                window.clear_interval_with_handle(*id);
            }
        }
    }
}
