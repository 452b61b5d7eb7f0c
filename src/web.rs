use crate::canvas::CanvasSurface;
use crate::core::{
    sanitize_size, Activity, AssistantState, FieldConfig, LabelConfig, RevealSpeed,
    TranscriptReveal, TranscriptTone,
};
use crate::dom;
use crate::frame::{AnimationLoop, LabelDriver, ParticleDriver};
use crate::overlay::{DomLabelSink, TranscriptSpans};
use crate::timers::{RafScheduler, WindowTimers};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("voyage-viz starting");
    Ok(())
}

/// Particle orb bound to a `<canvas>`.
#[wasm_bindgen]
pub struct ParticleCanvas {
    driver: ParticleDriver<RafScheduler>,
    size: f64,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(size: f64) -> ParticleCanvas {
        Self::with_options(size, true)
    }

    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(size: f64, color_cycling: bool) -> ParticleCanvas {
        let size = sanitize_size(size);
        let config = FieldConfig {
            color_cycling,
            ..FieldConfig::default()
        };
        ParticleCanvas {
            driver: ParticleDriver::new(config, size, None, Rc::new(RafScheduler::new())),
            size,
        }
    }

    /// Start animating on `canvas`. Returns `false` (and draws nothing) when
    /// no 2D context is available.
    pub fn attach(&mut self, canvas: web::HtmlCanvasElement) -> bool {
        let surface = match CanvasSurface::acquire(&canvas, self.size) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[particles] {e}");
                None
            }
        };
        self.driver.attach(surface)
    }

    #[wasm_bindgen(js_name = attachById)]
    pub fn attach_by_id(&mut self, id: &str) -> bool {
        match dom::canvas_by_id(id) {
            Ok(canvas) => self.attach(canvas),
            Err(e) => {
                log::warn!("[particles] {e:#}");
                self.driver.detach();
                false
            }
        }
    }

    pub fn detach(&mut self) {
        self.driver.detach();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.driver.state() == crate::frame::DriverState::Running
    }

    #[wasm_bindgen(js_name = setActivity)]
    pub fn set_activity(&mut self, activity: &str) {
        self.driver.set_activity(Activity::parse_or_idle(activity));
    }

    #[wasm_bindgen(js_name = setIntensity)]
    pub fn set_intensity(&mut self, intensity: f64) {
        self.driver.set_intensity(intensity);
    }

    /// Drive the orb from a page-level assistant state (`searching`, `results`, ...).
    #[wasm_bindgen(js_name = setState)]
    pub fn set_state(&mut self, state: &str) {
        let state = state.parse::<AssistantState>().unwrap_or_else(|e| {
            log::warn!("{e}; falling back to idle");
            AssistantState::Idle
        });
        self.driver.set_activity(state.activity());
    }
}

/// Destination names orbiting the orb, rendered into a container element.
#[wasm_bindgen]
pub struct LocationOverlay {
    driver: Option<LabelDriver<RafScheduler, WindowTimers, DomLabelSink>>,
}

#[wasm_bindgen]
impl LocationOverlay {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, radius: f64) -> LocationOverlay {
        let Some(document) = dom::window_document() else {
            log::warn!("[labels] no document; overlay disabled");
            return LocationOverlay { driver: None };
        };
        let mut driver = LabelDriver::new(
            LabelConfig::default(),
            None,
            Rc::new(RafScheduler::new()),
            Rc::new(WindowTimers::new()),
            DomLabelSink::new(document, container),
        );
        driver.set_radius(radius);
        LocationOverlay {
            driver: Some(driver),
        }
    }

    #[wasm_bindgen(js_name = fromId)]
    pub fn from_id(id: &str, radius: f64) -> LocationOverlay {
        match dom::element_by_id(id) {
            Ok(container) => Self::new(container, radius),
            Err(e) => {
                log::warn!("[labels] {e:#}");
                LocationOverlay { driver: None }
            }
        }
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, active: bool) {
        if let Some(driver) = &mut self.driver {
            driver.set_active(active);
        }
    }

    #[wasm_bindgen(js_name = setRadius)]
    pub fn set_radius(&mut self, radius: f64) {
        if let Some(driver) = &mut self.driver {
            driver.set_radius(radius);
        }
    }
}

/// Word-by-word transcript reveal inside a container element.
#[wasm_bindgen]
pub struct TranscriptView {
    reveal: Rc<RefCell<TranscriptReveal>>,
    spans: Option<Rc<RefCell<TranscriptSpans>>>,
    frame_loop: AnimationLoop<RafScheduler>,
}

#[wasm_bindgen]
impl TranscriptView {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, speed: &str) -> TranscriptView {
        let reveal = TranscriptReveal::new("", RevealSpeed::parse_or_medium(speed));
        let spans = dom::window_document()
            .map(|document| Rc::new(RefCell::new(TranscriptSpans::new(document, container))));
        if spans.is_none() {
            log::warn!("[transcript] no document; view disabled");
        }
        TranscriptView {
            reveal: Rc::new(RefCell::new(reveal)),
            spans,
            frame_loop: AnimationLoop::new(Rc::new(RafScheduler::new())),
        }
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.reveal.borrow_mut().set_text(text);
        if let Some(spans) = &self.spans {
            spans.borrow_mut().rebuild(&self.reveal.borrow());
        }
        if self.reveal.borrow().is_active() {
            self.run();
        }
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, active: bool) {
        self.frame_loop.stop();
        self.reveal.borrow_mut().set_active(active);
        if let Some(spans) = &self.spans {
            spans.borrow().update(&self.reveal.borrow());
        }
        if active {
            self.run();
        }
    }

    /// Show `text` all at once in a `primary`, `secondary` or `muted` tone,
    /// ending any reveal in progress.
    #[wasm_bindgen(js_name = showStatic)]
    pub fn show_static(&mut self, text: &str, tone: &str) {
        self.frame_loop.stop();
        self.reveal.borrow_mut().set_active(false);
        if let Some(spans) = &self.spans {
            spans
                .borrow_mut()
                .show_static(text, TranscriptTone::parse_or_primary(tone));
        }
    }

    fn run(&mut self) {
        let Some(spans) = self.spans.clone() else {
            return;
        };
        let reveal = self.reveal.clone();
        let last = Cell::new(None::<f64>);
        self.frame_loop.start_while(move |ts| {
            let dt = last.get().map_or(0.0, |prev| ts - prev);
            last.set(Some(ts));
            let mut reveal = reveal.borrow_mut();
            if reveal.advance(dt) > 0 {
                spans.borrow().update(&reveal);
            }
            !reveal.is_complete()
        });
    }
}
