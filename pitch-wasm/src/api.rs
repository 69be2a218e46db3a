use crate::dom::{DomViewport, ElementStyle};
use crate::{error, Pitch};
use pitch::{compute, ConfigError, PitchSizer, SizingConfig, SizingEvent, SizingResult, ViewportSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, AddEventListenerOptions};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// undefined / null -> defaults
fn config_from_js(config: JsValue) -> Result<SizingConfig, ConfigError> {
    if config.is_undefined() || config.is_null() {
        return Ok(SizingConfig::default());
    }
    let v: serde_json::Value =
        serde_wasm_bindgen::from_value(config).map_err(|e| ConfigError::Parse(e.to_string()))?;
    SizingConfig::from_json_value(v)
}

fn result_value(r: &SizingResult) -> JsValue {
    serde_wasm_bindgen::to_value(r).unwrap_or(JsValue::NULL)
}

fn check_len(param: &str, v: f64) -> Option<JsValue> {
    if !v.is_finite() {
        return Some(error::non_finite(param));
    }
    if v < 0.0 {
        return Some(error::out_of_range(param, 0.0, f64::MAX, v));
    }
    None
}

fn listen(window: &web_sys::Window, sizer: &Rc<RefCell<crate::DomSizer>>, event: SizingEvent) {
    let Some(name) = event.dom_name() else { return };
    let sizer = Rc::clone(sizer);
    let cb = Closure::<dyn FnMut()>::new(move || {
        if let Ok(mut s) = sizer.try_borrow_mut() {
            s.handle(event);
        }
    });
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        cb.as_ref().unchecked_ref(),
        &opts,
    );
    cb.forget();
}

fn expose_info(window: &web_sys::Window, sizer: &Rc<RefCell<crate::DomSizer>>) {
    let sizer = Rc::clone(sizer);
    let win = window.clone();
    let cb = Closure::<dyn Fn() -> JsValue>::new(move || {
        let s = sizer.borrow();
        s.target().inspect(&win, &s.inspect())
    });
    let _ = js_sys::Reflect::set(window, &JsValue::from_str("pitchInfo"), cb.as_ref());
    cb.forget();
}

enum InstallError {
    Config(ConfigError),
    NoWindow,
    MissingElement,
}

fn try_install(element_id: &str, config: JsValue) -> Result<Pitch, InstallError> {
    let cfg = config_from_js(config).map_err(InstallError::Config)?;
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let target = ElementStyle::by_id(&window, element_id);
    let sizer = PitchSizer::attach(cfg, DomViewport::new(window.clone()), target)
        .ok_or(InstallError::MissingElement)?;
    let inner = Rc::new(RefCell::new(sizer));
    listen(&window, &inner, SizingEvent::Resize);
    listen(&window, &inner, SizingEvent::OrientationChange);
    expose_info(&window, &inner);
    console::info_1(&JsValue::from_str(&format!(
        "Pitch loaded. Logical width = {}px; scaling applied when needed to avoid scrolling.",
        cfg.logical_width()
    )));
    Ok(Pitch { inner, window })
}

/// Sizes the element with id `element_id` and keeps it sized on resize and
/// orientation change. A missing element is a silent no-op (`undefined`).
#[wasm_bindgen]
pub fn install(element_id: &str, config: JsValue) -> Option<Pitch> {
    match try_install(element_id, config) {
        Ok(p) => Some(p),
        Err(InstallError::Config(e)) => {
            console::warn_1(&JsValue::from_str(&e.to_string()));
            None
        }
        Err(InstallError::NoWindow) | Err(InstallError::MissingElement) => None,
    }
}

/// Strict variant of [`install`] returning a result envelope.
#[wasm_bindgen]
pub fn install_res(element_id: &str, config: JsValue) -> JsValue {
    match try_install(element_id, config) {
        Ok(p) => error::ok(p.into()),
        Err(InstallError::Config(e)) => error::from_config(&e),
        Err(InstallError::NoWindow) => error::err("no_window", "no global window", None),
        Err(InstallError::MissingElement) => error::missing_element(element_id),
    }
}

/// Pure computation for JS callers; `null` on an invalid config.
/// Negative or NaN viewport lengths are treated as 0 (collapsed panel);
/// use `compute_sizing_res` to have them rejected instead.
#[wasm_bindgen]
pub fn compute_sizing(config: JsValue, width: f64, height: f64) -> JsValue {
    let vp = ViewportSize::new(width.max(0.0), height.max(0.0));
    match config_from_js(config) {
        Ok(cfg) => result_value(&compute(&cfg, vp)),
        Err(_) => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn compute_sizing_res(config: JsValue, width: f64, height: f64) -> JsValue {
    if let Some(e) = check_len("width", width) {
        return e;
    }
    if let Some(e) = check_len("height", height) {
        return e;
    }
    match config_from_js(config) {
        Ok(cfg) => error::ok(result_value(&compute(&cfg, ViewportSize::new(width, height)))),
        Err(e) => error::from_config(&e),
    }
}

#[wasm_bindgen]
impl Pitch {
    /// Recompute from the current window size and re-apply.
    pub fn refresh(&self) -> JsValue {
        let r = self.inner.borrow_mut().refresh();
        result_value(&r)
    }

    pub fn last(&self) -> JsValue {
        result_value(&self.inner.borrow().last())
    }

    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.borrow().config()).unwrap_or(JsValue::NULL)
    }

    /// Same payload as `window.pitchInfo()`.
    pub fn info(&self) -> JsValue {
        let s = self.inner.borrow();
        s.target().inspect(&self.window, &s.inspect())
    }
}
