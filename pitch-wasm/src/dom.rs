use crate::interop::{new_obj, rect_obj, set_kv, set_str};
use js_sys::Object;
use pitch::{Inspection, StyleTarget, ViewportSize, ViewportSource};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

/// Viewport backed by `window.innerWidth` / `window.innerHeight`.
pub struct DomViewport {
    window: Window,
}

impl DomViewport {
    pub fn new(window: Window) -> Self { Self { window } }
}

fn px_len(v: Result<JsValue, JsValue>) -> f64 {
    v.ok().and_then(|x| x.as_f64()).unwrap_or(0.0)
}

impl ViewportSource for DomViewport {
    fn viewport(&self) -> ViewportSize {
        ViewportSize::new(px_len(self.window.inner_width()), px_len(self.window.inner_height()))
    }
}

/// Writes custom properties and the transform to the element's inline style.
pub struct ElementStyle {
    pub(crate) el: HtmlElement,
}

impl ElementStyle {
    pub fn new(el: HtmlElement) -> Self { Self { el } }

    /// Looks the element up by id; `None` when absent or not an HTML element.
    pub fn by_id(window: &Window, id: &str) -> Option<Self> {
        let doc = window.document()?;
        let el = doc.get_element_by_id(id)?;
        el.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    /// Last applied values plus the element's bounding rect and its
    /// resolved transform (falls back to the inline one).
    pub fn inspect(&self, window: &Window, applied: &Inspection) -> JsValue {
        let o: Object = serde_wasm_bindgen::to_value(applied)
            .map(|v| v.unchecked_into::<Object>())
            .unwrap_or_else(|_| new_obj());
        set_kv(&o, "clientRect", &rect_obj(&self.el.get_bounding_client_rect()).into());
        let computed = window
            .get_computed_style(&self.el)
            .ok()
            .flatten()
            .and_then(|cs| cs.get_property_value("transform").ok())
            .filter(|v| !v.is_empty());
        if let Some(t) = computed {
            set_str(&o, "transform", &t);
        }
        o.into()
    }
}

impl StyleTarget for ElementStyle {
    fn set_property(&self, name: &str, value: &str) {
        let _ = self.el.style().set_property(name, value);
    }

    fn set_transform(&self, transform: &str, origin: &str) {
        let style = self.el.style();
        let _ = style.set_property("transform", transform);
        let _ = style.set_property("transform-origin", origin);
    }
}
