use js_sys::Object;
use wasm_bindgen::JsValue;
use web_sys::DomRect;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(k), v);
}

pub fn set_str(obj: &Object, k: &str, v: &str) { set_kv(obj, k, &JsValue::from_str(v)); }

pub fn set_f64(obj: &Object, k: &str, v: f64) { set_kv(obj, k, &JsValue::from_f64(v)); }

pub fn rect_obj(r: &DomRect) -> Object {
    let o = new_obj();
    set_f64(&o, "x", r.x());
    set_f64(&o, "y", r.y());
    set_f64(&o, "width", r.width());
    set_f64(&o, "height", r.height());
    set_f64(&o, "top", r.top());
    set_f64(&o, "right", r.right());
    set_f64(&o, "bottom", r.bottom());
    set_f64(&o, "left", r.left());
    o
}
