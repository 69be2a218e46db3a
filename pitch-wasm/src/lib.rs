use pitch::PitchSizer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
mod api;
mod dom;
mod error;
mod interop;

pub use api::{compute_sizing, compute_sizing_res, install, install_res, set_panic_hook};
pub use dom::{DomViewport, ElementStyle};

type DomSizer = PitchSizer<DomViewport, ElementStyle>;

/// Handle to an installed sizer; listeners stay registered for the page lifetime.
#[wasm_bindgen]
pub struct Pitch {
    pub(crate) inner: Rc<RefCell<DomSizer>>,
    pub(crate) window: web_sys::Window,
}
