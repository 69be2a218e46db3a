//! Event-driven driver: reads the viewport from a provider, computes, and
//! writes the result to a style target.

use crate::config::SizingConfig;
use crate::model::{SizingResult, ViewportSize};
use crate::sizing::compute;
use crate::style::StyleSheet;
use serde::Serialize;

/// Supplies the current viewport size (window inner size in a browser).
pub trait ViewportSource {
    fn viewport(&self) -> ViewportSize;
}

/// Side-effecting half: receives the computed presentation values.
pub trait StyleTarget {
    fn set_property(&self, name: &str, value: &str);
    fn set_transform(&self, transform: &str, origin: &str);
}

impl<F: Fn() -> ViewportSize> ViewportSource for F {
    fn viewport(&self) -> ViewportSize {
        self()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingEvent {
    Load,
    Resize,
    OrientationChange,
}

impl SizingEvent {
    /// DOM event name, `None` for the eager startup pass.
    pub fn dom_name(self) -> Option<&'static str> {
        match self {
            SizingEvent::Load => None,
            SizingEvent::Resize => Some("resize"),
            SizingEvent::OrientationChange => Some("orientationchange"),
        }
    }
}

/// Read-only snapshot of what was last applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    pub logical_width: String,
    pub logical_height: String,
    pub marking_width: String,
    pub center_circle_size: String,
    pub border: String,
    pub transform: String,
}

impl Inspection {
    fn from_sheet(sheet: &StyleSheet) -> Self {
        use crate::style::*;
        let get = |name| sheet.get(name).unwrap_or_default().to_string();
        Self {
            logical_width: get(PROP_WIDTH),
            logical_height: get(PROP_HEIGHT),
            marking_width: get(PROP_MARKING),
            center_circle_size: get(PROP_CENTER_FEATURE),
            border: get(PROP_BORDER),
            transform: sheet.transform.clone(),
        }
    }
}

pub struct PitchSizer<V, T> {
    config: SizingConfig,
    viewport: V,
    target: T,
    last: SizingResult,
}

impl<V: ViewportSource, T: StyleTarget> PitchSizer<V, T> {
    /// Returns `None` without computing anything when there is no target.
    /// Otherwise performs the initial sizing pass before returning.
    pub fn attach(config: SizingConfig, viewport: V, target: Option<T>) -> Option<Self> {
        let target = target?;
        let mut sizer = Self { config, viewport, target, last: SizingResult::default() };
        sizer.handle(SizingEvent::Load);
        Some(sizer)
    }

    pub fn handle(&mut self, _event: SizingEvent) -> SizingResult {
        self.refresh()
    }

    /// Recompute from the current viewport and re-apply every property.
    pub fn refresh(&mut self) -> SizingResult {
        let result = compute(&self.config, self.viewport.viewport());
        let sheet = StyleSheet::from_result(&result);
        for (name, value) in sheet.iter() {
            self.target.set_property(name, value);
        }
        self.target.set_transform(&sheet.transform, sheet.transform_origin);
        self.last = result;
        result
    }

    pub fn last(&self) -> SizingResult {
        self.last
    }

    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn inspect(&self) -> Inspection {
        Inspection::from_sheet(&StyleSheet::from_result(&self.last))
    }
}
