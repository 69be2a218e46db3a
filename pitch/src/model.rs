use serde::{Deserialize, Serialize};

/// Current viewport dimensions in CSS px, supplied per computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Output of one sizing pass. Recomputed on every event and replaces the
/// previous value wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingResult {
    pub logical_width: f64,
    pub logical_height: f64,
    /// Uniform presentation scale, never above 1.
    pub scale: f64,
    pub marking_width: f64,
    pub center_feature_size: f64,
    pub border_width: f64,
}

/// Ratio of logical width with a visibility floor (px).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proportion {
    pub ratio: f64,
    pub min: f64,
}

impl Proportion {
    pub const fn new(ratio: f64, min: f64) -> Self {
        Self { ratio, min }
    }

    /// `max(min, round(logical_width * ratio))`
    #[inline]
    pub fn measure(&self, logical_width: f64) -> f64 {
        // f64::round rounds half away from zero; inputs here are non-negative.
        self.min.max((logical_width * self.ratio).round())
    }
}
