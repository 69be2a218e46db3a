// Centralized bounds for configuration values (JSON / JS objects)

// Logical size caps (px)
pub const BASE_WIDTH_MAX: f64 = 100_000.0;
pub const MULTIPLIER_MAX: f64 = 1_000.0;

// Aspect ratio is width / height; the floor keeps logical height finite
pub const ASPECT_RATIO_MIN: f64 = 1e-3;
pub const ASPECT_RATIO_MAX: f64 = 1e3;

// Margin is a fraction of the viewport, (0, 1]
pub const MARGIN_MAX: f64 = 1.0;

// Secondary measurements
pub const RATIO_MAX: f64 = 1.0;
pub const MIN_PX_MAX: f64 = 10_000.0;

#[inline]
pub fn in_positive_bounds(x: f64, max: f64) -> bool { x.is_finite() && x > 0.0 && x <= max }

#[inline]
pub fn in_range_bounds(x: f64, min: f64, max: f64) -> bool { x.is_finite() && x >= min && x <= max }

#[inline]
pub fn in_margin_bounds(m: f64) -> bool { m.is_finite() && m > 0.0 && m <= MARGIN_MAX }

#[inline]
pub fn in_nonneg_bounds(x: f64, max: f64) -> bool { x.is_finite() && x >= 0.0 && x <= max }
