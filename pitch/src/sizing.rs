use crate::config::SizingConfig;
use crate::model::{SizingResult, ViewportSize};

/// Space left for the panel along one viewport axis once the margin is reserved.
#[inline]
pub fn available_extent(len: f64, margin: f64) -> f64 {
    (len * margin).floor()
}

/// Uniform fit scale; shrinks to fit, never grows past 1.
#[inline]
pub fn fit_scale(avail_w: f64, avail_h: f64, logical_w: f64, logical_h: f64) -> f64 {
    let sx = avail_w / logical_w;
    let sy = avail_h / logical_h;
    1.0f64.min(sx).min(sy)
}

/// Computes the sizing record for one viewport.
///
/// Total and pure: a 0-sized viewport yields scale 0 rather than an error.
/// Secondary measurements follow the logical width, not the scaled one; the
/// transform shrinks them together with the rest of the panel.
pub fn compute(config: &SizingConfig, viewport: ViewportSize) -> SizingResult {
    let logical_width = config.logical_width();
    let logical_height = config.logical_height();

    let avail_w = available_extent(viewport.width, config.viewport_margin);
    let avail_h = available_extent(viewport.height, config.viewport_margin);
    let scale = fit_scale(avail_w, avail_h, logical_width, logical_height);

    let m = &config.markings;
    SizingResult {
        logical_width,
        logical_height,
        scale,
        marking_width: m.marking.measure(logical_width),
        center_feature_size: m.center_feature.measure(logical_width),
        border_width: m.border.measure(logical_width),
    }
}
