use crate::limits;
use crate::model::Proportion;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const DEFAULT_BASE_WIDTH: f64 = 420.0; // px, width of one pitch
pub const DEFAULT_MULTIPLIER: f64 = 3.0;
pub const DEFAULT_ASPECT_RATIO: f64 = 0.46; // width / height
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 0.98;

pub const DEFAULT_MARKING: Proportion = Proportion::new(0.0025, 1.0); // ~3px at 1200px
pub const DEFAULT_CENTER_FEATURE: Proportion = Proportion::new(0.11, 90.0);
pub const DEFAULT_BORDER: Proportion = Proportion::new(0.0045, 4.0);

/// Proportions used for the secondary measurements.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MarkingRules {
    pub marking: Proportion,
    pub center_feature: Proportion,
    pub border: Proportion,
}

impl Default for MarkingRules {
    fn default() -> Self {
        Self { marking: DEFAULT_MARKING, center_feature: DEFAULT_CENTER_FEATURE, border: DEFAULT_BORDER }
    }
}

/// Immutable sizing parameters. Build once and pass by reference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SizingConfig {
    pub base_width: f64,
    pub multiplier: f64,
    pub aspect_ratio: f64,
    pub viewport_margin: f64,
    pub markings: MarkingRules,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            multiplier: DEFAULT_MULTIPLIER,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
            markings: MarkingRules::default(),
        }
    }
}

/// Error type for configuration ingestion
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Value is NaN or infinite
    NonFinite { param: &'static str },
    /// Value outside its accepted range
    OutOfRange { param: &'static str, min: f64, max: f64, got: f64 },
    /// Malformed JSON or unknown fields
    Parse(String),
}

impl ConfigError {
    /// Stable machine-readable code, shared with the JS result envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NonFinite { .. } => "non_finite",
            ConfigError::OutOfRange { .. } => "out_of_range",
            ConfigError::Parse(_) => "invalid_config",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { param } => write!(f, "parameter '{}' must be finite", param),
            ConfigError::OutOfRange { param, min, max, got } => {
                write!(f, "parameter '{}' out of range [{}, {}]: {}", param, min, max, got)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

fn check(param: &'static str, got: f64, min: f64, max: f64, ok: bool) -> Result<(), ConfigError> {
    if !got.is_finite() {
        return Err(ConfigError::NonFinite { param });
    }
    if !ok {
        return Err(ConfigError::OutOfRange { param, min, max, got });
    }
    Ok(())
}

fn check_proportion(ratio_param: &'static str, min_param: &'static str, p: &Proportion) -> Result<(), ConfigError> {
    check(ratio_param, p.ratio, 0.0, limits::RATIO_MAX, limits::in_nonneg_bounds(p.ratio, limits::RATIO_MAX))?;
    check(min_param, p.min, 0.0, limits::MIN_PX_MAX, limits::in_nonneg_bounds(p.min, limits::MIN_PX_MAX))
}

impl SizingConfig {
    /// Logical panel width; the panel never shrinks below it, only its presentation does.
    #[inline]
    pub fn logical_width(&self) -> f64 {
        self.base_width * self.multiplier
    }

    #[inline]
    pub fn logical_height(&self) -> f64 {
        self.logical_width() / self.aspect_ratio
    }

    /// Reports the first violated bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("baseWidth", self.base_width, 0.0, limits::BASE_WIDTH_MAX,
            limits::in_positive_bounds(self.base_width, limits::BASE_WIDTH_MAX))?;
        check("multiplier", self.multiplier, 0.0, limits::MULTIPLIER_MAX,
            limits::in_positive_bounds(self.multiplier, limits::MULTIPLIER_MAX))?;
        check("aspectRatio", self.aspect_ratio, limits::ASPECT_RATIO_MIN, limits::ASPECT_RATIO_MAX,
            limits::in_range_bounds(self.aspect_ratio, limits::ASPECT_RATIO_MIN, limits::ASPECT_RATIO_MAX))?;
        check("viewportMargin", self.viewport_margin, 0.0, limits::MARGIN_MAX,
            limits::in_margin_bounds(self.viewport_margin))?;
        let m = &self.markings;
        check_proportion("markings.marking.ratio", "markings.marking.min", &m.marking)?;
        check_proportion("markings.centerFeature.ratio", "markings.centerFeature.min", &m.center_feature)?;
        check_proportion("markings.border.ratio", "markings.border.min", &m.border)
    }

    pub fn from_json_value(v: Value) -> Result<Self, ConfigError> {
        let cfg: SizingConfig = serde_json::from_value(v).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let v: Value = serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_json_value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_validate() {
        let c = SizingConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.logical_width(), 1260.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = SizingConfig::from_json_value(json!({"multiplier": 2})).unwrap();
        assert_eq!(c.multiplier, 2.0);
        assert_eq!(c.base_width, DEFAULT_BASE_WIDTH);
        assert_eq!(c.markings, MarkingRules::default());
    }

    #[test]
    fn margin_above_one_is_out_of_range() {
        let c = SizingConfig { viewport_margin: 1.2, ..Default::default() };
        match c.validate() {
            Err(ConfigError::OutOfRange { param, got, .. }) => {
                assert_eq!(param, "viewportMargin");
                assert_eq!(got, 1.2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nan_is_non_finite() {
        let c = SizingConfig { aspect_ratio: f64::NAN, ..Default::default() };
        assert_eq!(c.validate(), Err(ConfigError::NonFinite { param: "aspectRatio" }));
        assert_eq!(c.validate().unwrap_err().code(), "non_finite");
    }
}
