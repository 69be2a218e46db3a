//! Presentation contract: the CSS custom properties and transform written to
//! the panel element for a given [`SizingResult`].

use crate::model::SizingResult;

pub const PROP_WIDTH: &str = "--pitch-w";
pub const PROP_HEIGHT: &str = "--pitch-h";
pub const PROP_MARKING: &str = "--marking-width";
pub const PROP_CENTER_FEATURE: &str = "--center-circle-size";
pub const PROP_BORDER: &str = "--border";

/// Custom properties in application order.
pub const LENGTH_PROPERTIES: [&str; 5] = [PROP_WIDTH, PROP_HEIGHT, PROP_MARKING, PROP_CENTER_FEATURE, PROP_BORDER];

/// Scale is anchored at the panel center so it stays centered while shrinking.
pub const TRANSFORM_ORIGIN: &str = "center center";

/// `1260` -> `"1260px"`, `2739.1304347826085` -> `"2739.1304347826085px"`.
/// Shortest round-trip digits, always positional (no exponent form).
pub fn px(v: f64) -> String {
    format!("{}px", v)
}

pub fn scale_transform(scale: f64) -> String {
    format!("scale({})", scale)
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    /// `(property, value)` pairs, see [`LENGTH_PROPERTIES`].
    pub properties: Vec<(&'static str, String)>,
    pub transform: String,
    pub transform_origin: &'static str,
}

impl StyleSheet {
    pub fn from_result(r: &SizingResult) -> Self {
        let values = [r.logical_width, r.logical_height, r.marking_width, r.center_feature_size, r.border_width];
        let properties = LENGTH_PROPERTIES.iter().zip(values).map(|(name, v)| (*name, px(v))).collect();
        Self { properties, transform: scale_transform(r.scale), transform_origin: TRANSFORM_ORIGIN }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.properties.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(px(1260.0), "1260px");
        assert_eq!(px(2.5), "2.5px");
        assert_eq!(scale_transform(1.0), "scale(1)");
    }

    #[test]
    fn tiny_scale_stays_positional() {
        let t = scale_transform(4.6e-9);
        assert_eq!(t, "scale(0.0000000046)");
        assert!(!t.contains("e-"));
    }

    #[test]
    fn sheet_orders_properties() {
        let r = SizingResult {
            logical_width: 1260.0,
            logical_height: 2000.0,
            scale: 0.5,
            marking_width: 3.0,
            center_feature_size: 139.0,
            border_width: 6.0,
        };
        let s = StyleSheet::from_result(&r);
        let names: Vec<_> = s.iter().map(|(n, _)| n).collect();
        assert_eq!(names, LENGTH_PROPERTIES.to_vec());
        assert_eq!(s.get(PROP_CENTER_FEATURE), Some("139px"));
        assert_eq!(s.get("--missing"), None);
        assert_eq!(s.transform, "scale(0.5)");
        assert_eq!(s.transform_origin, "center center");
    }
}
