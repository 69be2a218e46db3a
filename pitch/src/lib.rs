//! Fit-to-viewport sizing for a single fixed-aspect panel.
//!
//! [`sizing::compute`] is the pure core; [`session::PitchSizer`] drives it from
//! viewport events and writes the [`style`] contract to a host target.

pub mod config;
pub mod limits;
pub mod model;
pub mod session;
pub mod sizing;
pub mod style;

pub use config::{ConfigError, MarkingRules, SizingConfig};
pub use model::{Proportion, SizingResult, ViewportSize};
pub use session::{Inspection, PitchSizer, SizingEvent, StyleTarget, ViewportSource};
pub use sizing::compute;
pub use style::StyleSheet;
