//! Numbers shown beside the canvas.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use crate::geometry::{circle_area, overlap};
use crate::model::CircleStore;

/// Raw metrics for the current diagram. Values that need a missing circle are 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub nature_area: f64,
    pub self_area: f64,
    /// `nature_area / self_area`, 0 when the self circle has no area.
    pub area_ratio: f64,
    pub overlap_area: f64,
    pub overlap_ratio: f64,
    pub distance: f64,
}

impl Metrics {
    #[must_use]
    pub fn from_store(store: &CircleStore) -> Self {
        let mut m = Self::default();
        match store.all() {
            [] => {}
            [first] => m.self_area = circle_area(first.radius),
            [first, second, ..] => {
                let o = overlap(first, second);
                m.self_area = circle_area(first.radius);
                m.nature_area = circle_area(second.radius);
                m.overlap_area = o.area;
                m.overlap_ratio = o.ratio;
                m.distance = o.distance;
            }
        }
        if m.self_area > 0.0 {
            m.area_ratio = m.nature_area / m.self_area;
        }
        m
    }

    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            nature_area: fixed2(self.nature_area),
            self_area: fixed2(self.self_area),
            area_ratio: fixed2(self.area_ratio),
            overlap_area: fixed2(self.overlap_area),
            overlap_ratio: fixed2(self.overlap_ratio),
            distance: fixed2(self.distance),
        }
    }
}

/// The six display strings, each with exactly two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub nature_area: String,
    pub self_area: String,
    pub area_ratio: String,
    pub overlap_area: String,
    pub overlap_ratio: String,
    pub distance: String,
}

impl Default for Readout {
    fn default() -> Self {
        Metrics::default().readout()
    }
}

impl Readout {
    /// `(label, value)` rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Nature area", self.nature_area.as_str()),
            ("Self area", self.self_area.as_str()),
            ("Area ratio (nature / self)", self.area_ratio.as_str()),
            ("Overlap area", self.overlap_area.as_str()),
            ("Overlap ratio", self.overlap_ratio.as_str()),
            ("Center distance", self.distance.as_str()),
        ]
    }
}

fn fixed2(v: f64) -> String {
    if !v.is_finite() {
        return "0.00".into();
    }
    let s = format!("{v:.2}");
    // Tiny negatives would otherwise print as "-0.00".
    if s == "-0.00" { "0.00".into() } else { s }
}
