//! Core data model for the two-circle diagram.
//!
//! A diagram holds at most two circles. The first one created is the
//! "self" circle and the second the "nature" circle; the label is derived
//! from the position in [`CircleStore`] and is never stored on the circle.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::distance;

/// Maximum number of circles in a diagram.
pub const MAX_CIRCLES: usize = 2;

/// A point in canvas bitmap pixels, measured from the top-left of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fill colour token picked before a circle is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircleColor {
    /// Semi-transparent yellow.
    #[default]
    SelfColor,
    /// Semi-transparent green.
    NatureColor,
}

impl CircleColor {
    /// The token name used by the colour controls.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::SelfColor => "self-color",
            Self::NatureColor => "nature-color",
        }
    }
}

/// Role of a circle, derived from its index in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleLabel {
    SelfCircle,
    NatureCircle,
}

impl CircleLabel {
    /// Label for the circle at `index`, or `None` past the capacity.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::SelfCircle),
            1 => Some(Self::NatureCircle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    /// Never negative; starts at 0 while the circle is being sized.
    pub radius: f64,
    pub color: CircleColor,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f64, color: CircleColor) -> Self {
        Self { center, radius, color }
    }

    /// Strictly inside: a point on the rim does not count, so a zero-radius circle contains nothing.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        distance(self.center, p) < self.radius
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("diagram already holds {capacity} circles")]
    CapacityExceeded { capacity: usize },
}

/// Ordered collection of at most [`MAX_CIRCLES`] circles.
///
/// Insertion order is fixed; only the most recent circle can be removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircleStore {
    circles: Vec<Circle>,
}

impl CircleStore {
    #[must_use]
    pub fn new() -> Self {
        Self { circles: Vec::with_capacity(MAX_CIRCLES) }
    }

    /// Append a circle and return its index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CapacityExceeded`] when the store is full; the store is left unchanged.
    pub fn append(&mut self, circle: Circle) -> Result<usize, StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded { capacity: MAX_CIRCLES });
        }
        self.circles.push(circle);
        Ok(self.circles.len() - 1)
    }

    /// Remove and return the most recently created circle.
    pub fn pop_last(&mut self) -> Option<Circle> {
        self.circles.pop()
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Circle> {
        self.circles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Circle> {
        self.circles.get_mut(index)
    }

    /// Index of the first circle (in creation order) that strictly contains `p`.
    #[must_use]
    pub fn find_containing(&self, p: Point) -> Option<usize> {
        self.circles.iter().position(|c| c.contains(p))
    }

    #[must_use]
    pub fn all(&self) -> &[Circle] {
        &self.circles
    }

    /// Circles paired with their derived labels, in creation order.
    pub fn labeled(&self) -> impl Iterator<Item = (CircleLabel, &Circle)> {
        self.circles
            .iter()
            .enumerate()
            .filter_map(|(i, c)| CircleLabel::from_index(i).map(|label| (label, c)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.circles.len() >= MAX_CIRCLES
    }
}
