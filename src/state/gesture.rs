//! Touch gesture state machine.
//!
//! One finger either draws a new circle (the centre stays put and the radius
//! follows the finger) or drags an existing one. Two fingers resize the
//! circle picked by the preceding one-finger touch, scaling its radius by the
//! change in finger separation since the previous move.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::distance;
use crate::model::{Circle, CircleColor, CircleStore, Point};

/// What a one-finger gesture does to its circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Newly created circle; moves set the radius.
    Sizing,
    /// Existing circle; moves set the centre.
    Moving,
}

/// Active gesture. Circles are referenced by their index in the store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Single {
        index: usize,
        phase: Phase,
    },
    Pinch {
        index: usize,
        /// Finger separation at the previous two-finger event.
        baseline: f64,
    },
}

impl GestureState {
    /// Index of the circle under manipulation, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Single { index, .. } | Self::Pinch { index, .. } => Some(index),
        }
    }

    /// Fingers went down. Returns `true` when the store was mutated.
    pub fn touch_start(&mut self, store: &mut CircleStore, color: CircleColor, points: &[Point]) -> bool {
        match points {
            [p] => self.single_start(store, color, *p),
            [a, b] => {
                self.pinch_start(store, distance(*a, *b));
                false
            }
            _ => false,
        }
    }

    /// Fingers moved. Returns `true` when the store was mutated.
    pub fn touch_move(&mut self, store: &mut CircleStore, points: &[Point]) -> bool {
        match points {
            [p] => self.single_move(store, *p),
            [a, b] => self.pinch_move(store, distance(*a, *b)),
            _ => false,
        }
    }

    /// Fingers lifted; `remaining` is how many are still down.
    ///
    /// Only the last finger leaving ends the gesture. Lifting one finger of a
    /// pinch keeps the pinch and its baseline.
    pub fn touch_end(&mut self, remaining: usize) {
        if remaining > 0 {
            return;
        }
        if *self != Self::Idle {
            log::debug!("gesture ended: {self:?}");
        }
        *self = Self::Idle;
    }

    /// Drop the selection if it points past the end of the store.
    pub fn forget_removed(&mut self, store: &CircleStore) {
        if self.selected().is_some_and(|i| i >= store.len()) {
            *self = Self::Idle;
        }
    }

    fn single_start(&mut self, store: &mut CircleStore, color: CircleColor, p: Point) -> bool {
        if let Some(index) = store.find_containing(p) {
            log::debug!("grab circle {index} at ({}, {})", p.x, p.y);
            *self = Self::Single { index, phase: Phase::Moving };
            return false;
        }
        match store.append(Circle::new(p, 0.0, color)) {
            Ok(index) => {
                log::debug!("create circle {index} at ({}, {})", p.x, p.y);
                *self = Self::Single { index, phase: Phase::Sizing };
                true
            }
            Err(e) => {
                log::debug!("touch at ({}, {}) ignored: {e}", p.x, p.y);
                *self = Self::Idle;
                false
            }
        }
    }

    fn single_move(&mut self, store: &mut CircleStore, q: Point) -> bool {
        let Self::Single { index, phase } = *self else {
            return false;
        };
        let Some(circle) = store.get_mut(index) else {
            return false;
        };
        match phase {
            Phase::Sizing => circle.radius = distance(circle.center, q),
            Phase::Moving => circle.center = q,
        }
        true
    }

    fn pinch_start(&mut self, store: &CircleStore, separation: f64) {
        match self.selected().filter(|&i| store.get(i).is_some()) {
            Some(index) => {
                log::debug!("pinch on circle {index}, baseline {separation}");
                *self = Self::Pinch { index, baseline: separation };
            }
            None => log::debug!("pinch ignored: no circle selected"),
        }
    }

    fn pinch_move(&mut self, store: &mut CircleStore, separation: f64) -> bool {
        let Self::Pinch { index, baseline } = self else {
            return false;
        };
        let previous = *baseline;
        *baseline = separation;
        if !(previous > 0.0 && previous.is_finite() && separation.is_finite()) {
            log::debug!("pinch re-baselined from {previous}");
            return false;
        }
        let Some(circle) = store.get_mut(*index) else {
            return false;
        };
        let radius = circle.radius * (separation / previous);
        if !radius.is_finite() {
            return false;
        }
        circle.radius = radius;
        true
    }
}
