//! Editing session: the diagram, the active gesture and the creation colour.
//!
//! A `Session` is created empty with the view and dropped with it. Every
//! method runs to completion; callers redraw after a call that returns `true`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::model::{CircleColor, CircleStore, Point};
use crate::state::GestureState;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub store: CircleStore,
    pub gesture: GestureState,
    pub color: CircleColor,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self { store: CircleStore::new(), ..Self::default() }
    }

    /// Colour for the next circle created. Existing circles keep theirs.
    pub fn select_color(&mut self, color: CircleColor) {
        if self.color != color {
            log::info!("creation colour set to {}", color.token());
        }
        self.color = color;
    }

    /// Remove the most recent circle. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(removed) = self.store.pop_last() else {
            log::debug!("undo ignored: no circles");
            return false;
        };
        log::info!("undo: removed circle at ({}, {})", removed.center.x, removed.center.y);
        self.gesture.forget_removed(&self.store);
        true
    }

    /// Drop every circle and any gesture in progress.
    pub fn reset(&mut self) -> bool {
        let had_circles = !self.store.is_empty();
        self.store.clear();
        self.gesture = GestureState::Idle;
        if had_circles {
            log::info!("diagram reset");
        }
        had_circles
    }

    pub fn touch_start(&mut self, points: &[Point]) -> bool {
        self.gesture.touch_start(&mut self.store, self.color, points)
    }

    pub fn touch_move(&mut self, points: &[Point]) -> bool {
        self.gesture.touch_move(&mut self.store, points)
    }

    pub fn touch_end(&mut self, remaining: usize) {
        self.gesture.touch_end(remaining);
    }
}
