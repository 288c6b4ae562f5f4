#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::overlap;
use crate::state::gesture::Phase;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn new_session_is_empty_and_idle() {
    let s = Session::new();
    assert!(s.store.is_empty());
    assert_eq!(s.gesture, GestureState::Idle);
    assert_eq!(s.color, CircleColor::SelfColor);
}

#[test]
fn selected_color_applies_to_next_circle_only() {
    let mut s = Session::new();
    s.touch_start(&[pt(10.0, 10.0)]);
    s.touch_end(0);
    s.select_color(CircleColor::NatureColor);
    s.touch_start(&[pt(200.0, 200.0)]);
    s.touch_end(0);
    assert_eq!(s.store.get(0).map(|c| c.color), Some(CircleColor::SelfColor));
    assert_eq!(s.store.get(1).map(|c| c.color), Some(CircleColor::NatureColor));
}

#[test]
fn undo_pops_last_circle() {
    let mut s = Session::new();
    s.touch_start(&[pt(10.0, 10.0)]);
    s.touch_end(0);
    s.touch_start(&[pt(200.0, 200.0)]);
    s.touch_end(0);
    assert!(s.undo());
    assert_eq!(s.store.len(), 1);
    assert_eq!(s.store.get(0).map(|c| c.center), Some(pt(10.0, 10.0)));
}

#[test]
fn undo_on_empty_is_ignored() {
    let mut s = Session::new();
    assert!(!s.undo());
    assert!(s.store.is_empty());
}

#[test]
fn undo_of_selected_circle_returns_to_idle() {
    let mut s = Session::new();
    s.touch_start(&[pt(10.0, 10.0)]);
    assert_eq!(s.gesture, GestureState::Single { index: 0, phase: Phase::Sizing });
    assert!(s.undo());
    assert_eq!(s.gesture, GestureState::Idle);
    assert!(!s.touch_move(&[pt(40.0, 10.0)]));
}

#[test]
fn undo_keeps_selection_of_surviving_circle() {
    let mut s = Session::new();
    s.touch_start(&[pt(100.0, 100.0)]);
    s.touch_move(&[pt(150.0, 100.0)]);
    s.touch_end(0);
    s.touch_start(&[pt(400.0, 400.0)]);
    s.touch_end(0);
    s.touch_start(&[pt(110.0, 100.0)]);
    assert!(s.undo());
    assert_eq!(s.gesture.selected(), Some(0));
}

#[test]
fn reset_clears_everything() {
    let mut s = Session::new();
    s.touch_start(&[pt(10.0, 10.0)]);
    assert!(s.reset());
    assert!(s.store.is_empty());
    assert_eq!(s.gesture, GestureState::Idle);
    assert!(!s.reset());
}

#[test]
fn undo_frees_capacity_for_new_circle() {
    let mut s = Session::new();
    s.touch_start(&[pt(10.0, 10.0)]);
    s.touch_end(0);
    s.touch_start(&[pt(300.0, 10.0)]);
    s.touch_end(0);
    assert!(!s.touch_start(&[pt(600.0, 600.0)]));
    s.touch_end(0);
    s.undo();
    assert!(s.touch_start(&[pt(600.0, 600.0)]));
    assert_eq!(s.store.len(), 2);
}

#[test]
fn draw_two_circles_end_to_end() {
    let mut s = Session::new();

    assert!(s.touch_start(&[pt(100.0, 100.0)]));
    assert_eq!(s.store.get(0).map(|c| c.radius), Some(0.0));
    assert!(s.touch_move(&[pt(150.0, 100.0)]));
    assert_eq!(s.store.get(0).map(|c| c.radius), Some(50.0));
    s.touch_end(0);

    assert!(s.touch_start(&[pt(300.0, 300.0)]));
    assert_eq!(s.store.get(1).map(|c| c.center), Some(pt(300.0, 300.0)));
    assert_eq!(s.store.get(1).map(|c| c.radius), Some(0.0));
    assert!(s.touch_move(&[pt(330.0, 300.0)]));
    assert_eq!(s.store.get(1).map(|c| c.radius), Some(30.0));
    s.touch_end(0);

    let circles = s.store.all();
    let o = overlap(&circles[0], &circles[1]);
    assert!((o.distance - 282.842_712_474_619).abs() < 1e-6);
    assert_eq!(o.area, 0.0);
    assert_eq!(o.ratio, 0.0);
}

#[test]
fn drag_then_pinch_same_circle() {
    let mut s = Session::new();
    s.touch_start(&[pt(100.0, 100.0)]);
    s.touch_move(&[pt(120.0, 100.0)]);
    s.touch_end(0);

    // First finger lands inside, second joins.
    s.touch_start(&[pt(105.0, 100.0)]);
    s.touch_start(&[pt(105.0, 100.0), pt(125.0, 100.0)]);
    assert!(s.touch_move(&[pt(105.0, 100.0), pt(145.0, 100.0)]));
    assert_eq!(s.store.get(0).map(|c| c.radius), Some(40.0));
    assert_eq!(s.store.get(0).map(|c| c.center), Some(pt(100.0, 100.0)));
    s.touch_end(0);
    assert_eq!(s.gesture, GestureState::Idle);
}

#[test]
fn lifting_one_finger_keeps_pinch_until_all_lifted() {
    let mut s = Session::new();
    s.touch_start(&[pt(100.0, 100.0)]);
    s.touch_move(&[pt(120.0, 100.0)]);
    s.touch_end(0);

    s.touch_start(&[pt(105.0, 100.0)]);
    s.touch_start(&[pt(105.0, 100.0), pt(125.0, 100.0)]);
    s.touch_end(1);
    assert_eq!(s.gesture, GestureState::Pinch { index: 0, baseline: 20.0 });

    s.touch_start(&[pt(105.0, 100.0), pt(115.0, 100.0)]);
    assert_eq!(s.gesture, GestureState::Pinch { index: 0, baseline: 10.0 });
    assert!(s.touch_move(&[pt(105.0, 100.0), pt(125.0, 100.0)]));
    assert_eq!(s.store.get(0).map(|c| c.radius), Some(40.0));

    s.touch_end(0);
    assert_eq!(s.gesture, GestureState::Idle);
}

#[test]
fn selected_color_is_read_back_from_session() {
    let mut s = Session::new();
    s.select_color(CircleColor::NatureColor);
    assert_eq!(s.color, CircleColor::NatureColor);
    s.touch_start(&[pt(50.0, 50.0)]);
    s.touch_end(0);
    assert!(s.undo());
    assert!(!s.reset());
    assert_eq!(s.color, CircleColor::NatureColor);
    s.select_color(CircleColor::NatureColor);
    assert_eq!(s.color, CircleColor::NatureColor);
}
