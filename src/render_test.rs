#![allow(clippy::float_cmp)]

use super::*;
use crate::model::{Circle, CircleColor};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Disc { center: Point, radius: f64, fill: String },
    Text { text: String, at: Point },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_disc(&mut self, center: Point, radius: f64, fill: &str) {
        self.ops.push(Op::Disc { center, radius, fill: fill.to_string() });
    }

    fn fill_text(&mut self, text: &str, at: Point, _font: &str, _fill: &str) {
        self.ops.push(Op::Text { text: text.to_string(), at });
    }
}

fn store_with(circles: &[(f64, f64, f64, CircleColor)]) -> CircleStore {
    let mut store = CircleStore::new();
    for &(x, y, r, color) in circles {
        assert!(store.append(Circle::new(Point::new(x, y), r, color)).is_ok());
    }
    store
}

#[test]
fn empty_store_only_clears() {
    let mut rec = Recorder::default();
    redraw(&mut rec, &CircleStore::new(), &EditorConfig::default());
    assert_eq!(rec.ops, vec![Op::Clear]);
}

#[test]
fn each_circle_gets_disc_dot_and_label() {
    let cfg = EditorConfig::default();
    let store = store_with(&[
        (100.0, 100.0, 50.0, CircleColor::SelfColor),
        (300.0, 300.0, 30.0, CircleColor::NatureColor),
    ]);
    let mut rec = Recorder::default();
    redraw(&mut rec, &store, &cfg);
    assert_eq!(
        rec.ops,
        vec![
            Op::Clear,
            Op::Disc { center: Point::new(100.0, 100.0), radius: 50.0, fill: cfg.self_fill.clone() },
            Op::Disc { center: Point::new(100.0, 100.0), radius: 3.0, fill: "black".into() },
            Op::Text { text: "self".into(), at: Point::new(100.0, 165.0) },
            Op::Disc { center: Point::new(300.0, 300.0), radius: 30.0, fill: cfg.nature_fill.clone() },
            Op::Disc { center: Point::new(300.0, 300.0), radius: 3.0, fill: "black".into() },
            Op::Text { text: "nature".into(), at: Point::new(300.0, 345.0) },
        ]
    );
}

#[test]
fn label_follows_position_not_color() {
    let store = store_with(&[
        (0.0, 0.0, 10.0, CircleColor::NatureColor),
        (50.0, 0.0, 10.0, CircleColor::SelfColor),
    ]);
    let mut rec = Recorder::default();
    redraw(&mut rec, &store, &EditorConfig::default());
    let texts: Vec<String> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["self".to_string(), "nature".to_string()]);
}

#[test]
fn redraw_uses_configured_labels_and_offset() {
    let cfg = EditorConfig { self_label: "me".into(), label_offset: 5.0, ..EditorConfig::default() };
    let store = store_with(&[(10.0, 10.0, 0.0, CircleColor::SelfColor)]);
    let mut rec = Recorder::default();
    redraw(&mut rec, &store, &cfg);
    assert_eq!(rec.ops.last(), Some(&Op::Text { text: "me".into(), at: Point::new(10.0, 15.0) }));
}

#[test]
fn redraw_is_idempotent() {
    let store = store_with(&[(10.0, 10.0, 4.0, CircleColor::SelfColor)]);
    let cfg = EditorConfig::default();
    let mut a = Recorder::default();
    let mut b = Recorder::default();
    redraw(&mut a, &store, &cfg);
    redraw(&mut b, &store, &cfg);
    redraw(&mut b, &store, &cfg);
    assert_eq!(b.ops[b.ops.len() - a.ops.len()..], a.ops[..]);
}
