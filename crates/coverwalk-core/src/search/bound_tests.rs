//! Tests for the shared best-bound tracker.

use std::sync::Arc;

use super::bound::SharedBest;
use crate::model::{Edge, Vertex, Walk};

fn v(label: &str) -> Vertex {
    Vertex::new(label).unwrap()
}

fn walk_of(edges: Vec<Edge>) -> Walk {
    Walk::from_edges(edges).unwrap()
}

fn e(a: &str, b: &str, weight: u64) -> Edge {
    Edge::new(v(a), v(b), weight)
}

#[test]
fn test_initial_bound() {
    let best = SharedBest::new(42);
    assert_eq!(best.current_min(), 42);
    assert_eq!(best.recorded(), 0);
    assert!(best.into_best().is_none());
}

#[test]
fn test_record_tightens_minimum() {
    let best = SharedBest::new(100);
    best.record(walk_of(vec![e("A", "B", 7)]));
    assert_eq!(best.current_min(), 7);

    // A worse walk is logged but never loosens the bound.
    best.record(walk_of(vec![e("A", "B", 9)]));
    assert_eq!(best.current_min(), 7);
    assert_eq!(best.recorded(), 2);
}

#[test]
fn test_into_best_selects_minimum_weight() {
    let best = SharedBest::new(100);
    best.record(walk_of(vec![e("A", "B", 5)]));
    best.record(walk_of(vec![e("A", "C", 3)]));
    best.record(walk_of(vec![e("A", "D", 8)]));

    let winner = best.into_best().unwrap();
    assert_eq!(winner.weight(), 3);
}

#[test]
fn test_into_best_breaks_ties_by_rendering() {
    let best = SharedBest::new(100);
    best.record(walk_of(vec![e("A", "C", 4)]));
    best.record(walk_of(vec![e("A", "B", 4)]));

    // Equal weight: the lexicographically smaller rendering wins.
    let winner = best.into_best().unwrap();
    assert_eq!(winner.to_string(), "AB4");
}

#[test]
fn test_concurrent_records() {
    let best = Arc::new(SharedBest::new(1000));
    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            let best = Arc::clone(&best);
            std::thread::spawn(move || {
                best.record(walk_of(vec![e("A", "B", i * 10)]));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(best.current_min(), 10);
    assert_eq!(best.recorded(), 8);
}
