// Host-side tests for header styling, scroll reveal and anchor targets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod header {
        include!("../src/core/header.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use site::header::*;
use site::nav::fragment_target;
use site::reveal::RevealTracker;

#[test]
fn header_style_switches_above_threshold() {
    assert_eq!(header_style(51.0), HeaderStyle::Scrolled);
    assert_eq!(header_style(0.0), HeaderStyle::Top);
    assert_eq!(header_style(50.0), HeaderStyle::Top);
    assert_eq!(header_style(50.5), HeaderStyle::Scrolled);
}

#[test]
fn header_style_ignores_scroll_history() {
    let offsets = [0.0, 400.0, 51.0, 3.0, 51.0, 0.0];
    let styles: Vec<HeaderStyle> = offsets.iter().map(|&y| header_style(y)).collect();
    assert_eq!(styles[2], styles[4]);
    assert_eq!(styles[0], styles[5]);
}

#[test]
fn header_declarations_match_variants() {
    assert_eq!(
        HeaderStyle::Scrolled.declarations(),
        [
            ("background", "rgba(255, 255, 255, 0.9)"),
            ("box-shadow", "var(--shadow-sm)"),
            ("backdrop-filter", "blur(20px)"),
        ]
    );
    assert_eq!(
        HeaderStyle::Top.declarations(),
        [
            ("background", "rgba(255, 255, 255, 0.8)"),
            ("box-shadow", "none"),
            ("backdrop-filter", "blur(16px)"),
        ]
    );
}

#[test]
fn reveal_fires_once_when_threshold_crossed() {
    let mut t = RevealTracker::new();
    t.observe(0u32);
    assert!(!t.on_entry(&0, true, 0.10));
    assert!(t.is_pending(&0));
    assert!(t.on_entry(&0, true, 0.15));
    assert!(!t.is_pending(&0));
    // leaving and re-entering does nothing
    for ratio in [0.0, 0.5, 1.0, 0.2] {
        assert!(!t.on_entry(&0, ratio > 0.0, ratio));
    }
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn reveal_requires_intersection() {
    let mut t = RevealTracker::new();
    t.observe(3u32);
    assert!(!t.on_entry(&3, false, 0.9));
    assert!(t.on_entry(&3, true, 0.9));
}

#[test]
fn reveal_tracks_elements_independently() {
    let mut t = RevealTracker::new();
    for id in 0..3u32 {
        t.observe(id);
    }
    assert!(t.on_entry(&1, true, 0.3));
    assert!(t.is_pending(&0) && t.is_pending(&2));
    assert!(t.on_entry(&2, true, 1.0));
    assert!(!t.on_entry(&1, true, 1.0));
    assert_eq!(t.revealed_count(), 2);
}

#[test]
fn reveal_ignores_unobserved_targets() {
    let mut t = RevealTracker::new();
    t.observe(1u32);
    assert!(!t.on_entry(&42, true, 1.0));
    assert!(!t.is_pending(&42));
    assert_eq!(t.revealed_count(), 0);
}

#[derive(Debug, PartialEq)]
struct Section(&'static str);

#[test]
fn reveal_matches_targets_by_equality() {
    let mut t = RevealTracker::new();
    t.observe(Section("about"));
    t.observe(Section("features"));
    // a second observe of the same target does not add another slot
    t.observe(Section("about"));
    assert!(t.on_entry(&Section("features"), true, 0.5));
    assert!(t.on_entry(&Section("about"), true, 0.5));
    assert!(!t.on_entry(&Section("about"), true, 0.5));
    assert_eq!(t.revealed_count(), 2);
}

#[test]
fn fragment_target_accepts_only_ids() {
    assert_eq!(fragment_target("#contact"), Some("#contact"));
    assert_eq!(fragment_target("#about-us"), Some("#about-us"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target(""), None);
    assert_eq!(fragment_target("/page#x"), None);
    assert_eq!(fragment_target("# x"), None);
}
