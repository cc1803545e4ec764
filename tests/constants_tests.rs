// Host-side tests for the DOM hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use fourier_core::DemoKind;

#[test]
fn canvas_ids_follow_tab_order() {
    let ids: Vec<String> = DemoKind::ALL.iter().map(|k| canvas_id(k.index())).collect();
    assert_eq!(ids.first().map(String::as_str), Some("canvas-0"));
    assert_eq!(ids.last().map(String::as_str), Some("canvas-7"));
}

#[test]
fn value_labels_append_suffix() {
    assert_eq!(value_label_id("epi-speed"), "epi-speed-val");
    assert_eq!(value_label_id("dft-f3"), "dft-f3-val");
}

#[test]
fn selectors_are_class_selectors() {
    assert!(TAB_SELECTOR.starts_with('.'));
    assert!(PANEL_SELECTOR.starts_with('.'));
    assert!(!ACTIVE_CLASS.starts_with('.'));
    assert!(!DRAWING_CLASS.contains(' '));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fallback_size_is_usable() {
    assert!(FALLBACK_CSS_WIDTH >= 1.0);
    assert!(FALLBACK_CSS_HEIGHT >= 1.0);
}
