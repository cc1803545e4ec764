// Host-side tests for the page-control mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use fourier_core::{
    action_for_key, Control, DemoKind, DemoManager, KeyAction, Readout, ShapePreset, SpiroPreset,
    Viewport, WaveShape,
};

#[test]
fn term_sliders_set_terms() {
    for id in ["epi-circles", "sq-harmonics", "saw-harmonics", "draw-epicycles", "shape-epicycles"] {
        assert_eq!(control_for_input(id, "12"), Some(Control::SetTerms(12)), "{id}");
    }
    assert_eq!(control_for_input("epi-circles", "3.6"), Some(Control::SetTerms(4)));
}

#[test]
fn speed_and_opacity_sliders_on_every_panel() {
    assert_eq!(control_for_input("epi-speed", "1.5"), Some(Control::SetSpeed(1.5)));
    assert_eq!(control_for_input("spiro-speed", "3"), Some(Control::SetSpeed(3.0)));
    assert_eq!(control_for_input("shape-opacity", "0.2"), Some(Control::SetOpacity(0.2)));
    assert_eq!(control_for_input("nope-speed", "1"), None);
}

#[test]
fn numbered_sliders_are_zero_based() {
    assert_eq!(
        control_for_input("dft-f1", "55"),
        Some(Control::SetBinAmplitude { bin: 0, amplitude: 55.0 })
    );
    assert_eq!(
        control_for_input("sig-f4", "9"),
        Some(Control::SetComponentFrequency { index: 3, frequency: 9.0 })
    );
    assert_eq!(
        control_for_input("sig-a2", "120"),
        Some(Control::SetComponentAmplitude { index: 1, amplitude: 120.0 })
    );
    assert_eq!(
        control_for_input("sig-p3", "-90"),
        Some(Control::SetComponentPhase { index: 2, degrees: -90.0 })
    );
    assert_eq!(control_for_input("dft-f0", "10"), None);
}

#[test]
fn checkboxes_set_overlay() {
    assert_eq!(control_for_input("sq-target", "false"), Some(Control::SetOverlay(false)));
    assert_eq!(control_for_input("spiro-circles", "true"), Some(Control::SetOverlay(true)));
    assert_eq!(control_for_input("spiro-circles", "on"), None);
}

#[test]
fn selects_parse_their_choices() {
    assert_eq!(
        control_for_input("saw-type", "triangle"),
        Some(Control::SelectWave(WaveShape::Triangle))
    );
    assert_eq!(
        control_for_input("shape-preset", "heart"),
        Some(Control::SelectShape(ShapePreset::Heart))
    );
    assert_eq!(
        control_for_input("spiro-preset", "astroid"),
        Some(Control::SelectSpiroPreset(SpiroPreset::Astroid))
    );
    assert_eq!(control_for_input("spiro-preset", "custom"), None);
}

#[test]
fn garbage_values_are_ignored() {
    assert_eq!(control_for_input("epi-speed", ""), None);
    assert_eq!(control_for_input("epi-speed", "fast"), None);
    assert_eq!(control_for_input("epi-speed", "NaN"), None);
    assert_eq!(control_for_input("unknown", "1"), None);
}

#[test]
fn buttons_map_to_controls() {
    assert_eq!(control_for_button("draw-toggle"), Some(Control::ToggleDrawing));
    assert_eq!(control_for_button("draw-clear"), Some(Control::Clear));
    assert_eq!(control_for_button("spiro-reset"), Some(Control::Reset));
    assert_eq!(control_for_button("overlay-reset"), None);
    for id in button_ids() {
        assert!(control_for_button(&id).is_some(), "{id}");
    }
}

#[test]
fn phase_labels_carry_degrees() {
    assert_eq!(value_label("sig-p1", "45"), "45\u{00B0}");
    assert_eq!(value_label("sig-a1", "45"), "45");
    assert_eq!(value_label("epi-opacity", "0.70"), "0.7");
}

#[test]
fn spiro_presets_move_all_three_sliders() {
    let values = spiro_slider_values(SpiroPreset::Flower8);
    assert_eq!(values, [("spiro-r1", 100.0), ("spiro-r2", 12.5), ("spiro-pen", 12.0)]);
}

#[test]
fn slider_events_reach_the_active_panel() {
    let mut m = DemoManager::new(Viewport::new(800.0, 600.0), DemoKind::Square);
    let control = control_for_input("sq-harmonics", "7").expect("known slider");
    assert!(m.apply(control));
    assert_eq!(m.readouts()[0], Readout::new("sq-count", "7"));
}

#[test]
fn digit_keys_pick_panels() {
    assert_eq!(action_for_key("6"), Some(KeyAction::SelectDemo(DemoKind::Explorer)));
    assert_eq!(action_for_key(" "), Some(KeyAction::Apply(Control::ToggleDrawing)));
}
