// Page controls to `Control`s.
//
// Every slider, checkbox, select and button on the page is identified by its
// element id. The active panel owns whichever control fires, so the mapping
// only has to know what kind of setter an id stands for.

use fourier_core::demos::SpiroPreset;
use fourier_core::{Control, ShapePreset, WaveShape};

use crate::constants::PHASE_LABEL_SUFFIX;

const TERM_SLIDERS: [&str; 5] = [
    "epi-circles",
    "sq-harmonics",
    "saw-harmonics",
    "draw-epicycles",
    "shape-epicycles",
];

const OVERLAY_CHECKBOXES: [&str; 5] = [
    "epi-showwave",
    "sq-target",
    "saw-target",
    "sig-components",
    "spiro-circles",
];

/// Every `<panel>-speed` / `<panel>-opacity` slider shares the setter.
const PANEL_PREFIXES: [&str; 8] = ["epi", "sq", "saw", "draw", "shape", "dft", "sig", "spiro"];

/// Control for an `input`/`change` event on `id` carrying `value`.
///
/// Checkboxes pass `"true"`/`"false"`. Unknown ids and unparsable values
/// yield `None`.
pub fn control_for_input(id: &str, value: &str) -> Option<Control> {
    if OVERLAY_CHECKBOXES.contains(&id) {
        return value.trim().parse::<bool>().ok().map(Control::SetOverlay);
    }
    match id {
        "saw-type" => return parse_choice::<WaveShape>(id, value).map(Control::SelectWave),
        "shape-preset" => return parse_choice::<ShapePreset>(id, value).map(Control::SelectShape),
        "spiro-preset" => {
            return parse_choice::<SpiroPreset>(id, value).map(Control::SelectSpiroPreset)
        }
        _ => {}
    }

    let v = parse_number(value)?;
    if TERM_SLIDERS.contains(&id) {
        return Some(Control::SetTerms(to_count(v)));
    }
    match id {
        "epi-trail" => return Some(Control::SetTrailLength(to_count(v))),
        "spiro-r1" => return Some(Control::SetFixedRadius(v)),
        "spiro-r2" => return Some(Control::SetRollingRadius(v)),
        "spiro-pen" => return Some(Control::SetPenOffset(v)),
        _ => {}
    }
    if let Some((panel, setting)) = id.split_once('-') {
        if PANEL_PREFIXES.contains(&panel) {
            match setting {
                "speed" => return Some(Control::SetSpeed(v)),
                "opacity" => return Some(Control::SetOpacity(v)),
                _ => {}
            }
        }
    }
    if let Some(bin) = numbered(id, "dft-f") {
        return Some(Control::SetBinAmplitude { bin, amplitude: v });
    }
    if let Some(index) = numbered(id, "sig-f") {
        return Some(Control::SetComponentFrequency {
            index,
            frequency: v,
        });
    }
    if let Some(index) = numbered(id, "sig-a") {
        return Some(Control::SetComponentAmplitude {
            index,
            amplitude: v,
        });
    }
    if let Some(index) = numbered(id, "sig-p") {
        return Some(Control::SetComponentPhase { index, degrees: v });
    }
    None
}

/// Control for a `click` on button `id`.
pub fn control_for_button(id: &str) -> Option<Control> {
    match id {
        "draw-toggle" => Some(Control::ToggleDrawing),
        "draw-clear" => Some(Control::Clear),
        _ => id
            .strip_suffix("-reset")
            .filter(|panel| PANEL_PREFIXES.contains(panel))
            .map(|_| Control::Reset),
    }
}

/// Text for a slider's `<id>-val` label.
pub fn value_label(id: &str, value: &str) -> String {
    match parse_number(value) {
        Some(v) if numbered(id, "sig-p").is_some() => format!("{v}{PHASE_LABEL_SUFFIX}"),
        Some(v) => format!("{v}"),
        None => value.to_string(),
    }
}

/// Slider positions a spirograph preset implies, as `(id, value)`.
pub fn spiro_slider_values(preset: SpiroPreset) -> [(&'static str, f64); 3] {
    let (fixed, rolling, pen) = preset.geometry();
    [("spiro-r1", fixed), ("spiro-r2", rolling), ("spiro-pen", pen)]
}

/// Every id [`control_for_button`] knows.
pub fn button_ids() -> Vec<String> {
    let mut ids: Vec<String> = PANEL_PREFIXES
        .iter()
        .map(|p| format!("{p}-reset"))
        .collect();
    ids.push("draw-toggle".to_string());
    ids.push("draw-clear".to_string());
    ids
}

#[inline]
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[inline]
fn to_count(v: f64) -> usize {
    v.round().max(0.0) as usize
}

/// `prefix<n>` with 1-based `n`, returned 0-based.
fn numbered(id: &str, prefix: &str) -> Option<usize> {
    let n: usize = id.strip_prefix(prefix)?.parse().ok()?;
    n.checked_sub(1)
}

fn parse_choice<T>(id: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(choice) => Some(choice),
        Err(e) => {
            log::warn!("[controls] {}: {}", id, e);
            None
        }
    }
}
