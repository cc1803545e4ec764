/// DOM hooks and host-side tuning for the web front end.
///
/// Element ids that belong to a single control live next to the mapping in
/// `controls.rs`; these are the structural ones the page layout provides.

// Tab strip and the panel each tab reveals, in tab order
pub const TAB_SELECTOR: &str = ".tab";
pub const PANEL_SELECTOR: &str = ".demo-panel";
pub const ACTIVE_CLASS: &str = "active";

// Canvas per panel is `canvas-<index>`; its parent element sets the size
pub const CANVAS_ID_PREFIX: &str = "canvas-";

// Added to the freehand canvas wrapper while it waits for a stroke
pub const DRAWING_CLASS: &str = "drawing-mode";

// Suffix of the label element showing a slider's current value
pub const VALUE_LABEL_SUFFIX: &str = "-val";

// Degree sign appended to phase slider labels
pub const PHASE_LABEL_SUFFIX: &str = "\u{00B0}";

// Fallback when a panel's wrapper has no layout yet
pub const FALLBACK_CSS_WIDTH: f64 = 800.0;
pub const FALLBACK_CSS_HEIGHT: f64 = 500.0;

pub fn canvas_id(index: usize) -> String {
    format!("{CANVAS_ID_PREFIX}{index}")
}

pub fn value_label_id(input_id: &str) -> String {
    format!("{input_id}{VALUE_LABEL_SUFFIX}")
}
