pub mod color;
pub mod constants;
pub mod controls;
pub mod demos;
pub mod dft;
pub mod draw;
pub mod epicycle;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod manager;
pub mod resample;
pub mod series;
pub mod shapes;
pub mod trail;

pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use color::Color;
pub use controls::{Control, PointerInput, Readout};
pub use demos::{Demo, DemoKind, DrawMode, SpiroPreset};
pub use dft::{compute_dft, EpicycleChain, FrequencyComponent};
pub use draw::{DrawCommand, DrawList, RecordingSurface, Surface, Viewport};
pub use epicycle::{evaluate_epicycles, evaluate_tip, wrap_unit, Reconstruction};
pub use error::CoreError;
pub use geometry::{Circle, Point};
pub use keys::{action_for_key, KeyAction};
pub use manager::{DemoManager, DriverState, ViewModel};
pub use resample::{path_length, resample_path, resample_path_with, Spacing};
pub use series::WaveShape;
pub use shapes::ShapePreset;
