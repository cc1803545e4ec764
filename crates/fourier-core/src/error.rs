use thiserror::Error;

/// Errors surfaced to hosts. The numeric core itself is total; these only
/// come from parsing host-supplied names and from presenting frames.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown preset shape `{0}`")]
    UnknownShape(String),
    #[error("unknown wave shape `{0}`")]
    UnknownWave(String),
    #[error("unknown spirograph preset `{0}`")]
    UnknownSpiroPreset(String),
    #[error("unknown demo `{0}`")]
    UnknownDemo(String),
    #[error("demo index {0} out of range")]
    DemoIndex(usize),
    #[error("surface error: {0}")]
    Surface(String),
}
