use thiserror::Error;

/// Reasons the background cannot run on this page. None of them is shown to
/// the visitor; the canvas simply stays empty.
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("no window or document")]
    NoDocument,
    #[error("mount element #{0} not found")]
    MissingMount(&'static str),
    #[error("#{0} is not a canvas element")]
    NotACanvas(&'static str),
    #[error("WebGPU is not exposed by this browser")]
    NoWebGpu,
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("no surface format the renderer can use")]
    NoSurfaceFormat,
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("device request failed: {0}")]
    Device(String),
}
