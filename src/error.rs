use std::path::PathBuf;

use thiserror::Error;

/// Every way bringing up the window, renderer and sprite sheet can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0} could not initialize")]
    SubsystemInit(&'static str),

    #[error("hint {0} could not be applied")]
    HintApply(&'static str),

    #[error("Window could not be created")]
    WindowCreation,

    #[error("Renderer could not be created")]
    RendererCreation,

    #[error("Unable to load image {}", .0.display())]
    SurfaceLoad(PathBuf),

    #[error("Unable to create texture")]
    TextureCreation,
}

/// The single diagnostic line printed when setup fails.
pub fn describe(error: &SetupError, platform_error: &str) -> String {
    format!("{}! SDL Error: {}", error, platform_error)
}
