mod app;
mod color;
mod config;
mod constants;
mod error;
mod framepump;
mod geometry;
mod platform;
mod resourcemanager;
mod sprite;
mod texturemanager;

#[cfg(test)]
mod testplatform;

pub use app::{draw, run};
pub use color::Color;
pub use config::{Config, ScaleQuality, SpriteGeometry};
pub use error::{describe, SetupError};
pub use framepump::{pump, Terminal};
pub use geometry::{centered, Rect, Size};
pub use platform::{ImageFormat, InputEvent, Platform, RendererOptions, Subsystem};
pub use resourcemanager::{scope, validate, with_video, Validity, Video};
pub use sprite::{frame_index, source_rect, transition, AppState, Phase};
pub use texturemanager::with_textures;

#[cfg(feature = "sdl2")]
mod sdl;

#[cfg(feature = "sdl2")]
pub use sdl::sdlplatform::{SdlPlatform, SdlRenderer};
