use std::path::PathBuf;

use clap::ValueEnum;

use crate::color::Color;
use crate::constants::{
    CELL_HEIGHT, CELL_WIDTH, CLEAR_COLOR, COLOR_KEY, FRAME_COUNT, SPRITE_SHEET_PATH,
    STEPS_PER_SECOND, STEP_DIVISOR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use crate::geometry::Size;
use crate::platform::RendererOptions;

/// Texture filtering used when the renderer scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleQuality {
    Nearest,
    Linear,
    Best,
}

impl ScaleQuality {
    pub fn hint_value(self) -> &'static str {
        match self {
            ScaleQuality::Nearest => "0",
            ScaleQuality::Linear => "1",
            ScaleQuality::Best => "2",
        }
    }
}

/// How the sheet is cut up and how fast it is played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
    pub frame_count: u32,
    pub rate: u64,
    pub divisor: u64,
}

impl SpriteGeometry {
    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }
}

impl Default for SpriteGeometry {
    fn default() -> Self {
        SpriteGeometry {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            frame_count: FRAME_COUNT,
            rate: STEPS_PER_SECOND,
            divisor: STEP_DIVISOR,
        }
    }
}

/// Built once at startup, then only ever borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub assets: Vec<PathBuf>,
    pub sprite: SpriteGeometry,
    pub color_key: Color,
    pub clear_color: Color,
    pub scale_quality: ScaleQuality,
    pub renderer: RendererOptions,
}

impl Config {
    pub fn window_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: WINDOW_TITLE.to_owned(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            assets: vec![PathBuf::from(SPRITE_SHEET_PATH)],
            sprite: SpriteGeometry::default(),
            color_key: COLOR_KEY,
            clear_color: CLEAR_COLOR,
            scale_quality: ScaleQuality::Linear,
            renderer: RendererOptions::default(),
        }
    }
}
