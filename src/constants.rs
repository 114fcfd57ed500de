use crate::color::Color;

// Basic window size.
pub const WINDOW_TITLE: &str = "spritewalk";
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;

// The walking figure. One row of cells, left to right.
pub const SPRITE_SHEET_PATH: &str = "assets/walk.png";
pub const CELL_WIDTH: u32 = 48;
pub const CELL_HEIGHT: u32 = 48;
pub const FRAME_COUNT: u32 = 8;

// How fast to animate: STEPS_PER_SECOND cells per STEP_DIVISOR loop iterations.
// At a vsynced 60Hz that is 8 cells a second.
pub const STEPS_PER_SECOND: u64 = 8;
pub const STEP_DIVISOR: u64 = 60;

// Pixels of this colour are transparent in the sprite sheet.
pub const COLOR_KEY: Color = Color::rgb(0x00, 0xFF, 0xFF);
pub const CLEAR_COLOR: Color = Color::rgb(0xFF, 0xFF, 0xFF);

pub const RENDER_SCALE_QUALITY_HINT: &str = "SDL_RENDER_SCALE_QUALITY";
