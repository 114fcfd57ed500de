use crate::config::SpriteGeometry;
use crate::framepump::Terminal;
use crate::geometry::Rect;
use crate::platform::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Exiting,
}

/// Everything the loop carries from one iteration to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub phase: Phase,
    pub step_count: u64,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            phase: Phase::Running,
            step_count: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

impl Terminal for AppState {
    fn is_terminal(&self) -> bool {
        self.phase == Phase::Exiting
    }
}

/// A quit moves to `Exiting` and keeps the count. Anything else, including no
/// event at all, counts one step. The count is frozen once exiting.
pub fn transition(input: Option<InputEvent>, state: AppState) -> AppState {
    match (input, state.phase) {
        (Some(InputEvent::Quit), _) => AppState {
            phase: Phase::Exiting,
            ..state
        },
        (_, Phase::Exiting) => state,
        (_, Phase::Running) => AppState {
            step_count: state.step_count.wrapping_add(1),
            ..state
        },
    }
}

/// Which cell of the sheet to show after `step_count` iterations.
pub fn frame_index(step_count: u64, sprite: &SpriteGeometry) -> u32 {
    if sprite.frame_count == 0 || sprite.divisor == 0 {
        return 0;
    }
    // Widened so the product is exact for every step count.
    let advanced = (step_count as u128 * sprite.rate as u128) / sprite.divisor as u128;
    (advanced % sprite.frame_count as u128) as u32
}

/// The cell's rectangle within the sheet. Cells run left to right on one row.
pub fn source_rect(index: u32, sprite: &SpriteGeometry) -> Rect {
    let x = index as i64 * sprite.cell_width as i64;
    Rect::new(x as i32, 0, sprite.cell_width, sprite.cell_height)
}
