use log::{debug, info};

use crate::config::Config;
use crate::error::SetupError;
use crate::framepump::pump;
use crate::geometry::centered;
use crate::platform::Platform;
use crate::resourcemanager::with_video;
use crate::sprite::{frame_index, source_rect, transition, AppState, Phase};
use crate::texturemanager::with_textures;

/// Draws one frame: the current cell of the sheet, centered in the window.
pub fn draw<P: Platform>(
    platform: &mut P,
    renderer: &P::Renderer,
    sheet: &P::Texture<'_>,
    config: &Config,
    state: &AppState,
) {
    if state.phase != Phase::Running {
        return;
    }
    let index = frame_index(state.step_count, &config.sprite);
    let source = source_rect(index, &config.sprite);
    let destination = centered(config.window_size(), config.sprite.cell_size());

    platform.clear(renderer, config.clear_color);
    platform.copy_rect(renderer, sheet, source, destination);
    platform.present(renderer);
}

/// Brings everything up, animates until a quit arrives and tears it all down.
///
/// Returns the state the loop ended in.
pub fn run<P: Platform>(platform: &mut P, config: &Config) -> Result<AppState, SetupError> {
    let finished = with_video(platform, config, |platform, video| {
        with_textures(
            platform,
            video.renderer,
            &config.assets,
            config.color_key,
            |platform, textures| match textures.first() {
                Some(sheet) => {
                    info!("animating {} frames", config.sprite.frame_count);
                    pump(
                        platform,
                        AppState::new(),
                        |p| p.poll_event(),
                        transition,
                        |p, state| draw(p, video.renderer, sheet, config, state),
                    )
                }
                None => {
                    debug!("no sprite sheet configured, nothing to animate");
                    AppState {
                        phase: Phase::Exiting,
                        step_count: 0,
                    }
                }
            },
        )
    })??;

    debug!("finished after {} steps", finished.step_count);
    Ok(finished)
}
