use log::{debug, info};

use crate::config::Config;
use crate::constants::RENDER_SCALE_QUALITY_HINT;
use crate::error::SetupError;
use crate::platform::{ImageFormat, Platform, Subsystem};

const SUBSYSTEMS: &[Subsystem] = &[Subsystem::Video, Subsystem::Events];
const IMAGE_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpg];

/// How a platform reports whether an acquisition worked.
pub trait Validity {
    type Handle;

    fn into_valid(self) -> Option<Self::Handle>;
}

/// A handle that may be missing.
impl<T> Validity for Option<T> {
    type Handle = T;

    fn into_valid(self) -> Option<T> {
        self
    }
}

/// A success flag.
impl Validity for bool {
    type Handle = ();

    fn into_valid(self) -> Option<()> {
        self.then_some(())
    }
}

/// A status code, negative on failure.
impl Validity for i32 {
    type Handle = ();

    fn into_valid(self) -> Option<()> {
        (self >= 0).then_some(())
    }
}

pub fn validate<R: Validity>(raw: R, failure: SetupError) -> Result<R::Handle, SetupError> {
    raw.into_valid().ok_or(failure)
}

/// Acquires a resource, lends it to `body`, then releases it.
///
/// A failed acquisition is returned as is. When `body` fails with a setup
/// error of its own, the resource is dropped without `release` ever being
/// called: setup errors are fatal and process exit reclaims whatever was
/// already acquired. Anything `body` returns as `Ok`, including an error
/// value of the caller's own, is followed by `release`.
pub fn scope<C, H, T>(
    context: &mut C,
    acquire: impl FnOnce(&mut C) -> Result<H, SetupError>,
    release: impl FnOnce(&mut C, H),
    body: impl FnOnce(&mut C, &H) -> Result<T, SetupError>,
) -> Result<T, SetupError> {
    let handle = acquire(context)?;
    let value = body(context, &handle)?;
    release(context, handle);
    Ok(value)
}

/// The window and the renderer drawing into it, borrowed for one run.
pub struct Video<'a, P: Platform> {
    pub window: &'a P::Window,
    pub renderer: &'a P::Renderer,
}

/// Brings up subsystems, the image codecs, the scale hint, a window and a
/// renderer, in that order, and runs `f` with the window and renderer.
///
/// Afterwards everything is torn down in reverse: renderer, window, image
/// codecs, subsystems. The hint has nothing to release.
pub fn with_video<P, T, F>(platform: &mut P, config: &Config, f: F) -> Result<T, SetupError>
where
    P: Platform,
    F: FnOnce(&mut P, Video<'_, P>) -> T,
{
    scope(
        platform,
        |p| {
            validate(p.init_subsystems(SUBSYSTEMS), SetupError::SubsystemInit("SDL"))?;
            info!("initialized subsystems: {:?}", SUBSYSTEMS);
            Ok(())
        },
        |p, _| {
            debug!("shutting down subsystems");
            p.shutdown_subsystems()
        },
        |p, _| {
            scope(
                p,
                |p| {
                    validate(
                        p.init_image(IMAGE_FORMATS),
                        SetupError::SubsystemInit("SDL_image"),
                    )?;
                    info!("initialized image codecs: {:?}", IMAGE_FORMATS);
                    Ok(())
                },
                |p, _| {
                    debug!("shutting down image codecs");
                    p.quit_image()
                },
                |p, _| {
                    let quality = config.scale_quality.hint_value();
                    validate(
                        p.set_hint(RENDER_SCALE_QUALITY_HINT, quality),
                        SetupError::HintApply(RENDER_SCALE_QUALITY_HINT),
                    )?;
                    info!("set {} to {}", RENDER_SCALE_QUALITY_HINT, quality);
                    with_window(p, config, f)
                },
            )
        },
    )
}

fn with_window<P, T, F>(platform: &mut P, config: &Config, f: F) -> Result<T, SetupError>
where
    P: Platform,
    F: FnOnce(&mut P, Video<'_, P>) -> T,
{
    scope(
        platform,
        |p| {
            let window = validate(
                p.create_window(&config.title, config.width, config.height),
                SetupError::WindowCreation,
            )?;
            info!(
                "created window {:?} ({}x{})",
                config.title, config.width, config.height
            );
            Ok(window)
        },
        |p, window| {
            debug!("destroying window");
            p.destroy_window(window)
        },
        |p, window| {
            scope(
                p,
                |p| {
                    let renderer = validate(
                        p.create_renderer(window, config.renderer),
                        SetupError::RendererCreation,
                    )?;
                    info!("created renderer: {:?}", config.renderer);
                    Ok(renderer)
                },
                |p, renderer| {
                    debug!("destroying renderer");
                    p.destroy_renderer(renderer)
                },
                |p, renderer| Ok(f(p, Video { window, renderer })),
            )
        },
    )
}
