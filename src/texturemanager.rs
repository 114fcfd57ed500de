use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::color::Color;
use crate::error::SetupError;
use crate::platform::Platform;
use crate::resourcemanager::validate;

fn load_texture<'r, P: Platform>(
    platform: &mut P,
    renderer: &'r P::Renderer,
    path: &Path,
    color_key: Color,
) -> Result<P::Texture<'r>, SetupError> {
    info!("loading texture from path: {:?}", path);
    let surface = validate(
        platform.load_surface(path, color_key),
        SetupError::SurfaceLoad(path.to_owned()),
    )?;
    validate(
        platform.create_texture(renderer, surface),
        SetupError::TextureCreation,
    )
}

/// Loads every path into a texture, in order, and runs `f` with all of them.
///
/// The first load that fails ends the whole thing: `f` never runs and the
/// textures loaded so far are dropped without being destroyed. Otherwise every
/// texture is destroyed once `f` returns.
pub fn with_textures<'r, P, T, F>(
    platform: &mut P,
    renderer: &'r P::Renderer,
    paths: &[PathBuf],
    color_key: Color,
    f: F,
) -> Result<T, SetupError>
where
    P: Platform,
    F: FnOnce(&mut P, &[P::Texture<'r>]) -> T,
{
    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        textures.push(load_texture(platform, renderer, path, color_key)?);
    }

    let value = f(platform, textures.as_slice());

    debug!("destroying {} textures", textures.len());
    for texture in textures {
        platform.destroy_texture(texture);
    }
    Ok(value)
}
