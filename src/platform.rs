use std::path::Path;

use crate::color::Color;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Video,
    Events,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    pub accelerated: bool,
    pub vsync: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        RendererOptions {
            accelerated: true,
            vsync: true,
        }
    }
}

/// What the loop cares about from the input source. Anything that isn't a
/// request to quit is delivered as `Other` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Other,
}

/// The windowing, image and input library underneath the app.
///
/// Acquisitions return the library's raw answer (a status code, a flag, or a
/// handle that may be missing) and are checked by
/// [`validate`](crate::resourcemanager::validate). `last_error` explains the
/// most recent failure.
pub trait Platform {
    type Window;
    type Renderer;
    type Surface;
    type Texture<'r>;

    fn init_subsystems(&mut self, subsystems: &[Subsystem]) -> i32;
    fn shutdown_subsystems(&mut self);

    fn init_image(&mut self, formats: &[ImageFormat]) -> bool;
    fn quit_image(&mut self);

    fn set_hint(&mut self, key: &str, value: &str) -> bool;

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Option<Self::Window>;
    fn destroy_window(&mut self, window: Self::Window);

    fn create_renderer(
        &mut self,
        window: &Self::Window,
        options: RendererOptions,
    ) -> Option<Self::Renderer>;
    fn destroy_renderer(&mut self, renderer: Self::Renderer);

    /// Decodes an image and marks `color_key` pixels transparent.
    fn load_surface(&mut self, path: &Path, color_key: Color) -> Option<Self::Surface>;

    /// Uploads a surface to the renderer. The surface is freed either way.
    fn create_texture<'r>(
        &mut self,
        renderer: &'r Self::Renderer,
        surface: Self::Surface,
    ) -> Option<Self::Texture<'r>>;
    fn destroy_texture(&mut self, texture: Self::Texture<'_>);

    fn clear(&mut self, renderer: &Self::Renderer, color: Color);
    fn copy_rect(
        &mut self,
        renderer: &Self::Renderer,
        texture: &Self::Texture<'_>,
        source: Rect,
        destination: Rect,
    );
    fn present(&mut self, renderer: &Self::Renderer);

    /// Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn last_error(&self) -> String;
}
