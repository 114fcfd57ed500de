use std::cell::RefCell;
use std::path::Path;

use log::{debug, error};
use sdl2::event::Event;
use sdl2::image::{InitFlag, LoadSurface, Sdl2ImageContext};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use crate::color::Color;
use crate::geometry::Rect;
use crate::platform::{ImageFormat, InputEvent, Platform, RendererOptions, Subsystem};

/// A canvas plus the texture creator textures borrow from.
///
/// Drawing goes through a `RefCell` so textures can keep borrowing the
/// creator while the canvas is in use.
pub struct SdlRenderer {
    canvas: RefCell<Canvas<Window>>,
    texture_creator: TextureCreator<WindowContext>,
}

/// A window until a renderer is built on it. The canvas takes the window
/// over and frees it when the renderer is destroyed.
pub struct SdlWindow(RefCell<Option<Window>>);

impl SdlWindow {
    fn new(window: Window) -> Self {
        SdlWindow(RefCell::new(Some(window)))
    }

    fn take(&self) -> Result<Window, String> {
        self.0
            .borrow_mut()
            .take()
            .ok_or_else(|| "window already has a renderer".to_owned())
    }
}

/// `Platform` on top of SDL2 and SDL2_image.
#[derive(Default)]
pub struct SdlPlatform {
    sdl: Option<Sdl>,
    video: Option<VideoSubsystem>,
    event_pump: Option<EventPump>,
    image: Option<Sdl2ImageContext>,
    last_error: String,
}

impl SdlPlatform {
    pub fn new() -> Self {
        SdlPlatform::default()
    }

    fn record<E: ToString>(&mut self, e: E) {
        self.last_error = e.to_string();
        debug!("SDL call failed: {}", self.last_error);
    }

    fn fail<T, E: ToString>(&mut self, e: E) -> Option<T> {
        self.record(e);
        None
    }

    fn start(&mut self, subsystems: &[Subsystem]) -> Result<(), String> {
        let sdl = sdl2::init()?;
        for subsystem in subsystems {
            match subsystem {
                Subsystem::Video => self.video = Some(sdl.video()?),
                Subsystem::Events => self.event_pump = Some(sdl.event_pump()?),
            }
        }
        self.sdl = Some(sdl);
        Ok(())
    }
}

impl Platform for SdlPlatform {
    type Window = SdlWindow;
    type Renderer = SdlRenderer;
    type Surface = Surface<'static>;
    type Texture<'r> = Texture<'r>;

    fn init_subsystems(&mut self, subsystems: &[Subsystem]) -> i32 {
        match self.start(subsystems) {
            Ok(()) => 0,
            Err(e) => {
                self.record(e);
                -1
            }
        }
    }

    fn shutdown_subsystems(&mut self) {
        self.event_pump = None;
        self.video = None;
        self.sdl = None;
    }

    fn init_image(&mut self, formats: &[ImageFormat]) -> bool {
        let flags = formats
            .iter()
            .fold(InitFlag::empty(), |flags, format| match format {
                ImageFormat::Png => flags | InitFlag::PNG,
                ImageFormat::Jpg => flags | InitFlag::JPG,
            });
        match sdl2::image::init(flags) {
            Ok(context) => {
                self.image = Some(context);
                true
            }
            Err(e) => {
                self.record(e);
                false
            }
        }
    }

    fn quit_image(&mut self) {
        self.image = None;
    }

    fn set_hint(&mut self, key: &str, value: &str) -> bool {
        let applied = sdl2::hint::set(key, value);
        if !applied {
            self.record(sdl2::get_error());
        }
        applied
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Option<SdlWindow> {
        let Some(video) = self.video.as_ref() else {
            return self.fail("video subsystem is not initialized");
        };
        match video.window(title, width, height).position_centered().build() {
            Ok(window) => Some(SdlWindow::new(window)),
            Err(e) => self.fail(e),
        }
    }

    fn destroy_window(&mut self, window: SdlWindow) {
        drop(window);
    }

    fn create_renderer(
        &mut self,
        window: &SdlWindow,
        options: RendererOptions,
    ) -> Option<SdlRenderer> {
        let window = match window.take() {
            Ok(window) => window,
            Err(e) => return self.fail(e),
        };
        let mut builder = window.into_canvas();
        if options.accelerated {
            builder = builder.accelerated();
        } else {
            builder = builder.software();
        }
        if options.vsync {
            builder = builder.present_vsync();
        }
        match builder.build() {
            Ok(canvas) => {
                let texture_creator = canvas.texture_creator();
                Some(SdlRenderer {
                    canvas: RefCell::new(canvas),
                    texture_creator,
                })
            }
            Err(e) => self.fail(e),
        }
    }

    fn destroy_renderer(&mut self, renderer: SdlRenderer) {
        drop(renderer);
    }

    fn load_surface(&mut self, path: &Path, color_key: Color) -> Option<Surface<'static>> {
        let mut surface = match Surface::from_file(path) {
            Ok(surface) => surface,
            Err(e) => return self.fail(e),
        };
        if let Err(e) = surface.set_color_key(true, color_key.into()) {
            return self.fail(e);
        }
        Some(surface)
    }

    fn create_texture<'r>(
        &mut self,
        renderer: &'r SdlRenderer,
        surface: Surface<'static>,
    ) -> Option<Texture<'r>> {
        match renderer.texture_creator.create_texture_from_surface(&surface) {
            Ok(texture) => Some(texture),
            Err(e) => self.fail(e),
        }
    }

    fn destroy_texture(&mut self, texture: Texture<'_>) {
        drop(texture);
    }

    fn clear(&mut self, renderer: &SdlRenderer, color: Color) {
        let mut canvas = renderer.canvas.borrow_mut();
        canvas.set_draw_color(color);
        canvas.clear();
    }

    fn copy_rect(
        &mut self,
        renderer: &SdlRenderer,
        texture: &Texture<'_>,
        source: Rect,
        destination: Rect,
    ) {
        let source = sdl2::rect::Rect::from(source);
        let destination = sdl2::rect::Rect::from(destination);
        if let Err(e) = renderer
            .canvas
            .borrow_mut()
            .copy(texture, source, destination)
        {
            error!("unable to copy sprite: {}", e);
        }
    }

    fn present(&mut self, renderer: &SdlRenderer) {
        renderer.canvas.borrow_mut().present();
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        let event = self.event_pump.as_mut()?.poll_event()?;
        Some(match event {
            Event::Quit { .. } => InputEvent::Quit,
            _ => InputEvent::Other,
        })
    }

    fn last_error(&self) -> String {
        if self.last_error.is_empty() {
            sdl2::get_error()
        } else {
            self.last_error.clone()
        }
    }
}
