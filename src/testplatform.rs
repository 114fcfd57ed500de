use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::geometry::Rect;
use crate::platform::{ImageFormat, InputEvent, Platform, RendererOptions, Subsystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    InitSubsystems,
    ShutdownSubsystems,
    InitImage,
    QuitImage,
    SetHint(String, String),
    CreateWindow(String, u32, u32),
    DestroyWindow(u32),
    CreateRenderer(u32),
    DestroyRenderer(u32),
    LoadSurface(PathBuf),
    CreateTexture(u32),
    DestroyTexture(u32),
    Clear(Color),
    Copy { texture: u32, source: Rect, destination: Rect },
    Present,
}

/// Which acquisition should come back invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Subsystems,
    Image,
    Hint,
    Window,
    Renderer,
    Surface(PathBuf),
    Texture(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub u32);

#[derive(Debug, PartialEq, Eq)]
pub struct TestSurface {
    id: u32,
    path: PathBuf,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TestTexture(pub u32);

/// Records every call made against it and replays a scripted event queue.
#[derive(Default)]
pub struct TestPlatform {
    pub calls: Vec<Call>,
    pub events: VecDeque<Option<InputEvent>>,
    pub polls: usize,
    failure: Option<Failure>,
    next_id: u32,
    last_error: String,
}

impl TestPlatform {
    pub fn new() -> TestPlatform {
        TestPlatform::default()
    }

    pub fn failing(failure: Failure) -> TestPlatform {
        TestPlatform {
            failure: Some(failure),
            ..TestPlatform::default()
        }
    }

    pub fn with_events<I: IntoIterator<Item = InputEvent>>(events: I) -> TestPlatform {
        TestPlatform::with_polls(events.into_iter().map(Some))
    }

    /// Each item is what one poll returns; `None` is an empty poll.
    pub fn with_polls<I: IntoIterator<Item = Option<InputEvent>>>(polls: I) -> TestPlatform {
        TestPlatform {
            events: polls.into_iter().collect(),
            ..TestPlatform::default()
        }
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn fails(&mut self, failure: Failure) -> bool {
        if self.failure.as_ref() == Some(&failure) {
            self.last_error = format!("{:?} failed", failure);
            true
        } else {
            false
        }
    }

    /// Calls that release something, in the order they happened.
    pub fn teardowns(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    Call::ShutdownSubsystems
                        | Call::QuitImage
                        | Call::DestroyWindow(_)
                        | Call::DestroyRenderer(_)
                        | Call::DestroyTexture(_)
                )
            })
            .cloned()
            .collect()
    }

    pub fn copies(&self) -> Vec<(u32, Rect, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Copy {
                    texture,
                    source,
                    destination,
                } => Some((*texture, *source, *destination)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Platform for TestPlatform {
    type Window = Handle;
    type Renderer = Handle;
    type Surface = TestSurface;
    type Texture<'r> = TestTexture;

    fn init_subsystems(&mut self, _subsystems: &[Subsystem]) -> i32 {
        self.calls.push(Call::InitSubsystems);
        if self.fails(Failure::Subsystems) {
            -1
        } else {
            0
        }
    }

    fn shutdown_subsystems(&mut self) {
        self.calls.push(Call::ShutdownSubsystems);
    }

    fn init_image(&mut self, _formats: &[ImageFormat]) -> bool {
        self.calls.push(Call::InitImage);
        !self.fails(Failure::Image)
    }

    fn quit_image(&mut self) {
        self.calls.push(Call::QuitImage);
    }

    fn set_hint(&mut self, key: &str, value: &str) -> bool {
        self.calls.push(Call::SetHint(key.to_owned(), value.to_owned()));
        !self.fails(Failure::Hint)
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Option<Handle> {
        self.calls.push(Call::CreateWindow(title.to_owned(), width, height));
        if self.fails(Failure::Window) {
            return None;
        }
        Some(Handle(self.next_id()))
    }

    fn destroy_window(&mut self, window: Handle) {
        self.calls.push(Call::DestroyWindow(window.0));
    }

    fn create_renderer(&mut self, window: &Handle, _options: RendererOptions) -> Option<Handle> {
        self.calls.push(Call::CreateRenderer(window.0));
        if self.fails(Failure::Renderer) {
            return None;
        }
        Some(Handle(self.next_id()))
    }

    fn destroy_renderer(&mut self, renderer: Handle) {
        self.calls.push(Call::DestroyRenderer(renderer.0));
    }

    fn load_surface(&mut self, path: &Path, _color_key: Color) -> Option<TestSurface> {
        self.calls.push(Call::LoadSurface(path.to_owned()));
        if self.fails(Failure::Surface(path.to_owned())) {
            return None;
        }
        Some(TestSurface {
            id: self.next_id(),
            path: path.to_owned(),
        })
    }

    fn create_texture(
        &mut self,
        _renderer: &Handle,
        surface: TestSurface,
    ) -> Option<TestTexture> {
        self.calls.push(Call::CreateTexture(surface.id));
        if self.fails(Failure::Texture(surface.path)) {
            return None;
        }
        Some(TestTexture(self.next_id()))
    }

    fn destroy_texture(&mut self, texture: TestTexture) {
        self.calls.push(Call::DestroyTexture(texture.0));
    }

    fn clear(&mut self, _renderer: &Handle, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn copy_rect(
        &mut self,
        _renderer: &Handle,
        texture: &TestTexture,
        source: Rect,
        destination: Rect,
    ) {
        self.calls.push(Call::Copy {
            texture: texture.0,
            source,
            destination,
        });
    }

    fn present(&mut self, _renderer: &Handle) {
        self.calls.push(Call::Present);
    }

    /// An exhausted script quits so a test can never spin forever.
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.polls += 1;
        self.events.pop_front().unwrap_or(Some(InputEvent::Quit))
    }

    fn last_error(&self) -> String {
        self.last_error.clone()
    }
}
