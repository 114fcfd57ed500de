pub mod sdlplatform;
