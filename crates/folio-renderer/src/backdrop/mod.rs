//! Backdrop layer behind the starfield.
//!
//! Supports a dimmed full-screen image, a solid color, or nothing. GPU
//! pipeline creation is deferred until a wgpu device is available; a
//! missing or undecodable image degrades to the solid color with only a
//! warning logged.

mod helpers;
mod pipeline;
mod renderer;

pub use helpers::*;
pub use pipeline::*;
pub use renderer::*;
