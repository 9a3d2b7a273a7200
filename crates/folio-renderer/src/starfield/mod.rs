//! Starfield rendering: uniform point-in-sphere sampling, drift motion,
//! and the instanced billboard wgpu pipeline.
//!
//! The point buffer is sampled once at pipeline construction and is
//! immutable afterwards; motion comes entirely from the per-frame MVP
//! matrix, computed as a pure function of elapsed time.

mod motion;
mod pipeline;
mod sample;
mod types;

pub use motion::*;
pub use pipeline::*;
pub use sample::*;
pub use types::*;
