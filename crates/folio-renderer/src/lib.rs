pub mod backdrop;
pub mod gpu;
pub mod matrix;
pub mod render_state;
pub mod starfield;

pub use backdrop::BackdropRenderer;
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use render_state::RenderState;
pub use starfield::{sample_sphere_points, sample_sphere_points_default, StarfieldPipeline};
