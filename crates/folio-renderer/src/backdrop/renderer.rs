use folio_config::schema::{BackgroundConfig, BackgroundMode as ConfigBackgroundMode};
use tracing::warn;

use super::helpers::hex_to_rgb;
use super::pipeline::BackdropPipeline;

/// Renderer-side backdrop mode.
#[derive(Debug, Clone, Copy)]
pub enum BackdropMode {
    /// Full-screen dimmed image above the clear color.
    Image { opacity: f32 },
    /// Clear color only.
    Solid,
    /// No backdrop; clears to the solid color so the window is never
    /// uninitialized.
    None,
}

/// Draws the layer behind the starfield.
///
/// The GPU pipeline is kept as `Option` because it can only be created
/// once a wgpu device and surface format are available at runtime.
pub struct BackdropRenderer {
    pub mode: BackdropMode,
    /// Decoded image awaiting GPU upload.
    pending_image: Option<image::RgbaImage>,
    pipeline: Option<BackdropPipeline>,
    solid: [f64; 3],
}

impl BackdropRenderer {
    /// Create a backdrop from the application configuration.
    ///
    /// In image mode the file is decoded immediately; failure to load is
    /// not an error, the backdrop just falls back to the solid color.
    pub fn from_config(config: &BackgroundConfig) -> Self {
        let solid = hex_to_rgb(&config.solid_color).unwrap_or([0.0, 0.0, 0.0]);

        let (mode, pending_image) = match config.mode {
            ConfigBackgroundMode::Image => match image::open(&config.image.path) {
                Ok(img) => (
                    BackdropMode::Image {
                        opacity: config.image.opacity as f32,
                    },
                    Some(img.to_rgba8()),
                ),
                Err(e) => {
                    warn!(
                        path = %config.image.path,
                        "backdrop image failed to load ({e}), falling back to solid color"
                    );
                    (BackdropMode::Solid, None)
                }
            },
            ConfigBackgroundMode::Solid => (BackdropMode::Solid, None),
            ConfigBackgroundMode::None => (BackdropMode::None, None),
        };

        Self {
            mode,
            pending_image,
            pipeline: None,
            solid,
        }
    }

    /// Upload the decoded image and build the pipeline, once a device
    /// exists. A no-op for solid/none modes.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) {
        if let (Some(img), BackdropMode::Image { opacity }) = (self.pending_image.take(), self.mode)
        {
            self.pipeline = Some(BackdropPipeline::new(device, queue, format, &img, opacity));
        }
    }

    /// Whether a decoded image is still waiting for `upload`.
    pub fn has_pending_image(&self) -> bool {
        self.pending_image.is_some()
    }

    /// The wgpu clear color for the frame.
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.solid[0],
            g: self.solid[1],
            b: self.solid[2],
            a: 1.0,
        }
    }

    /// Whether the image layer will actually draw.
    pub fn needs_render_pass(&self) -> bool {
        matches!(self.mode, BackdropMode::Image { .. }) && self.pipeline.is_some()
    }

    /// Record the image draw into an open render pass, if there is one.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(pipeline) = &self.pipeline {
            pipeline.render(pass);
        }
    }
}
