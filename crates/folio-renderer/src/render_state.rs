//! Frame orchestration: backdrop + starfield into the window surface.

use std::sync::Arc;
use winit::window::Window;

use folio_config::FolioConfig;

use crate::backdrop::BackdropRenderer;
use crate::gpu::{GpuContext, RendererError};
use crate::matrix;
use crate::starfield::{
    drift_rotation, sample_sphere_points_default, StarfieldPipeline, StarfieldUniforms, SCENE_TILT,
};

/// Camera vertical field of view, radians (75 degrees).
const CAMERA_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
/// Camera distance from the origin along +Z.
const CAMERA_Z: f32 = 1.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Core rendering state.
///
/// All page text and panels live in the transparent WebView composited
/// on top by the OS; this struct draws only the decorative layers
/// beneath it. The star positions are sampled once here and never
/// change; animation is the MVP matrix recomputed from elapsed time.
pub struct RenderState {
    pub gpu: GpuContext,
    backdrop: BackdropRenderer,
    starfield: Option<StarfieldPipeline>,
    logged_first_frame: bool,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &FolioConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;

        let mut backdrop = BackdropRenderer::from_config(&config.background);
        backdrop.upload(&gpu.device, &gpu.queue, gpu.format());

        let starfield = if config.starfield.enabled {
            let points = sample_sphere_points_default(
                config.starfield.points,
                config.starfield.radius as f32,
            );
            Some(StarfieldPipeline::new(
                &gpu.device,
                gpu.format(),
                &points,
                &config.starfield,
            ))
        } else {
            None
        };

        Ok(Self {
            gpu,
            backdrop,
            starfield,
            logged_first_frame: false,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Render one frame at the given elapsed time.
    pub fn render_frame(&mut self, elapsed_secs: f32) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(starfield) = &self.starfield {
            let uniforms = StarfieldUniforms {
                mvp: self.mvp(elapsed_secs),
                color: starfield.params.color,
                point_size: starfield.params.point_size,
                aspect: self.gpu.aspect_ratio(),
                opacity: starfield.params.opacity,
                _pad: 0.0,
            };
            starfield.update_uniforms(&self.gpu.queue, &uniforms);
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("folio frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("folio background pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.backdrop.clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.backdrop.needs_render_pass() {
                self.backdrop.render(&mut pass);
            }
            if let Some(starfield) = &self.starfield {
                starfield.render(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if !self.logged_first_frame {
            self.logged_first_frame = true;
            tracing::info!(
                "First frame presented ({}x{}, {:?})",
                self.gpu.size.width,
                self.gpu.size.height,
                self.gpu.format(),
            );
        }

        Ok(())
    }

    /// MVP for the starfield: perspective camera at z = +1 looking at the
    /// origin, scene tilted a quarter turn, drift angles derived from the
    /// clock.
    fn mvp(&self, elapsed_secs: f32) -> matrix::Mat4 {
        let projection = matrix::perspective(CAMERA_FOV_Y, self.gpu.aspect_ratio(), NEAR, FAR);
        let view = matrix::translate(0.0, 0.0, -CAMERA_Z);

        let (rx, ry) = drift_rotation(elapsed_secs);
        let model = matrix::mul(
            &matrix::rotate_z(SCENE_TILT),
            &matrix::mul(&matrix::rotate_y(ry), &matrix::rotate_x(rx)),
        );

        matrix::mul(&projection, &matrix::mul(&view, &model))
    }
}
