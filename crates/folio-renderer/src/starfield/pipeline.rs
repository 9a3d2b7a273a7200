//! wgpu render pipeline for the star billboards.
//!
//! Each star is a camera-facing quad expanded in the vertex shader; the
//! fragment shader rounds it off and fades by distance from the center.
//! Sized offsets are added in clip space before the perspective divide,
//! so stars shrink with depth like the site's attenuated points.

use folio_common::Color;
use folio_config::schema::StarfieldConfig;

use super::types::StarInstance;
use crate::matrix::Mat4;

pub(crate) const SHADER_SOURCE: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    color: vec4<f32>,
    point_size: f32,
    aspect: f32,
    opacity: f32,
    _pad: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct InstanceInput {
    @location(0) position: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) corner: vec2<f32>,
};

var<private> CORNERS: array<vec2<f32>, 6> = array<vec2<f32>, 6>(
    vec2<f32>(-1.0, -1.0),
    vec2<f32>( 1.0, -1.0),
    vec2<f32>( 1.0,  1.0),
    vec2<f32>(-1.0, -1.0),
    vec2<f32>( 1.0,  1.0),
    vec2<f32>(-1.0,  1.0),
);

@vertex
fn vs_main(@builtin(vertex_index) vi: u32, instance: InstanceInput) -> VertexOutput {
    var out: VertexOutput;
    let corner = CORNERS[vi];
    let center = uniforms.mvp * vec4<f32>(instance.position, 1.0);
    let offset = corner * uniforms.point_size * vec2<f32>(1.0, uniforms.aspect);
    out.clip_position = center + vec4<f32>(offset, 0.0, 0.0);
    out.corner = corner;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let d = length(in.corner);
    if (d > 1.0) {
        discard;
    }
    let falloff = 1.0 - d * d;
    return vec4<f32>(uniforms.color.rgb, uniforms.color.a * falloff * uniforms.opacity);
}
"#;

/// Per-frame uniforms for the starfield pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarfieldUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: Mat4,
    /// Star tint (RGBA).
    pub color: [f32; 4],
    /// Billboard half-extent in clip units.
    pub point_size: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Global star opacity.
    pub opacity: f32,
    pub _pad: f32,
}

/// Static star appearance taken from config at construction.
#[derive(Debug, Clone, Copy)]
pub struct StarfieldParams {
    pub color: [f32; 4],
    pub point_size: f32,
    pub opacity: f32,
}

impl StarfieldParams {
    pub fn from_config(config: &StarfieldConfig) -> Self {
        let rgb = Color::from_hex(&config.color)
            .map(|c| c.to_rgb_f32())
            .unwrap_or([1.0, 0.6, 0.2]);
        Self {
            color: [rgb[0], rgb[1], rgb[2], 1.0],
            point_size: config.point_size as f32,
            opacity: config.opacity as f32,
        }
    }
}

/// Manages the wgpu pipeline and buffers for star rendering.
pub struct StarfieldPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub instance_buffer: wgpu::Buffer,
    pub instance_count: u32,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub params: StarfieldParams,
}

impl StarfieldPipeline {
    /// Create the starfield pipeline.
    ///
    /// - `format`: the surface format rendered into
    /// - `points`: flat sampled coordinate buffer (x, y, z triples)
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        points: &[f32],
        config: &StarfieldConfig,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let instances = StarInstance::from_flat(points);
        let params = StarfieldParams::from_config(config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("starfield shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("starfield instances"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("starfield uniforms"),
            size: std::mem::size_of::<StarfieldUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("starfield bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<
                        StarfieldUniforms,
                    >() as u64),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("starfield bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("starfield pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("starfield pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[StarInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            instance_buffer,
            instance_count: instances.len() as u32,
            uniform_buffer,
            bind_group,
            params,
        }
    }

    /// Upload per-frame uniforms (MVP, appearance).
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &StarfieldUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the star draw into an open render pass.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..6, 0..self.instance_count);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_96_bytes() {
        // mat4 (64) + color (16) + 4 scalars (16)
        assert_eq!(std::mem::size_of::<StarfieldUniforms>(), 96);
    }

    #[test]
    fn params_from_default_config() {
        let params = StarfieldParams::from_config(&StarfieldConfig::default());
        // #ff9933
        assert!((params.color[0] - 1.0).abs() < 1e-3);
        assert!((params.color[1] - 0.6).abs() < 1e-2);
        assert!((params.color[2] - 0.2).abs() < 1e-2);
        assert!((params.point_size - 0.002).abs() < 1e-6);
        assert!((params.opacity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn params_fall_back_on_bad_color() {
        let config = StarfieldConfig {
            color: "nonsense".into(),
            ..Default::default()
        };
        let params = StarfieldParams::from_config(&config);
        assert!((params.color[0] - 1.0).abs() < 1e-6);
        assert!((params.color[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shader_declares_both_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_main"));
        assert!(SHADER_SOURCE.contains("fn fs_main"));
        assert!(SHADER_SOURCE.contains("@builtin(vertex_index)"));
    }
}
