//! Star instance types and buffer layout.

/// One star particle. The quad corners are generated in the vertex
/// shader from the vertex index; only the center position is per-instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
}

impl StarInstance {
    /// wgpu vertex buffer layout for `StarInstance`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<StarInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
        ],
    };

    /// Convert a flat coordinate buffer (x, y, z triples) to instances.
    pub fn from_flat(points: &[f32]) -> Vec<StarInstance> {
        points
            .chunks_exact(3)
            .map(|p| StarInstance {
                position: [p[0], p[1], p[2]],
            })
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_instance_size_is_12_bytes() {
        assert_eq!(std::mem::size_of::<StarInstance>(), 12);
    }

    #[test]
    fn from_flat_groups_triples() {
        let instances = StarInstance::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(instances[1].position, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_flat_ignores_trailing_partial_triple() {
        let instances = StarInstance::from_flat(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(instances.len(), 1);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = StarInstance {
            position: [1.0, 2.0, 3.0],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 12);
    }
}
