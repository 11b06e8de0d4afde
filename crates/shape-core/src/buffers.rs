//! Generated mesh buffers and the packed GPU vertex

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Packed vertex for GPU upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Output of one generator call
///
/// `normals` and `uvs` are index-aligned with `positions`; `indices` holds
/// triangle triples wound counter-clockwise viewed from outside. Every
/// generator returns a fresh value, there is no shared scratch state between
/// invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions
    pub positions: Vec<[f32; 3]>,
    /// Unit outward normals, one per vertex
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates, one per vertex
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices into the vertex arrays
    pub indices: Vec<u32>,
    /// Bounding box min
    pub bbox_min: [f32; 3],
    /// Bounding box max
    pub bbox_max: [f32; 3],
}

impl MeshBuffers {
    /// Create empty buffers with room for the given vertex/triangle counts
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(triangles * 3),
            bbox_min: [0.0; 3],
            bbox_max: [0.0; 3],
        }
    }

    /// Append one vertex and return its index
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Append one triangle, counter-clockwise viewed from outside
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Calculate bounding box from positions
    pub fn calculate_bounding_box(&mut self) {
        if self.positions.is_empty() {
            self.bbox_min = [0.0; 3];
            self.bbox_max = [0.0; 3];
            return;
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        self.bbox_min = min;
        self.bbox_max = max;
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.bbox_min[0] + self.bbox_max[0]) / 2.0,
            (self.bbox_min[1] + self.bbox_max[1]) / 2.0,
            (self.bbox_min[2] + self.bbox_max[2]) / 2.0,
        )
    }

    /// Get the size of the bounding box
    pub fn size(&self) -> Vec3 {
        Vec3::new(
            self.bbox_max[0] - self.bbox_min[0],
            self.bbox_max[1] - self.bbox_min[1],
            self.bbox_max[2] - self.bbox_min[2],
        )
    }

    /// Interleave the buffers into a packed vertex stream for GPU upload
    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| Vertex {
                position: *position,
                normal: *normal,
                uv: *uv,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_vertex_returns_index() {
        let mut buffers = MeshBuffers::with_capacity(2, 0);
        let a = buffers.push_vertex([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2]);
        let b = buffers.push_vertex([1.0; 3], [0.0, 1.0, 0.0], [1.0; 2]);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(buffers.vertex_count(), 2);
    }

    #[test]
    fn test_bounding_box() {
        let mut buffers = MeshBuffers::default();
        buffers.push_vertex([-1.0, -2.0, -3.0], [0.0, 1.0, 0.0], [0.0; 2]);
        buffers.push_vertex([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0; 2]);
        buffers.calculate_bounding_box();
        assert_eq!(buffers.bbox_min, [-1.0, -2.0, -3.0]);
        assert_eq!(buffers.bbox_max, [1.0, 2.0, 3.0]);
        assert_eq!(buffers.center(), Vec3::ZERO);
        assert_eq!(buffers.size(), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_empty_bounding_box() {
        let mut buffers = MeshBuffers::default();
        buffers.calculate_bounding_box();
        assert_eq!(buffers.bbox_min, [0.0; 3]);
        assert_eq!(buffers.bbox_max, [0.0; 3]);
    }

    #[test]
    fn test_interleaved_layout() {
        let mut buffers = MeshBuffers::default();
        buffers.push_vertex([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.25]);
        let packed = buffers.interleaved();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(packed[0].uv, [0.5, 0.25]);
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
