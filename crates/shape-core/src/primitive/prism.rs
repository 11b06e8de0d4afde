//! Prism mesh generation (N-sided right prism)

use std::f32::consts::PI;

use glam::Vec3;

use crate::buffers::MeshBuffers;

/// Generate an N-sided right prism centered at the origin, axis along Y
///
/// Every side panel gets 4 unique vertices so it keeps a flat outward
/// normal; the caps add one ring vertex per side plus a center vertex each
/// and fan outward (down for the bottom cap, up for the top).
///
/// # Arguments
/// * `radius` - Distance from the axis to the ring vertices
/// * `height` - Extent along Y
/// * `side_count` - Number of side panels (>= 3)
///
/// # Returns
/// 4N + 2N + 2 vertices, 2N side triangles plus 2N cap triangles
pub fn generate_prism_mesh(radius: f32, height: f32, side_count: u32) -> MeshBuffers {
    let vertex_count = (side_count * 6 + 2) as usize;
    let triangle_count = (side_count * 4) as usize;
    let mut buffers = MeshBuffers::with_capacity(vertex_count, triangle_count);

    let angle_step = 2.0 * PI / side_count as f32;
    let half_height = height / 2.0;

    let ring_point = |i: u32, y: f32| {
        let angle = (i % side_count) as f32 * angle_step;
        Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
    };

    // Side panels
    for i in 0..side_count {
        let bottom_current = ring_point(i, -half_height);
        let top_current = ring_point(i, half_height);
        let bottom_next = ring_point(i + 1, -half_height);
        let top_next = ring_point(i + 1, half_height);

        // Flat panel normal: vertical edge x bottom edge
        let normal = (top_current - bottom_current)
            .cross(bottom_next - bottom_current)
            .normalize()
            .to_array();

        let u_current = i as f32 / side_count as f32;
        let u_next = (i + 1) as f32 / side_count as f32;

        let base = buffers.push_vertex(bottom_current.to_array(), normal, [u_current, 0.0]);
        buffers.push_vertex(top_current.to_array(), normal, [u_current, 1.0]);
        buffers.push_vertex(bottom_next.to_array(), normal, [u_next, 0.0]);
        buffers.push_vertex(top_next.to_array(), normal, [u_next, 1.0]);

        buffers.push_triangle(base, base + 1, base + 2);
        buffers.push_triangle(base + 2, base + 1, base + 3);
    }

    // Cap rings: one bottom and one top vertex per side, planar UVs
    let ring_base = buffers.vertex_count() as u32;
    for i in 0..side_count {
        let bottom = ring_point(i, -half_height).to_array();
        let top = ring_point(i, half_height).to_array();
        let uv = [
            (bottom[0] / radius + 1.0) * 0.5,
            (bottom[2] / radius + 1.0) * 0.5,
        ];

        buffers.push_vertex(bottom, [0.0, -1.0, 0.0], uv);
        buffers.push_vertex(top, [0.0, 1.0, 0.0], uv);
    }

    let center_bottom =
        buffers.push_vertex([0.0, -half_height, 0.0], [0.0, -1.0, 0.0], [0.5, 0.5]);
    let center_top = buffers.push_vertex([0.0, half_height, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5]);

    // Cap fans; bottom winding reversed relative to the top so both caps
    // face outward
    for i in 0..side_count {
        let next = (i + 1) % side_count;

        buffers.push_triangle(center_bottom, ring_base + i * 2, ring_base + next * 2);
        buffers.push_triangle(center_top, ring_base + next * 2 + 1, ring_base + i * 2 + 1);
    }

    buffers.calculate_bounding_box();
    buffers
}
