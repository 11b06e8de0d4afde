//! Sphere mesh generation (UV sphere)

use std::f32::consts::PI;

use crate::buffers::MeshBuffers;

/// Generate a UV sphere centered at the origin
///
/// `smoothing` drives both the latitude and longitude segment counts, giving
/// a (smoothing + 1) x (smoothing + 1) vertex grid. The pole rows stay
/// duplicated across the longitude seam; welding them would break the
/// uniform UV mapping.
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `smoothing` - Segment count for both axes
pub fn generate_sphere_mesh(radius: f32, smoothing: u32) -> MeshBuffers {
    let lat_segments = smoothing;
    let lon_segments = smoothing;

    let vertex_count = ((lat_segments + 1) * (lon_segments + 1)) as usize;
    let triangle_count = (lat_segments * lon_segments * 2) as usize;
    let mut buffers = MeshBuffers::with_capacity(vertex_count, triangle_count);

    // Vertices, normals and UVs
    for lat in 0..=lat_segments {
        let theta = PI * lat as f32 / lat_segments as f32; // 0 to PI, +Y pole first
        let sin_lat = theta.sin();
        let cos_lat = theta.cos();

        for lon in 0..=lon_segments {
            let phi = 2.0 * PI * lon as f32 / lon_segments as f32; // 0 to 2*PI
            let sin_lon = phi.sin();
            let cos_lon = phi.cos();

            let position = [
                radius * sin_lat * cos_lon,
                radius * cos_lat,
                radius * sin_lat * sin_lon,
            ];
            // Outward normal of a sphere at the origin is the unit position
            let normal = [sin_lat * cos_lon, cos_lat, sin_lat * sin_lon];
            let uv = [
                lon as f32 / lon_segments as f32,
                lat as f32 / lat_segments as f32,
            ];

            buffers.push_vertex(position, normal, uv);
        }
    }

    // Two triangles per grid cell, wound outward
    for lat in 0..lat_segments {
        for lon in 0..lon_segments {
            let current = lat * (lon_segments + 1) + lon;
            let next = current + lon_segments + 1;

            buffers.push_triangle(current, current + 1, next);
            buffers.push_triangle(next, current + 1, next + 1);
        }
    }

    buffers.calculate_bounding_box();
    buffers
}
