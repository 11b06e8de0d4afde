//! Capsule mesh generation (hemisphere caps over a cylindrical band)

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use crate::buffers::MeshBuffers;

/// Generate a capsule centered at the origin, axis along Y
///
/// `height` is the total height including both hemispherical caps, so the
/// cylindrical band has length `height - 2 * radius`. Callers must keep
/// `height > 2 * radius`; smaller values collapse the band and are not
/// corrected here. `smoothing` drives both the radial and the height segment
/// counts.
///
/// Row layout along the vertical axis: the bottom `smoothing / 2` rows sweep
/// the lower hemisphere from -90 to 0 degrees, the top `smoothing / 2` rows
/// sweep the upper hemisphere from 0 to +90 degrees, and any rows strictly
/// between sit on the cylindrical band. Each ring carries `smoothing + 1`
/// vertices: the seam column is duplicated so U can run the full 0..1 range.
pub fn generate_capsule_mesh(radius: f32, height: f32, smoothing: u32) -> MeshBuffers {
    let radial_segments = smoothing;
    let height_segments = smoothing;
    let hemisphere_rows = height_segments / 2;

    let vertex_count = ((radial_segments + 1) * (height_segments + 1)) as usize;
    let triangle_count = (radial_segments * height_segments * 2) as usize;
    let mut buffers = MeshBuffers::with_capacity(vertex_count, triangle_count);

    let cylinder_height = height - 2.0 * radius;
    let half_height = cylinder_height / 2.0;
    let angle_step = 2.0 * PI / radial_segments as f32;

    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;

        let (ring_radius, y_pos, normal_y) = if y < hemisphere_rows {
            // Lower hemisphere, -90 to 0 degrees around its own center
            let theta = FRAC_PI_2 * (y as f32 / hemisphere_rows as f32 - 1.0);
            (
                radius * theta.cos(),
                -half_height + radius * theta.sin(),
                radius * theta.sin(),
            )
        } else if y >= height_segments - hemisphere_rows {
            // Upper hemisphere, 0 to +90 degrees
            let row = y - (height_segments - hemisphere_rows);
            let theta = FRAC_PI_2 * row as f32 / hemisphere_rows as f32;
            (
                radius * theta.cos(),
                half_height + radius * theta.sin(),
                radius * theta.sin(),
            )
        } else {
            // Cylindrical band; side normals stay exactly horizontal
            (radius, (v - 0.5) * cylinder_height, 0.0)
        };

        for x in 0..=radial_segments {
            let angle = x as f32 * angle_step;
            let x_pos = angle.cos() * ring_radius;
            let z_pos = angle.sin() * ring_radius;

            let normal = Vec3::new(x_pos, normal_y, z_pos).normalize().to_array();
            let uv = [x as f32 / radial_segments as f32, v];

            buffers.push_vertex([x_pos, y_pos, z_pos], normal, uv);
        }
    }

    // Two triangles per grid cell over every row; no separate cap centers,
    // the pole rows converge as the ring radius approaches zero
    for y in 0..height_segments {
        for x in 0..radial_segments {
            let current = y * (radial_segments + 1) + x;
            let next = current + radial_segments + 1;

            buffers.push_triangle(current, next, current + 1);
            buffers.push_triangle(current + 1, next, next + 1);
        }
    }

    buffers.calculate_bounding_box();
    buffers
}
