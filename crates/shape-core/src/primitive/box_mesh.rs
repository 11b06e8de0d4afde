//! Box mesh generation

use crate::buffers::MeshBuffers;

/// Generate an axis-aligned box centered at the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// # Returns
/// 24 vertices (4 per face, duplicated at shared edges so every face keeps a
/// flat normal), 12 triangles
pub fn generate_box_mesh(width: f32, height: f32, depth: f32) -> MeshBuffers {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    let mut buffers = MeshBuffers::with_capacity(24, 12);

    // Helper to add a face: 4 corners, unit-square UVs, two triangles
    let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let base = buffers.vertex_count() as u32;
        for (corner, uv) in corners.into_iter().zip(uvs) {
            buffers.push_vertex(corner, normal, uv);
        }
        buffers.push_triangle(base, base + 1, base + 2);
        buffers.push_triangle(base, base + 2, base + 3);
    };

    // Front face (+Z)
    add_face(
        [[-hw, -hh, hd], [hw, -hh, hd], [hw, hh, hd], [-hw, hh, hd]],
        [0.0, 0.0, 1.0],
    );

    // Back face (-Z)
    add_face(
        [
            [hw, -hh, -hd],
            [-hw, -hh, -hd],
            [-hw, hh, -hd],
            [hw, hh, -hd],
        ],
        [0.0, 0.0, -1.0],
    );

    // Top face (+Y)
    add_face(
        [[-hw, hh, hd], [hw, hh, hd], [hw, hh, -hd], [-hw, hh, -hd]],
        [0.0, 1.0, 0.0],
    );

    // Bottom face (-Y)
    add_face(
        [
            [-hw, -hh, -hd],
            [hw, -hh, -hd],
            [hw, -hh, hd],
            [-hw, -hh, hd],
        ],
        [0.0, -1.0, 0.0],
    );

    // Right face (+X)
    add_face(
        [[hw, -hh, hd], [hw, -hh, -hd], [hw, hh, -hd], [hw, hh, hd]],
        [1.0, 0.0, 0.0],
    );

    // Left face (-X)
    add_face(
        [
            [-hw, -hh, -hd],
            [-hw, -hh, hd],
            [-hw, hh, hd],
            [-hw, hh, -hd],
        ],
        [-1.0, 0.0, 0.0],
    );

    buffers.calculate_bounding_box();
    buffers
}
