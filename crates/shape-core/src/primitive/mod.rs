//! Primitive mesh generation for shape kinds
//!
//! Generates positions, normals, UVs, and indices for the four shapes:
//! - Box (rectangular prism, flat per-face normals)
//! - Sphere (UV sphere, pole rows kept across the longitude seam)
//! - Prism (N-sided right prism with flat side panels and fan caps)
//! - Capsule (hemisphere caps over a cylindrical band)
//!
//! All generators are pure functions from validated parameters to a fresh
//! [`MeshBuffers`](crate::buffers::MeshBuffers) value. Shapes are centered at
//! the origin with Y as the vertical axis.

mod box_mesh;
mod capsule;
mod prism;
mod sphere;

pub use box_mesh::generate_box_mesh;
pub use capsule::generate_capsule_mesh;
pub use prism::generate_prism_mesh;
pub use sphere::generate_sphere_mesh;
