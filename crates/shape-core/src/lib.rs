//! Shape Editor Core
//!
//! This crate contains the data model and mesh generation for the shape
//! editor:
//! - ShapeParameters: typed parameter bag filled in by the editor panel
//! - MeshBuffers: vertex/normal/UV/index buffers handed to the renderer
//! - primitive: per-shape mesh generators (box, sphere, prism, capsule)
//! - Shape: a generated mesh entity with a flat material color
//! - factory: kind + parameter dispatch to the matching generator

pub mod buffers;
pub mod constants;
pub mod factory;
pub mod parameters;
pub mod primitive;
pub mod shape;

pub use buffers::*;
pub use constants::*;
pub use factory::*;
pub use parameters::*;
pub use primitive::*;
pub use shape::*;
