//! `orrery_geometry` — procedural mesh construction for the Orrery demo.
//!
//! # Module layout
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | `mesh`       | Immutable [`Mesh`] — position/normal/index streams    |
//! | `primitives` | Icosphere, cube and square factories                  |
//! | `error`      | [`GeometryError`] — invalid construction arguments    |
//!
//! Everything here is synchronous pure computation: a factory either
//! returns a fully-built [`Mesh`] or fails before a single vertex is
//! pooled.  Uploading a mesh to the GPU is the renderer's job.

pub mod error;
pub mod mesh;
pub mod primitives;

pub use error::GeometryError;
pub use mesh::Mesh;

pub use glam;
