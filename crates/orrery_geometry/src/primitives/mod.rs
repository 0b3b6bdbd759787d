//! Built-in mesh factories.
//!
//! Each primitive exposes a single `generate` entry point returning a
//! finished [`crate::Mesh`].  The icosphere is the only one with a real
//! algorithm; cube and square emit fixed tables translated by an origin.

pub mod cube;
pub mod icosphere;
pub mod square;
