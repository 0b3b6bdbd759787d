use thiserror::Error;

/// Invalid construction arguments, reported synchronously at generation
/// time.  A failed build never partially constructs a [`crate::Mesh`].
///
/// Internal invariant violations (an index escaping the vertex pool) are
/// programming-logic errors and panic via `debug_assert!` instead of
/// surfacing here.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    #[error("center must have finite components")]
    NonFiniteCenter,

    #[error("subdivision level {requested} exceeds the supported maximum {max}")]
    SubdivisionsTooDeep { requested: u32, max: u32 },
}
