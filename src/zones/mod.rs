//! Position-axis zones and the two color blend modes over them.

/// Boundary and weighted color blending.
pub mod blend;
/// Distribution → zone tiling.
pub mod builder;
