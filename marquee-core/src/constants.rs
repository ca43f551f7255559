/// Marquee version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum absolute difference tolerated between `matrix[i][j]` and `matrix[j][i]`.
///
/// Matrices usually arrive as float32 cosine scores widened to f64.
pub const SYMMETRY_TOLERANCE: f64 = 1e-6;

/// Text shown in place of a poster when no asset could be resolved.
pub const NO_ASSET_SENTINEL: &str = "No poster";

/// Upper bound on the asset fan-out width.
pub const MAX_ASSET_PARALLELISM: usize = 64;
