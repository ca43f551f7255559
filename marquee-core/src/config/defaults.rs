// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_CATALOG_PATH: &str = "artifacts/movie_dict.json";
pub const DEFAULT_MATRIX_PATH: &str = "artifacts/similarity_vectors.bin";

// --- Recommendation ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_EVAL_K: usize = 5;
pub const DEFAULT_ASSET_PARALLELISM: usize = 8;

// --- Assets ---
pub const DEFAULT_TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";
pub const DEFAULT_ASSET_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_ASSET_MAX_RETRIES: u32 = 2;
pub const DEFAULT_ASSET_INITIAL_BACKOFF_MS: u64 = 250;
pub const DEFAULT_ASSET_MAX_BACKOFF_MS: u64 = 4_000;
pub const DEFAULT_ASSET_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_ASSET_CACHE_TTL_SECS: u64 = 86_400; // 24 hours

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
