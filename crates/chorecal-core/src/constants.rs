/// Shared naming constants used across crates
pub const APP_NAME: &str = "chorecal";

/// Default store file, relative to the working directory unless overridden
/// by `storage.path` in the configuration.
pub const STORE_FILE_NAME: &str = const_str::concat!(APP_NAME, ".json");

/// Canonical occurrence-key format. All dates cross crate boundaries in
/// this shape; completion maps are keyed by it.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
