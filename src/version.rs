// Build metadata reported by GET /version

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml; `nocwatch` for both binaries.
pub const NAME: &str = env!("CARGO_PKG_NAME");
