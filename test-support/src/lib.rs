pub mod fixture_file;
pub mod timeouts;

// Re-export commonly used items
pub use fixture_file::FixtureFile;

/// Check if running in CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
}
