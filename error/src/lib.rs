//! Shared error trait implemented by every crate-local error enum.
//!
//! Kept dependency-free so that any crate in the workspace can implement
//! it without pulling in `thiserror` or anything else transitively.

/// Marker supertrait for this workspace's error enums.
///
/// Lets callers that cross crate boundaries (the `cli` binary, mainly)
/// hold a single `Box<dyn AuroraError>` instead of matching on each
/// crate's concrete error type.
pub trait AuroraError: std::error::Error + Send + Sync + 'static {
    /// Short machine-readable category, used in log lines and CLI output.
    fn kind(&self) -> &'static str {
        "error"
    }
}
