//! Testability ports for injecting randomness.

/// Uniform integer source over a closed range.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Returns a value in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
