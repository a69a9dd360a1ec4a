/// Classification for retry policy.
///
/// The normalizer never retries on its own. Callers use this to decide
/// whether asking again later can change the outcome.
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No, the same input resolves the same way |
/// | `WithBackoff` | Yes, the broker universe could not be obtained |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - empty input or an instrument the broker does not list.
    Never,

    /// Transient infrastructure failure while listing the broker universe.
    /// Retry after a backoff chosen by the caller.
    WithBackoff,
}
