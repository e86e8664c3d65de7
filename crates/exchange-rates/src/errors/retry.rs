/// Classification for refetch policy.
///
/// The crate never retries on its own. Callers that schedule periodic
/// refreshes use this to decide whether fetching again can help.
///
/// | Class | Fetch again? |
/// |-------|--------------|
/// | `Never` | No, the same request will fail the same way |
/// | `Refetch` | Yes, on the caller's next refresh tick |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The endpoint answered with something we can't use.
    /// Fetching the same document again won't help until the API changes.
    Never,

    /// Transient failure: connection problem, timeout, server error or
    /// rate limiting. A later fetch may succeed.
    Refetch,
}
