//! Remote edge-resolution capability.

/// Synchronous edge resolution for lazily populated graphs.
///
/// Implementations wrap an external fetch layer (a SPARQL endpoint, a
/// triple-store client, a fixture) behind a single blocking call. The graph
/// invokes [`resolve`](EdgeResolver::resolve) the first time the outgoing
/// edges of a vertex are requested, merges the result, and never asks for
/// that vertex again.
///
/// Failures and timeouts are reported as an empty set: from the walker's
/// point of view an unresolvable vertex is a dead end, not an error. Network
/// concerns (batching, caching, retries) belong to the implementation.
pub trait EdgeResolver: Send + Sync {
    /// Resolve the outgoing edges of `entity` as (predicate label, object
    /// label) pairs.
    fn resolve(&self, entity: &str) -> Vec<(String, String)>;
}

impl<F> EdgeResolver for F
where
    F: Fn(&str) -> Vec<(String, String)> + Send + Sync,
{
    fn resolve(&self, entity: &str) -> Vec<(String, String)> {
        self(entity)
    }
}
