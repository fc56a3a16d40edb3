//! Request counting.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::middleware::{BoxFuture, Middleware, Next};
use crate::request::Request;

/// Counts every request that crosses the pipeline.
///
/// The counter increments on the way in, before routing, so requests that
/// end in `404 Not Found` count too. Clones share the same underlying total:
/// register one clone as a stage and keep another to read from a reporting
/// handler.
///
/// ```rust
/// use entre::middleware::RequestCounter;
/// use entre::{Method, Pipeline, Request, Response, Router};
///
/// let counter = RequestCounter::new();
/// let report = {
///     let counter = counter.clone();
///     move |_req: Request| {
///         let counter = counter.clone();
///         async move { Response::text(format!("{} so far", counter.read())) }
///     }
/// };
///
/// let app = Pipeline::new()
///     .with(counter)
///     .routes(Router::new().on(Method::Get, "/requests", report));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestCounter {
    total: Arc<AtomicU64>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the total and returns the updated value.
    pub fn increment(&self) -> u64 {
        self.total.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The number of requests seen so far.
    ///
    /// Relaxed ordering: the total is a statistic, not a synchronization
    /// point, and may trail in-flight increments by a moment.
    pub fn read(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}

impl Middleware for RequestCounter {
    fn name(&self) -> &'static str {
        "request_counter"
    }

    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
        self.increment();
        Box::pin(next.run(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_total() {
        let counter = RequestCounter::new();
        let alias = counter.clone();

        assert_eq!(counter.increment(), 1);
        assert_eq!(alias.increment(), 2);
        assert_eq!(counter.read(), 2);
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(RequestCounter::new().read(), 0);
    }
}
