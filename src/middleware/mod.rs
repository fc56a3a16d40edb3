//! Middleware layer.
//!
//! Middleware intercepts requests before the router sees them and is the
//! right place for cross-cutting concerns: request logging, counters, body
//! parsing, authentication-header inspection.
//!
//! A stage receives the [`Request`] by value together with a [`Next`]
//! continuation. It may answer immediately, or call [`Next::run`] to hand
//! the request to the rest of the chain and get the response back on the way
//! out. `run` consumes the `Next`, so a stage continues the chain at most
//! once; dropping the continuation without calling it is the short-circuit.
//!
//! Built-in middleware:
//! - [`Trace`] logs method, URL and arrival time on the way in, status and
//!   latency on the way out
//! - [`RequestCounter`] counts every request crossing the pipeline
//! - [`JsonBody`] parses JSON bodies ahead of the handlers
//!
//! # Writing your own
//!
//! ```rust
//! use entre::{BoxFuture, Middleware, Next, Request, Response, Status};
//!
//! struct RequireApiKey;
//!
//! impl Middleware for RequireApiKey {
//!     fn name(&self) -> &'static str {
//!         "require_api_key"
//!     }
//!
//!     fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
//!         Box::pin(async move {
//!             if req.header("x-api-key").is_some() {
//!                 next.run(req).await
//!             } else {
//!                 Response::status(Status::Unauthorized)
//!             }
//!         })
//!     }
//! }
//! ```

mod counter;
mod json;
mod trace;

pub use counter::RequestCounter;
pub use json::JsonBody;
pub use trace::Trace;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A heap-allocated future tied to the stage that produced it.
pub type BoxFuture<'a, T = Response> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One stage of the request pipeline.
///
/// Implementations must be cheap to share: the pipeline holds each stage once
/// and every in-flight request dispatches through the same instance.
pub trait Middleware: Send + Sync + 'static {
    /// A short, stable name for logs and [`Pipeline::stage_names`](crate::Pipeline::stage_names).
    fn name(&self) -> &'static str;

    /// Handles `req`, either by producing a [`Response`] directly or by
    /// calling `next.run(req)` to delegate to the rest of the chain.
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a>;
}

/// A shared, type-erased pipeline stage.
pub(crate) type BoxedMiddleware = Arc<dyn Middleware>;

/// The continuation handed to each stage.
///
/// A `Next` knows where the current stage sits in the chain. Running it
/// dispatches the request to the stage after that position, or to the router
/// once the chain is exhausted. It borrows the pipeline rather than owning
/// any part of it, so constructing one is free.
pub struct Next<'a> {
    chain: &'a [BoxedMiddleware],
    index: usize,
    router: &'a Router,
}

impl<'a> Next<'a> {
    pub(crate) fn new(chain: &'a [BoxedMiddleware], router: &'a Router) -> Self {
        Self { chain, index: 0, router }
    }

    /// Passes `req` onward and resolves to the response.
    ///
    /// Consumes the continuation, so each stage can continue the chain at
    /// most once.
    pub async fn run(self, req: Request) -> Response {
        match self.chain.get(self.index) {
            Some(stage) => {
                let next = Next {
                    chain: self.chain,
                    index: self.index + 1,
                    router: self.router,
                };
                stage.handle(req, next).await
            }
            None => self.router.route(req).await,
        }
    }
}
