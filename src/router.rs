//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. No magic, no reflection.
//! You register a path, you get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// One radix tree per HTTP method: O(path-length) lookup, no allocations on
/// the hot path. Build it once at startup; hand it to
/// [`Pipeline::routes`](crate::Pipeline::routes). Each [`Router::on`] call
/// returns `self` so registrations chain naturally.
///
/// The router is the end of the middleware chain. When the last stage calls
/// its continuation, the router resolves the handler and produces the
/// response; an unmatched method or path answers `404 Not Found`.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// ```rust,no_run
    /// # use entre::{Method, Request, Response, Router};
    /// # async fn home(_: Request) -> Response { Response::text("") }
    /// # async fn about(_: Request) -> Response { Response::text("") }
    /// # async fn sum(_: Request) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get,  "/",      home)
    ///     .on(Method::Get,  "/about", about)
    ///     .on(Method::Post, "/sum",   sum);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a registrable route, e.g. when it conflicts
    /// with one already present.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Resolves and runs the handler for `req`.
    pub(crate) async fn route(&self, req: Request) -> Response {
        let handler = self
            .routes
            .get(&req.method())
            .and_then(|tree| tree.at(req.path()).ok())
            .map(|m| Arc::clone(m.value));

        match handler {
            Some(handler) => handler.call(req).await,
            None          => Response::status(Status::NotFound),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
