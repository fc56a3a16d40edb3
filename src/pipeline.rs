//! The middleware pipeline.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tracing::error;

use crate::middleware::{BoxedMiddleware, Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// An ordered chain of [`Middleware`] stages with a [`Router`] at the end.
///
/// Stages run in registration order. Each one decides whether the request
/// travels further; the router terminates the chain and an empty pipeline is
/// just the router. Build the pipeline once at startup and hand it to
/// [`Server::serve`](crate::Server::serve).
///
/// ```rust
/// use entre::middleware::{JsonBody, Trace};
/// use entre::{Pipeline, Router};
///
/// let app = Pipeline::new()
///     .with(Trace)
///     .with(JsonBody)
///     .routes(Router::new());
///
/// assert_eq!(app.stage_names(), ["trace", "json_body"]);
/// ```
pub struct Pipeline {
    chain: Vec<BoxedMiddleware>,
    router: Router,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { chain: Vec::new(), router: Router::new() }
    }

    /// Appends a stage to the end of the chain. Returns `self` for chaining.
    pub fn with(mut self, stage: impl Middleware) -> Self {
        self.chain.push(Arc::new(stage));
        self
    }

    /// Installs the router that terminates the chain.
    pub fn routes(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    /// The registered stage names, in the order they run.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.chain.iter().map(|s| s.name()).collect()
    }

    /// Runs one request through the chain and the router.
    ///
    /// Every request resolves to exactly one response. A panicking stage or
    /// handler is caught here and answered with `500 Internal Server Error`,
    /// and the connection keeps serving.
    pub async fn dispatch(&self, req: Request) -> Response {
        // Stages are shared immutably behind Arc; a panic cannot leave
        // partial state behind, so resuming after catching one is sound.
        let outcome = AssertUnwindSafe(Next::new(&self.chain, &self.router).run(req))
            .catch_unwind()
            .await;

        match outcome {
            Ok(response) => response,
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&'static str>()
                    .map(|s| (*s).to_owned())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_owned());
                error!(%reason, "request handling panicked; answering 500");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::middleware::BoxFuture;

    struct Named(&'static str);

    impl Middleware for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
            Box::pin(next.run(req))
        }
    }

    #[test]
    fn stage_names_follow_registration_order() {
        let pipeline = Pipeline::new().with(Named("first")).with(Named("second"));
        assert_eq!(pipeline.stage_names(), ["first", "second"]);
    }

    #[tokio::test]
    async fn an_empty_pipeline_is_just_the_router() {
        let pipeline = Pipeline::new();
        let req = Request::builder(Method::Get, "/anything").build();
        assert_eq!(pipeline.dispatch(req).await.status_code(), 404);
    }

    #[tokio::test]
    async fn pass_through_stages_do_not_change_the_outcome() {
        let pipeline = Pipeline::new()
            .with(Named("a"))
            .with(Named("b"))
            .routes(Router::new().on(Method::Get, "/ping", |_req: Request| async {
                Response::text("pong")
            }));

        let res = pipeline.dispatch(Request::builder(Method::Get, "/ping").build()).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"pong");
    }
}
