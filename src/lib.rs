//! # entre
//!
//! A minimal HTTP framework built around an explicit middleware pipeline.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Every request walks the same path: stage by stage through an ordered
//! [`middleware`] chain, then into the [`Router`], which resolves a handler
//! and produces the [`Response`]. Each stage owns the request while it holds
//! it and chooses, by calling its continuation or not, whether the request
//! travels further. That single rule is the whole framework:
//!
//! - **Ordering**: stages run in registration order on the way in, and the
//!   response unwinds back through the stages that awaited it.
//! - **Ownership**: the [`Request`] moves by value from stage to stage.
//!   No locks, no shared mutation, no aliasing.
//! - **One answer**: producing a [`Response`] is the only way to finish, so
//!   a request cannot be answered twice or not at all. A panicking stage or
//!   handler is caught at the pipeline boundary and answered with 500.
//!
//! Cross-cutting behavior lives in stages ([`middleware::Trace`],
//! [`middleware::RequestCounter`], [`middleware::JsonBody`], or your own).
//! Per-route behavior lives in handlers. TLS, rate limiting, body-size
//! limits and slow-client protection belong to the proxy in front.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use entre::middleware::{JsonBody, Trace};
//! use entre::{Method, Pipeline, Request, Router, Server};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Pipeline::new()
//!         .with(Trace)
//!         .with(JsonBody)
//!         .routes(Router::new().on(Method::Post, "/sum", sum));
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//!
//! // `a` and `b` may arrive as JSON numbers or numeric strings; anything
//! // else sums to null.
//! async fn sum(req: Request) -> serde_json::Value {
//!     let sum = req.body_param("a").to_number() + req.body_param("b").to_number();
//!     json!({ "sum": sum })
//! }
//! ```

mod error;
mod handler;
mod method;
mod param;
mod pipeline;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod middleware;

pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use middleware::{BoxFuture, Middleware, Next};
pub use param::{Number, Param};
pub use pipeline::Pipeline;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;
