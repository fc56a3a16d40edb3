//! JSON-body arithmetic, minus the reply.
//!
//! The JSON body stage parses `{"a":…,"b":…}` ahead of the handler. The
//! handler computes the sum, logs it, and answers `204 No Content`: the sum
//! never leaves the process. Useful when exercising clients against a
//! server that acknowledges but does not report.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example sum_json
//!
//! Try:
//!   curl -i -X POST http://localhost:3002/sum \
//!        -H 'content-type: application/json' \
//!        -d '{"a":1,"b":2}'

use entre::middleware::JsonBody;
use entre::{Method, Pipeline, Request, Response, Router, Server, Status};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Pipeline::new()
        .with(JsonBody)
        .routes(Router::new().on(Method::Post, "/sum", sum));

    Server::bind("0.0.0.0:3002")
        .serve(app)
        .await
        .expect("server error");
}

// POST /sum
//
// Computes and logs the sum, then acknowledges without a body.
async fn sum(req: Request) -> Response {
    let sum = req.body_param("a").to_number() + req.body_param("b").to_number();
    info!(sum = sum.as_f64(), "computed");
    Response::status(Status::NoContent)
}
