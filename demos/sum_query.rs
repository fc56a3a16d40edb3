//! Query-string arithmetic with permissive coercion.
//!
//! `GET /sum?a=3&b=4` answers `{"a":3,"b":4,"sum":7}`. Operands that are
//! absent or fail to parse read as NaN, NaN is sticky through the addition,
//! and NaN encodes as `null` on the wire.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example sum_query
//!
//! Try:
//!   curl 'http://localhost:3000/sum?a=3&b=4'
//!   curl 'http://localhost:3000/sum?a=banana&b=4'
//!   curl 'http://localhost:3000/sum?b=4'

use entre::middleware::Trace;
use entre::{Method, Number, Pipeline, Request, Response, Router, Server};
use serde::Serialize;

#[derive(Serialize)]
struct SumReport {
    a: Number,
    b: Number,
    sum: Number,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Pipeline::new()
        .with(Trace)
        .routes(Router::new().on(Method::Get, "/sum", sum));

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// GET /sum?a=…&b=…
async fn sum(req: Request) -> Response {
    let a = req.query_param("a").to_number();
    let b = req.query_param("b").to_number();
    let report = SumReport { a, b, sum: a + b };
    Response::json(serde_json::to_vec(&report).expect("report serializes"))
}
