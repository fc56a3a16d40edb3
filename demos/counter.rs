//! Request counting across an application.
//!
//! Every request bumps a shared counter on its way through the pipeline,
//! whether or not it matches a route; `/requests` reports the total seen so
//! far.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example counter
//!
//! Try:
//!   curl http://localhost:3001/
//!   curl http://localhost:3001/about
//!   curl http://localhost:3001/requests

use entre::middleware::RequestCounter;
use entre::{Method, Pipeline, Request, Response, Router, Server};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestReport {
    total_requests: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let counter = RequestCounter::new();

    // The reporting handler reads the same total the stage increments.
    let report = {
        let counter = counter.clone();
        move |_req: Request| {
            let counter = counter.clone();
            async move {
                let report = RequestReport { total_requests: counter.read() };
                Response::json(serde_json::to_vec(&report).expect("report serializes"))
            }
        }
    };

    let app = Pipeline::new().with(counter).routes(
        Router::new()
            .on(Method::Get, "/", home)
            .on(Method::Get, "/about", about)
            .on(Method::Get, "/requests", report),
    );

    Server::bind("0.0.0.0:3001")
        .serve(app)
        .await
        .expect("server error");
}

// GET /
async fn home(_req: Request) -> &'static str {
    "Welcome to the homepage!"
}

// GET /about
async fn about(_req: Request) -> &'static str {
    "This is the about page."
}
