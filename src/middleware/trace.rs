//! Request logging.

use std::time::Instant;

use chrono::SecondsFormat;
use tracing::info;

use crate::middleware::{BoxFuture, Middleware, Next};
use crate::request::Request;

/// Logs one line per request on the way in and one on the way out.
///
/// The inbound line carries the method, the full request target, and the
/// arrival timestamp in RFC 3339 form with millisecond precision
/// (`2026-08-24T12:00:00.000Z`). The outbound line carries the status code
/// and the elapsed handling time.
///
/// Register it first so the inbound line reflects the request as it arrived,
/// before any other stage has touched it.
pub struct Trace;

impl Middleware for Trace {
    fn name(&self) -> &'static str {
        "trace"
    }

    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
        Box::pin(async move {
            let method = req.method();
            let url = req.uri().to_string();
            let received_at = req.received_at().to_rfc3339_opts(SecondsFormat::Millis, true);
            info!(%method, %url, %received_at, "request");

            let started = Instant::now();
            let response = next.run(req).await;
            info!(
                status = response.status_code(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "response"
            );
            response
        })
    }
}
