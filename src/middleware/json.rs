//! JSON body parsing.

use serde_json::Value;
use tracing::debug;

use crate::middleware::{BoxFuture, Middleware, Next};
use crate::request::Request;

/// Parses JSON request bodies ahead of the handlers.
///
/// A body is parsed when the `content-type` declares JSON
/// (`application/json`, or any type with a `+json` suffix) and the body is
/// non-empty. The parsed document replaces the raw bytes on the [`Request`],
/// where [`Request::body_param`] reads from it.
///
/// The stage never rejects. A missing declaration, an empty body, or a body
/// that fails to parse leaves the request as it was and the chain continues;
/// handlers observe the difference as [`Param::Missing`](crate::Param::Missing).
pub struct JsonBody;

/// `true` when the declared media type is JSON, parameters ignored.
fn declares_json(content_type: Option<&str>) -> bool {
    let Some(mime) = content_type.and_then(|ct| ct.split(';').next()) else {
        return false;
    };
    let mime = mime.trim();
    mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
}

impl Middleware for JsonBody {
    fn name(&self) -> &'static str {
        "json_body"
    }

    fn handle<'a>(&'a self, mut req: Request, next: Next<'a>) -> BoxFuture<'a> {
        Box::pin(async move {
            if declares_json(req.header("content-type")) && !req.body().is_empty() {
                match serde_json::from_slice::<Value>(req.body()) {
                    Ok(value) => req.set_json(value),
                    Err(e) => {
                        debug!(error = %e, "body declared JSON but did not parse; leaving it raw");
                    }
                }
            }
            next.run(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_json_media_types() {
        assert!(declares_json(Some("application/json")));
        assert!(declares_json(Some("application/json; charset=utf-8")));
        assert!(declares_json(Some("APPLICATION/JSON")));
        assert!(declares_json(Some("application/problem+json")));
    }

    #[test]
    fn ignores_everything_else() {
        assert!(!declares_json(Some("text/plain")));
        assert!(!declares_json(Some("application/jsonp")));
        assert!(!declares_json(None));
    }
}
