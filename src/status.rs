//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use entre::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NoContent);
//!
//! // bytes from anywhere: serde_json::to_vec(&val).unwrap(), format!(r#"..."#).into_bytes(), etc.
//! # let bytes: Vec<u8> = vec![];
//! Response::builder()
//!     .status(Status::Created)
//!     .header("location", "/users/42")
//!     .json(bytes);
//!
//! // return Status directly from a handler; entre wraps it
//! async fn delete_user(_req: entre::Request) -> Status {
//!     Status::NoContent
//! }
//! ```

/// The status codes handlers actually reach for.
pub enum Status {
    // ── 1xx Informational ─────────────────────────────────────────────────────
    Continue,             // 100
    SwitchingProtocols,   // 101

    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200
    Created,              // 201
    Accepted,             // 202
    NoContent,            // 204

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    MovedPermanently,     // 301
    Found,                // 302
    SeeOther,             // 303
    NotModified,          // 304
    TemporaryRedirect,    // 307
    PermanentRedirect,    // 308

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    Unauthorized,         // 401
    Forbidden,            // 403
    NotFound,             // 404
    MethodNotAllowed,     // 405
    NotAcceptable,        // 406
    RequestTimeout,       // 408
    Conflict,             // 409
    Gone,                 // 410
    ContentTooLarge,      // 413
    UnsupportedMediaType, // 415
    ImATeapot,            // 418
    UnprocessableContent, // 422
    TooManyRequests,      // 429

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
    NotImplemented,       // 501
    BadGateway,           // 502
    ServiceUnavailable,   // 503
    GatewayTimeout,       // 504
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Continue             => 100,
            Status::SwitchingProtocols   => 101,
            Status::Ok                   => 200,
            Status::Created              => 201,
            Status::Accepted             => 202,
            Status::NoContent            => 204,
            Status::MovedPermanently     => 301,
            Status::Found                => 302,
            Status::SeeOther             => 303,
            Status::NotModified          => 304,
            Status::TemporaryRedirect    => 307,
            Status::PermanentRedirect    => 308,
            Status::BadRequest           => 400,
            Status::Unauthorized         => 401,
            Status::Forbidden            => 403,
            Status::NotFound             => 404,
            Status::MethodNotAllowed     => 405,
            Status::NotAcceptable        => 406,
            Status::RequestTimeout       => 408,
            Status::Conflict             => 409,
            Status::Gone                 => 410,
            Status::ContentTooLarge      => 413,
            Status::UnsupportedMediaType => 415,
            Status::ImATeapot            => 418,
            Status::UnprocessableContent => 422,
            Status::TooManyRequests      => 429,
            Status::InternalServerError  => 500,
            Status::NotImplemented       => 501,
            Status::BadGateway           => 502,
            Status::ServiceUnavailable   => 503,
            Status::GatewayTimeout       => 504,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_wire_codes() {
        assert_eq!(u16::from(Status::Ok), 200);
        assert_eq!(u16::from(Status::NoContent), 204);
        assert_eq!(u16::from(Status::NotFound), 404);
        assert_eq!(u16::from(Status::InternalServerError), 500);
    }
}
