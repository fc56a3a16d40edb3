//! Incoming HTTP request type.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Uri};
use serde_json::Value;

use crate::method::Method;
use crate::param::Param;

/// An incoming HTTP request.
///
/// A `Request` is owned by exactly one party at a time: the server builds it,
/// each middleware stage receives it by value and passes it on, and the final
/// handler consumes it. There is no shared mutation to reason about; if a
/// stage wants to enrich the request (as the JSON body stage does), it does
/// so while it holds the value.
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Bytes,
    json: Option<Value>,
    received_at: DateTime<Utc>,
}

impl Request {
    pub(crate) fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Self {
        // Pairs decode independently; one that fails reads as absent without
        // taking the rest of the query with it.
        let query = uri
            .query()
            .map(|q| {
                q.split('&')
                    .filter_map(|pair| {
                        serde_urlencoded::from_str::<Vec<(String, String)>>(pair).ok()
                    })
                    .flatten()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            method,
            uri,
            headers,
            query,
            body,
            json: None,
            received_at: Utc::now(),
        }
    }

    /// Starts building a request by hand, mostly useful in tests.
    ///
    /// # Panics
    ///
    /// Panics if `uri` does not parse as a URI.
    pub fn builder(method: Method, uri: &str) -> RequestBuilder {
        RequestBuilder {
            method,
            uri: uri.parse().expect("invalid uri"),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The path component of the request target, e.g. `"/sum"`.
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Case-insensitive header lookup. Values that are not valid UTF-8 read
    /// as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The raw request body. Empty once a body-parsing stage has consumed it.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The parsed JSON body, if a body-parsing stage produced one.
    pub fn json(&self) -> Option<&Value> {
        self.json.as_ref()
    }

    /// When the request was constructed, before any stage ran.
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Looks up a query parameter by name.
    ///
    /// When a key repeats (`?a=1&a=2`), the first occurrence wins.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a query parameter as a [`Param`].
    ///
    /// Query values are always text on the wire, so a present key is
    /// [`Param::Text`] and an absent one is [`Param::Missing`].
    pub fn query_param(&self, name: &str) -> Param {
        match self.query(name) {
            Some(v) => Param::Text(v.to_owned()),
            None    => Param::Missing,
        }
    }

    /// Looks up a top-level key in the parsed JSON body as a [`Param`].
    ///
    /// JSON strings map to [`Param::Text`] and JSON numbers to
    /// [`Param::Number`]. Everything else, including an unparsed or absent
    /// body, `null`, booleans, arrays, and objects, maps to
    /// [`Param::Missing`].
    pub fn body_param(&self, name: &str) -> Param {
        match self.json.as_ref().and_then(|v| v.get(name)) {
            Some(Value::Number(n)) => n.as_f64().map_or(Param::Missing, Param::Number),
            Some(Value::String(s)) => Param::Text(s.clone()),
            _                      => Param::Missing,
        }
    }

    /// Installs a parsed JSON body, releasing the raw bytes it came from.
    pub(crate) fn set_json(&mut self, value: Value) {
        self.json = Some(value);
        self.body = Bytes::new();
    }
}

/// Builds a [`Request`] outside of a live connection.
pub struct RequestBuilder {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl RequestBuilder {
    /// Appends a header.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `value` is not a valid header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("invalid header name");
        let value = HeaderValue::from_str(value).expect("invalid header value");
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        Request::new(self.method, self.uri, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_occurrence_of_a_repeated_key_wins() {
        let req = Request::builder(Method::Get, "/sum?a=1&a=2&b=9").build();
        assert_eq!(req.query("a"), Some("1"));
        assert_eq!(req.query("b"), Some("9"));
    }

    #[test]
    fn query_lookup_distinguishes_present_from_missing() {
        let req = Request::builder(Method::Get, "/sum?a=&b=2").build();
        assert_eq!(req.query_param("a"), Param::Text(String::new()));
        assert_eq!(req.query_param("b"), Param::Text("2".into()));
        assert_eq!(req.query_param("c"), Param::Missing);
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let req = Request::builder(Method::Get, "/echo?msg=hi%20there").build();
        assert_eq!(req.query("msg"), Some("hi there"));
    }

    #[test]
    fn a_mangled_query_pair_does_not_hide_its_neighbors() {
        let req = Request::builder(Method::Get, "/sum?a=%GG&b=2").build();
        assert_eq!(req.query("b"), Some("2"));
        assert!(req.query_param("a").to_number().is_nan());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::builder(Method::Post, "/sum")
            .header("Content-Type", "application/json")
            .build();
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn body_params_keep_the_json_shape() {
        let mut req = Request::builder(Method::Post, "/sum").build();
        req.set_json(json!({ "a": 3, "b": "4", "c": null, "d": [1] }));

        assert_eq!(req.body_param("a"), Param::Number(3.0));
        assert_eq!(req.body_param("b"), Param::Text("4".into()));
        assert_eq!(req.body_param("c"), Param::Missing);
        assert_eq!(req.body_param("d"), Param::Missing);
        assert_eq!(req.body_param("nope"), Param::Missing);
    }

    #[test]
    fn installing_a_json_body_releases_the_raw_bytes() {
        let mut req = Request::builder(Method::Post, "/sum")
            .body(r#"{"a":1}"#)
            .build();
        assert!(!req.body().is_empty());

        req.set_json(json!({ "a": 1 }));
        assert!(req.body().is_empty());
        assert!(req.json().is_some());
    }

    #[test]
    fn body_params_without_a_parsed_body_read_as_missing() {
        let req = Request::builder(Method::Post, "/sum")
            .body(r#"{"a":1}"#)
            .build();
        assert_eq!(req.body_param("a"), Param::Missing);
    }
}
