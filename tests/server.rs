//! Wire-level server behavior, driven through real TCP sockets.
//!
//! These requests reach [`Pipeline::dispatch`] the long way round, so the
//! hyper plumbing in between is on the hook too: method parsing, body
//! collection, and the conversion back to a wire response. Every server
//! binds port 0 and every request carries `connection: close`, so tests
//! never collide and responses end at EOF.

use std::net::SocketAddr;

use entre::middleware::JsonBody;
use entre::{Method, Pipeline, Request, Router, Server};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Boots a small sum app on an ephemeral port and hands back its address.
async fn serve_wire_app() -> SocketAddr {
    let app = Pipeline::new().with(JsonBody).routes(
        Router::new()
            .on(Method::Get, "/", |_req: Request| async { "hello over the wire" })
            .on(Method::Post, "/sum", |req: Request| async move {
                let sum = req.body_param("a").to_number() + req.body_param("b").to_number();
                serde_json::json!({ "sum": sum })
            }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind to random port");
    let server = Server::from_listener(listener).expect("local addr");
    let addr = server.local_addr();
    tokio::spawn(server.serve(app));
    addr
}

/// Writes one raw request and reads the whole response, up to EOF.
async fn exchange(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(request).await.expect("write request");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read response");
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn a_routed_request_answers_on_the_wire() {
    let addr = serve_wire_app().await;

    let response =
        exchange(addr, b"GET / HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.ends_with("hello over the wire"), "got: {response}");
}

#[tokio::test]
async fn an_unknown_method_token_answers_405_on_the_wire() {
    let addr = serve_wire_app().await;

    // hyper accepts any token as a method; rejecting BREW is this crate's
    // doing, before routing ever runs.
    let response =
        exchange(addr, b"BREW / HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n").await;

    assert!(response.starts_with("HTTP/1.1 405"), "got: {response}");
}

#[tokio::test]
async fn a_json_sum_crosses_the_wire() {
    let addr = serve_wire_app().await;

    let body = r#"{"a":1,"b":2}"#;
    let request = format!(
        "POST /sum HTTP/1.1\r\n\
         host: localhost\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n\
         {}",
        body.len(),
        body,
    );
    let response = exchange(addr, request.as_bytes()).await;

    assert!(response.starts_with("HTTP/1.1 200"), "got: {response}");
    assert!(response.ends_with(r#"{"sum":3}"#), "got: {response}");
}

#[tokio::test]
async fn a_body_that_cannot_be_read_answers_400_on_the_wire() {
    let addr = serve_wire_app().await;

    // "zz" is not a hex chunk size, so the body dies mid-transfer.
    let request = b"POST /sum HTTP/1.1\r\n\
        host: localhost\r\n\
        transfer-encoding: chunked\r\n\
        connection: close\r\n\
        \r\n\
        zz\r\n";
    let response = exchange(addr, request).await;

    assert!(response.starts_with("HTTP/1.1 400"), "got: {response}");
}
