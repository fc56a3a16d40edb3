//! HTTP server and graceful shutdown.
//!
//! # Graceful shutdown
//!
//! On the first **SIGTERM** or **Ctrl-C** the server:
//! 1. Stops calling `listener.accept()`, so no new connections are made.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns from [`Server::serve`], letting `main` exit cleanly.
//!
//! Kubernetes sends SIGTERM and waits `terminationGracePeriodSeconds`
//! (default 30 s) before SIGKILL; set it longer than your slowest request.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::method::Method;
use crate::pipeline::Pipeline;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
    listener: Option<TcpListener>,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use entre::Server;
    /// let server = Server::bind("0.0.0.0:3000");
    /// ```
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { addr, listener: None }
    }

    /// Serves on a listener the caller has already bound.
    ///
    /// Binding first is how the real port gets learned before serving, as
    /// with `127.0.0.1:0`: the kernel picks a free port, and
    /// [`local_addr`](Server::local_addr) reports it.
    ///
    /// # Errors
    ///
    /// Fails if the listener's local address cannot be read.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn demo() -> Result<(), entre::Error> {
    /// use entre::{Pipeline, Server};
    /// use tokio::net::TcpListener;
    ///
    /// let listener = TcpListener::bind("127.0.0.1:0").await?;
    /// let server = Server::from_listener(listener)?;
    /// println!("serving on {}", server.local_addr());
    /// server.serve(Pipeline::new()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_listener(listener: TcpListener) -> Result<Self, Error> {
        let addr = listener.local_addr()?;
        Ok(Self { addr, listener: Some(listener) })
    }

    /// The address this server serves on.
    ///
    /// For a server built with [`from_listener`](Server::from_listener) this
    /// is the listener's actual address. For [`bind`](Server::bind) it is the
    /// parsed target, so a port of `0` stays `0` until `serve` binds it.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Starts accepting connections and dispatching requests through
    /// `pipeline`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, pipeline: Pipeline) -> Result<(), Error> {
        let listener = match self.listener {
            Some(listener) => listener,
            None           => TcpListener::bind(self.addr).await?,
        };
        let addr = listener.local_addr()?;

        // Shared across connection tasks; the chain itself is never copied.
        let pipeline = Arc::new(pipeline);

        info!(addr = %addr, stages = ?pipeline.stage_names(), "entre listening");

        // JoinSet tracks every spawned connection task so graceful shutdown
        // can wait for them all.
        let mut tasks = tokio::task::JoinSet::new();

        // Pinned so the loop can poll it by reference on every iteration.
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // `biased` checks arms top-to-bottom: a shutdown signal stops
                // the accept arm even when more connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let pipeline = Arc::clone(&pipeline);
                    // TokioIo adapts tokio's AsyncRead/AsyncWrite to the hyper
                    // IO traits.
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection, not once
                        // per connection.
                        let svc = service_fn(move |req| {
                            let pipeline = Arc::clone(&pipeline);
                            async move { dispatch(pipeline, req, remote_addr).await }
                        });

                        // `auto::Builder` speaks HTTP/1.1 or HTTP/2, whatever
                        // the client negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet does not grow
                // without bound on long-running servers.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        // Drain: wait for every in-flight connection to finish before returning.
        while tasks.join_next().await.is_some() {}

        info!("entre stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Core hot path: one request in, one response out.
///
/// The error type is [`Infallible`]: every failure is answered internally
/// (400, 405, 404, 500) so hyper never sees an error.
async fn dispatch(
    pipeline: Arc<Pipeline>,
    req: hyper::Request<hyper::body::Incoming>,
    remote_addr: SocketAddr,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();

    // The whole body is buffered before the pipeline runs; stages see
    // complete bytes, never a stream.
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            error!(peer = %remote_addr, "failed to read request body: {e}");
            return Ok(Response::status(Status::BadRequest).into_http());
        }
    };

    let Ok(method) = parts.method.as_str().parse::<Method>() else {
        return Ok(Response::status(Status::MethodNotAllowed).into_http());
    };

    let request = Request::new(method, parts.uri, parts.headers, body);
    Ok(pipeline.dispatch(request).await.into_http())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives.
///
/// On Unix this listens for both **SIGTERM** (sent by `kubectl` and the
/// Kubernetes control plane) and **SIGINT** (Ctrl-C, for local dev).
/// On Windows only Ctrl-C is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    // `pending()` never resolves; on non-Unix platforms the SIGTERM arm is
    // effectively disabled.
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
