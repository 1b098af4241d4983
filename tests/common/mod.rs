//! Shared helpers for the HTTP integration tests.

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use translation_status_client::server::{serve, JobConfig, SimulatedJob};

/// Start the simulated job on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn start_simulated_job(config: JobConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let job = SimulatedJob::new(config).unwrap();

    tokio::spawn(async move {
        let _ = serve(listener, job, std::future::pending::<()>()).await;
    });

    format!("http://{}", addr)
}

type Responder = dyn Fn(usize) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct Backend {
    hits: Arc<AtomicUsize>,
    respond: Arc<Responder>,
}

async fn status(State(backend): State<Backend>) -> (StatusCode, String) {
    let hit = backend.hits.fetch_add(1, Ordering::SeqCst);
    (backend.respond)(hit)
}

/// Start a `/status` backend whose reply is chosen per hit (0-indexed).
/// Returns the base URL and a counter of requests served.
#[allow(dead_code)]
pub async fn start_programmable_backend<F>(respond: F) -> (String, Arc<AtomicUsize>)
where
    F: Fn(usize) -> (StatusCode, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new().route("/status", get(status)).with_state(Backend {
        hits: hits.clone(),
        respond: Arc::new(respond),
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), hits)
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start a `/status` backend that waits `delay` before answering `completed`.
/// Returns the base URL and a counter of requests received.
#[allow(dead_code)]
pub async fn start_slow_backend(delay: Duration) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    let app = Router::new().route(
        "/status",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                (StatusCode::OK, r#"{"result": "completed"}"#.to_string())
            }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), hits)
}
