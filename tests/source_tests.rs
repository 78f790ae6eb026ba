// HTTP snapshot source against a live server on an ephemeral port

use axum::{Router, http::StatusCode, routing::get};
use nocwatch::config::AppConfig;
use nocwatch::generator::Generator;
use nocwatch::poller::{Poller, PollerConfig};
use nocwatch::routes;
use nocwatch::source::{FetchError, HttpSource, SnapshotSource};
use std::sync::Arc;
use std::time::Duration;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn nocwatch_server() -> String {
    let config = AppConfig::load_from_str("[server]\nport = 3000\nhost = \"127.0.0.1\"\n").unwrap();
    let generator = Generator::new(Arc::new(config.roster()));
    serve(routes::app(generator, &config)).await
}

#[tokio::test]
async fn http_source_reads_status_feed() {
    let base = nocwatch_server().await;
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
    let snapshot = source.fetch().await.expect("fetch");
    assert_eq!(snapshot.len(), 7);
    assert_eq!(snapshot[0].name, "ESCOLA CDE01");
    assert!(snapshot.iter().all(|s| s.traffic.len() == 10));
}

#[tokio::test]
async fn http_source_reports_error_status() {
    let app = Router::new().route(
        "/api/dados",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
    match source.fetch().await {
        Err(FetchError::Status(500)) => {}
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn http_source_reports_malformed_payload() {
    let app = Router::new().route("/api/dados", get(|| async { "{not json" }));
    let base = serve(app).await;
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
    assert!(matches!(source.fetch().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn poller_renders_from_live_server() {
    let base = nocwatch_server().await;
    let source = HttpSource::new(&base, Duration::from_secs(5)).unwrap();
    let poller = Poller::activate(Arc::new(source), PollerConfig::default());
    let mut rx = poller.subscribe();

    tokio::time::timeout(Duration::from_secs(5), async {
        while rx.borrow_and_update().snapshot.is_none() {
            rx.changed().await.unwrap();
        }
    })
    .await
    .expect("first snapshot");

    let state = poller.state();
    assert_eq!(state.snapshot.map(|s| s.len()), Some(7));
    poller.shutdown().await;
}
