//! The served process: real sockets, graceful shutdown.

use std::time::Duration;

use stakeboard::application::session::ShutdownOutcome;
use stakeboard::infrastructure::bootstrap::Services;
use stakeboard::infrastructure::runtime::serve;
use stakeboard::port::SessionService;
use stakeboard::testkit::config;
use stakeboard::testkit::domain::customer;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_request(address: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(address).await.expect("connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn serves_over_tcp_and_shuts_down_gracefully() {
    let config = config::fast_sessions(60);
    let services = Services::from_config(&config);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("address");
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = {
        let services = services.clone();
        tokio::spawn(async move {
            serve(&config, &services, listener, async move {
                let _ = stop_rx.await;
            })
            .await
        })
    };

    let response = raw_request(
        address,
        "GET /42/session HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert_eq!(services.sessions.active_session_count(), 1);

    let response = raw_request(
        address,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.ends_with("ok"), "{response}");

    stop_tx.send(()).expect("server still running");
    let outcome = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server stopped in time")
        .expect("server task")
        .expect("server result");
    assert_eq!(outcome, ShutdownOutcome::Graceful);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn sweeper_runs_alongside_the_server() {
    let config = config::parse(
        "[session]\nttl_secs = 1\nsweep_interval_secs = 1\nshutdown_grace_secs = 1\n",
    );
    let services = Services::from_config(&config);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = {
        let services = services.clone();
        tokio::spawn(async move {
            serve(&config, &services, listener, async move {
                let _ = stop_rx.await;
            })
            .await
        })
    };

    services.sessions.create_or_get_session(customer(9));
    assert_eq!(services.sessions.active_session_count(), 1);

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(services.sessions.active_session_count(), 0);

    stop_tx.send(()).expect("server still running");
    server
        .await
        .expect("server task")
        .expect("server result");
}
