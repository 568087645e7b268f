use std::net::{IpAddr, SocketAddr, UdpSocket};
use std::time::Duration;

use chrono::DateTime;
use futures::future::join_all;
use serde_json::Value;
use uptime_probe::config::Config;
use uptime_probe::server::{KeepAlive, spawn_keep_alive};

fn start_probe() -> KeepAlive {
    let config = Config {
        port: 0,
        ..Config::default()
    };
    spawn_keep_alive(config).expect("probe should bind an ephemeral port")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build")
}

fn loopback_url(probe: &KeepAlive, path: &str) -> String {
    format!("http://127.0.0.1:{}{}", probe.local_addr().port(), path)
}

/// Address of the interface the host would route external traffic through,
/// if there is one. No packets are sent.
fn outbound_interface_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("192.0.2.1:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

async fn get_status(client: &reqwest::Client, url: &str) -> Value {
    let resp = client.get(url).send().await.expect("request should succeed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"],
        "application/json",
        "status should be served as JSON"
    );
    let body = resp.text().await.unwrap();
    serde_json::from_str(&body).expect("Body should be valid JSON")
}

#[tokio::test]
async fn test_root_reports_alive_over_tcp() {
    let probe = start_probe();
    let client = client();

    for _ in 0..5 {
        let resp = client.get(loopback_url(&probe, "/")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), "Bot is alive!");
    }
}

#[tokio::test]
async fn test_status_over_tcp() {
    let probe = start_probe();
    let client = client();

    let body = get_status(&client, &loopback_url(&probe, "/status")).await;

    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], "Telegram Bot v20.3");
    let timestamp = body["timestamp"].as_str().unwrap();
    DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be ISO 8601");
}

#[tokio::test]
async fn test_status_timestamps_advance() {
    let probe = start_probe();
    let client = client();
    let url = loopback_url(&probe, "/status");

    let first = get_status(&client, &url).await;
    tokio::time::sleep(Duration::from_millis(25)).await;
    let second = get_status(&client, &url).await;

    let first = DateTime::parse_from_rfc3339(first["timestamp"].as_str().unwrap()).unwrap();
    let second = DateTime::parse_from_rfc3339(second["timestamp"].as_str().unwrap()).unwrap();
    assert!(second > first, "{second} should be later than {first}");
}

#[tokio::test]
async fn test_concurrent_status_requests_are_independent() {
    let probe = start_probe();
    let client = client();
    let url = loopback_url(&probe, "/status");

    let bodies = join_all((0..100).map(|_| get_status(&client, &url))).await;

    assert_eq!(bodies.len(), 100);
    for body in &bodies {
        let object = body.as_object().expect("each body should be a JSON object");
        assert_eq!(object.len(), 3);
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], "Telegram Bot v20.3");
        let timestamp = body["timestamp"].as_str().unwrap();
        DateTime::parse_from_rfc3339(timestamp).unwrap();
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let probe = start_probe();
    let client = client();

    let resp = client
        .get(loopback_url(&probe, "/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // The server is still healthy afterwards.
    let resp = client.get(loopback_url(&probe, "/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_listener_accepts_on_all_interfaces() {
    let probe = start_probe();
    assert!(probe.local_addr().ip().is_unspecified());

    let Some(ip) = outbound_interface_ip() else {
        // Host without a routable interface: loopback coverage above is all we get.
        return;
    };
    let url = format!(
        "http://{}/",
        SocketAddr::new(ip, probe.local_addr().port())
    );
    let resp = client()
        .get(url)
        .send()
        .await
        .expect("non-loopback request should succeed");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Bot is alive!");
}
