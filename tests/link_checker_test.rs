mod server;

use pagelens::http_client::build_http_client;
use pagelens::link_checker::{HttpLinkProber, LinkChecker, LinkProber};
use server::get_test_server_url;
use std::time::Duration;

fn prober() -> HttpLinkProber {
    let client = build_http_client(Duration::from_secs(5)).expect("Failed to build client");
    HttpLinkProber::new(client, None)
}

#[tokio::test]
async fn test_only_200_is_accessible() {
    let base_url = get_test_server_url().await;
    let prober = prober();

    assert!(prober.is_accessible(&format!("{}/ok", base_url)).await);
    assert!(!prober.is_accessible(&format!("{}/created", base_url)).await);
    assert!(!prober.is_accessible(&format!("{}/not-found", base_url)).await);
    assert!(!prober.is_accessible(&format!("{}/forbidden", base_url)).await);
    assert!(!prober.is_accessible(&format!("{}/server-error", base_url)).await);
}

#[tokio::test]
async fn test_redirect_to_ok_is_accessible() {
    let base_url = get_test_server_url().await;
    assert!(prober().is_accessible(&format!("{}/redirect", base_url)).await);
}

#[tokio::test]
async fn test_transport_failure_is_inaccessible() {
    assert!(!prober().is_accessible("http://127.0.0.1:1/").await);
    assert!(!prober().is_accessible("http://").await);
}

#[tokio::test]
async fn test_checker_counts_against_live_server() {
    let base_url = get_test_server_url().await;
    let checker = LinkChecker::new(prober(), 3, Duration::from_secs(5));

    let links = vec![
        format!("{}/ok", base_url),
        format!("{}/redirect", base_url),
        format!("{}/not-found", base_url),
        format!("{}/server-error", base_url),
        "/relative/path".to_string(),
        "//cdn.example.com/lib.js".to_string(),
    ];

    assert_eq!(checker.count_inaccessible(&links).await, 4);
}

#[tokio::test]
async fn test_slow_link_times_out() {
    let base_url = get_test_server_url().await;
    let checker = LinkChecker::new(prober(), 2, Duration::from_millis(300));

    let links = vec![format!("{}/slow", base_url), format!("{}/ok", base_url)];

    let started = std::time::Instant::now();
    assert_eq!(checker.count_inaccessible(&links).await, 1);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_rate_limited_checker_still_checks_everything() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(Duration::from_secs(5)).expect("Failed to build client");
    let checker = LinkChecker::new(
        HttpLinkProber::new(client, Some(50.0)),
        5,
        Duration::from_secs(5),
    );

    let links: Vec<String> = (0..5).map(|_| format!("{}/ok", base_url)).collect();
    assert_eq!(checker.count_inaccessible(&links).await, 0);
}

#[tokio::test]
async fn test_rate_limit_wait_is_not_a_timeout() {
    let base_url = get_test_server_url().await;
    let client = build_http_client(Duration::from_secs(5)).expect("Failed to build client");
    // 2 links per second with a 1 second deadline: the last of 6 links waits
    // about 2 seconds for its turn and must still be checked
    let checker = LinkChecker::new(
        HttpLinkProber::new(client, Some(2.0)),
        6,
        Duration::from_secs(1),
    );

    let links: Vec<String> = (0..6).map(|_| format!("{}/ok", base_url)).collect();
    assert_eq!(checker.count_inaccessible(&links).await, 0);
}
