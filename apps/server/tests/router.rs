use aasm::domain::config::{SiteConfig, SslConfig};
use aasm_server::Server;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn app(static_dir: &std::path::Path) -> Router {
    let mut cfg = SiteConfig::default();
    cfg.storage.static_dir = static_dir.to_path_buf();

    Server::builder().config(cfg).build().expect("server").router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn health_is_served() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (status, body) = get(app(dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""status":"up""#));
    assert!(body.contains(r#""slices":2"#));
}

#[tokio::test]
async fn section_pages_and_home_fallback() {
    let dir = tempfile::tempdir().expect("temp dir");

    let (status, html) = get(app(dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<main id="home">"#));

    let (_, html) = get(app(dir.path()), "/lecturers").await;
    assert!(html.contains(r#"<main id="lecturers">"#));
    assert!(html.contains("Teresa Perez"));

    let (status, html) = get(app(dir.path()), "/speakers").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<main id="home">"#));
}

#[tokio::test]
async fn static_files_win_over_the_home_fallback() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("torinologo.png"), b"not really a png").expect("write asset");

    let (status, body) = get(app(dir.path()), "/torinologo.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "not really a png");
}

#[tokio::test]
async fn directory_api_lists_six_groups() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (status, body) = get(app(dir.path()), "/api/directory/working-groups").await;
    assert_eq!(status, StatusCode::OK);

    let groups: serde_json::Value = serde_json::from_str(&body).expect("json");
    let groups = groups.as_array().expect("array");
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0]["members"][0]["name"], "Praveen Agarwal");
}

#[tokio::test]
async fn api_reference_is_mounted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (status, body) = get(app(dir.path()), "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/directory/committees"));
}

#[test]
fn missing_certificate_fails_the_build() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cfg = SiteConfig::default();
    cfg.server.ssl = Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn builder_overrides_the_listen_address() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cfg = SiteConfig::default();
    cfg.storage.static_dir = dir.path().to_path_buf();

    let server = Server::builder()
        .config(cfg)
        .address(std::net::Ipv4Addr::LOCALHOST.into())
        .port(8080)
        .build()
        .expect("server");

    assert_eq!(server.address().to_string(), "127.0.0.1:8080");
    assert_eq!(server.state().slice_count(), 2);
}
