mod common;

use axum::http::StatusCode;
use wiremock::MockServer;

#[tokio::test]
async fn index_redirects_to_app() {
    let backend = MockServer::start().await;
    common::forbid_image_lookup(&backend).await;

    let app = common::create_test_app(&common::test_config(&backend, None));
    let page = common::get_page(app, "/", Some("disco.pics")).await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(
        page.attr(r#"meta[http-equiv="refresh"]"#, "content").as_deref(),
        Some("0; url=https://app.disco.pics")
    );
    assert!(page
        .body
        .contains(r#"window.location.href = "https://app.disco.pics";"#));
}

#[tokio::test]
async fn not_found_page_has_404_status() {
    let backend = MockServer::start().await;
    common::forbid_image_lookup(&backend).await;

    let app = common::create_test_app(&common::test_config(&backend, None));
    let page = common::get_page(app, "/404", Some("disco.pics")).await;

    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Not found"));
    assert_eq!(page.attr("a.downloadbtn", "href").as_deref(), Some("https://disco.pics"));
}

#[tokio::test]
async fn health_check_reports_ok() {
    let backend = MockServer::start().await;
    common::forbid_image_lookup(&backend).await;

    let app = common::create_test_app(&common::test_config(&backend, None));
    let page = common::get_page(app, "/health", None).await;

    assert_eq!(page.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&page.body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "disco-embed");
}
