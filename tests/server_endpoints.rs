//! HTTP endpoint tests: the served app end to end, form in, report page out.

mod helpers;

use seo_audit::build_router;

/// Serves the audit app itself on an ephemeral port; returns the base URL.
async fn spawn_audit_server() -> String {
    let state = helpers::test_state(helpers::test_ctx());
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind audit server");
    let addr = listener.local_addr().expect("audit server addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("audit server");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn index_serves_the_form() {
    let base = spawn_audit_server().await;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("{base}/"))
        .send()
        .await
        .expect("GET /")
        .text()
        .await
        .expect("body");

    assert!(body.contains("<form method=\"post\" action=\"/analyze\">"));
    assert!(body.contains("name=\"url\""));
    assert!(body.contains("name=\"keyword\""));
}

#[tokio::test]
async fn analyze_returns_200_with_report_page() {
    let fixture = helpers::spawn_fixture_server(
        "<html><head><title>Rust tips</title></head><body><h1>Tips</h1></body></html>",
    )
    .await;
    let base = spawn_audit_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/analyze"))
        .form(&[("url", fixture.as_str()), ("keyword", "rust")])
        .send()
        .await
        .expect("POST /analyze");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("<pre>"));
    assert!(body.contains("ADVANCED SEO AUDIT REPORT"));
    assert!(body.contains("Current Title Tag: Rust tips"));
}

#[tokio::test]
async fn analyze_failure_still_returns_200() {
    let base = spawn_audit_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/analyze"))
        .form(&[("url", "http://127.0.0.1:9/"), ("keyword", "rust")])
        .send()
        .await
        .expect("POST /analyze");

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("CRITICAL AUDIT ERROR:"));
    assert!(!body.contains("EXECUTIVE SUMMARY"));
}

#[tokio::test]
async fn status_counts_failed_audits() {
    let base = spawn_audit_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/analyze"))
        .form(&[("url", "http://127.0.0.1:9/"), ("keyword", "rust")])
        .send()
        .await
        .expect("POST /analyze");

    let status: serde_json::Value = client
        .get(format!("{base}/status"))
        .send()
        .await
        .expect("GET /status")
        .json()
        .await
        .expect("status JSON");

    assert_eq!(status["failed_audits"], 1);
    assert_eq!(status["completed_audits"], 0);
    assert_eq!(status["errors"]["total"], 1);
    assert!(status["elapsed_seconds"].as_f64().is_some());
}
