mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn default_page_is_html() -> Result<()> {
    let server = common::TestServer::offline().await?;

    let res = server.client.get(server.url("/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "unexpected content type {}", content_type);

    let text = res.text().await?;
    assert!(text.contains("BYOB - School Finder"));
    Ok(())
}

#[tokio::test]
async fn missing_route_is_404() -> Result<()> {
    let server = common::TestServer::offline().await?;

    let res = server.client.get(server.url("/rickandmorty")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], true);
    Ok(())
}

#[tokio::test]
async fn misspelled_api_prefix_is_404() -> Result<()> {
    let server = common::TestServer::offline().await?;

    for path in [
        "/ap1/v1/schools/4590001",
        "/ap1/v1/districts/4598978971",
        "/ap1/v1/counties/8937410892374",
    ] {
        let res = server.client.get(server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {}", path);
    }
    Ok(())
}
