mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn adds_a_district() -> Result<()> {
    let Some(server) = common::TestServer::seeded().await? else { return Ok(()) };
    let token = server.token_for("sam@turing.io").await?;

    let res = server
        .client
        .post(server.url("/api/v1/districts"))
        .header("Authorization", &token)
        .json(&json!({ "name": "Denver", "district_code": "0034", "county_id": "1" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<Value>().await?;
    let id = body["id"].as_i64().expect("numeric id");
    assert!(!(1..=4).contains(&id), "id {} collides with a seeded district", id);
    assert_eq!(body["district_code"], "0034");
    assert_eq!(body["county_id"], 1);

    let (status, listed) = server.get_json("/api/v1/districts").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(5));

    let (status, fetched) = server.get_json(&format!("/api/v1/districts/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched[0]["name"], "Denver");
    Ok(())
}

#[tokio::test]
async fn adds_a_school() -> Result<()> {
    let Some(server) = common::TestServer::seeded().await? else { return Ok(()) };
    let token = server.token_for("sam@turing.io").await?;

    let res = server
        .client
        .post(server.url("/api/v1/schools"))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "School for the Dans",
            "school_code": "1234",
            "student_count": "2",
            "teacher_count": "1",
            "student_teacher_ratio": ".5",
            "district_id": "1"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<Value>().await?;
    assert!(body["id"].as_i64().is_some_and(|id| id > 2));
    assert_eq!(body["student_count"], 2);
    assert!((body["student_teacher_ratio"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn unknown_parent_is_unprocessable() -> Result<()> {
    let Some(server) = common::TestServer::seeded().await? else { return Ok(()) };
    let token = server.token_for("sam@turing.io").await?;

    let res = server
        .client
        .post(server.url("/api/v1/districts"))
        .header("Authorization", &token)
        .json(&json!({ "name": "Nowhere", "district_code": "9999", "county_id": 999 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<Value>().await?;
    assert!(body["field_errors"].get("county_id").is_some(), "{}", body);

    let (_, listed) = server.get_json("/api/v1/districts").await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(4));
    Ok(())
}

#[tokio::test]
async fn incomplete_school_is_unprocessable() -> Result<()> {
    let Some(server) = common::TestServer::seeded().await? else { return Ok(()) };
    let token = server.token_for("sam@turing.io").await?;

    let res = server
        .client
        .post(server.url("/api/v1/schools"))
        .header("Authorization", &token)
        .json(&json!({ "name": "School for the Dans", "student_count": "many" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<Value>().await?;
    let fields = body["field_errors"].as_object().expect("field errors");
    assert!(fields.contains_key("student_count"));
    assert!(fields.contains_key("district_id"));
    Ok(())
}
