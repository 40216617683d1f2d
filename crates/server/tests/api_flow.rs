use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::auth::AuthConfig;

async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    let state = ServerState {
        db,
        auth: AuthConfig { jwt_secret: Some("test-secret".into()), token_ttl_hours: 12 },
    };
    Ok(routes::build_router(state, CorsLayer::very_permissive()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header(header::CONTENT_TYPE, "application/json").body(Body::from(b.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn health_and_docs() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/company-profile"].is_object());
    Ok(())
}

#[tokio::test]
async fn running_text_activation_over_http() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, a) = send(&app, "POST", "/api/running-texts", Some(json!({"content": "A"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(a["is_active"], true);
    let (_, b) = send(&app, "POST", "/api/running-texts", Some(json!({"content": "B", "is_active": true}))).await?;

    let (status, active) = send(&app, "GET", "/api/running-texts/active", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active["id"], b["id"]);

    let (_, all) = send(&app, "GET", "/api/running-texts", None).await?;
    let rows = all.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows.iter().filter(|r| r["is_active"] == true).count(), 1);

    let b_id = b["id"].as_i64().expect("id");
    let (status, _) = send(&app, "PUT", &format!("/api/running-texts/{b_id}"), Some(json!({"is_active": false}))).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, none) = send(&app, "GET", "/api/running-texts/active", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(none.is_null());

    let (status, err) = send(&app, "PUT", "/api/running-texts/999", Some(json!({"is_active": true}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "not_found");
    Ok(())
}

#[tokio::test]
async fn category_delete_reassigns_posts_over_http() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, cat) = send(&app, "POST", "/api/categories", Some(json!({"name": "Tech"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let cat_id = cat["id"].as_i64().expect("id");

    let (status, _) = send(&app, "POST", "/api/categories", Some(json!({"name": "Tech"}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, post) = send(
        &app,
        "POST",
        "/api/posts",
        Some(json!({"title": "Rust", "content": "Body", "category": cat_id.to_string()})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{cat_id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/categories/{cat_id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, reread) = send(&app, "GET", &format!("/api/posts/{}", post["id"]), None).await?;
    assert_eq!(reread["category"], "Uncategorized");
    let (_, gone) = send(&app, "GET", &format!("/api/categories/{cat_id}"), None).await?;
    assert!(gone.is_null());

    let (_, uncategorized) = send(&app, "GET", "/api/posts/category/Uncategorized", None).await?;
    assert_eq!(uncategorized.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn company_profile_upsert_over_http() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/api/company-profile", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, created) = send(&app, "PUT", "/api/company-profile", Some(json!({"about_us": "X"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["about_us"], "X");
    assert_eq!(created["vision"], "");
    assert_eq!(created["documentation_images"], json!([]));
    assert!(created["proposal_url"].is_null());

    let (_, merged) = send(&app, "PUT", "/api/company-profile", Some(json!({"mission": "M2"}))).await?;
    assert_eq!(merged["about_us"], "X");
    assert_eq!(merged["mission"], "M2");
    assert_eq!(merged["id"], created["id"]);

    let (status, err) = send(&app, "PUT", "/api/company-profile", Some(json!({"proposal_url": "nope"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "validation_error");
    Ok(())
}

#[tokio::test]
async fn login_and_session() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, user) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({"username": "admin", "password": "S3curePass!", "role": "admin"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(user.get("password").is_none());

    let (status, _) = send(&app, "POST", "/auth/login", Some(json!({"username": "admin", "password": "wrong-pass"}))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"username": "admin", "password": "S3curePass!"}).to_string()))?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("auth cookie");
    assert!(cookie.starts_with("auth_token="));
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let session: Value = serde_json::from_slice(&bytes)?;
    let token = session["token"].as_str().expect("token").to_owned();
    assert_eq!(session["user"]["role"], "admin");

    let req = Request::builder()
        .uri("/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())?;
    let res = app.clone().oneshot(req).await?;
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let current: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(current["user"]["username"], "admin");

    let (status, anonymous) = send(&app, "GET", "/auth/session", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(anonymous.is_null());
    Ok(())
}

#[tokio::test]
async fn crud_resources_and_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, svc) = send(
        &app,
        "POST",
        "/api/services",
        Some(json!({"name": "Audit", "features": ["Report"], "whatsapp_link": "https://wa.me/1"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, "POST", "/api/services", Some(json!({"name": "Empty", "features": [], "whatsapp_link": "https://wa.me/1"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = send(&app, "PUT", &format!("/api/services/{}", svc["id"]), Some(json!({"name": "Deep audit"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["features"], json!(["Report"]));

    let (status, member) = send(&app, "POST", "/api/team-members", Some(json!({"name": "Rina", "position": "PM"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(member["description"].is_null());
    let (status, _) = send(&app, "DELETE", &format!("/api/team-members/{}", member["id"]), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/team-members/{}", member["id"]), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, missing) = send(&app, "GET", "/api/posts/12345", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(missing.is_null());
    let (status, _) = send(&app, "DELETE", "/api/posts/12345", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, recent) = send(&app, "GET", "/api/posts/recent?limit=3", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recent, json!([]));

    let (status, metrics) = {
        let req = Request::builder().uri("/metrics").body(Body::empty())?;
        let res = app.clone().oneshot(req).await?;
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
        (status, String::from_utf8(bytes.to_vec())?)
    };
    assert_eq!(status, StatusCode::OK);
    assert!(metrics.contains("company_site_requests_total"));
    Ok(())
}
