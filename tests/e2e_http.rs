use std::sync::Arc;

use axum::http::{Method, StatusCode};
use dgn_core::presentation::http::{middleware::rate_limit::WriteQuota, routes::RouterOptions};
use serde_json::json;
use tower::ServiceExt;

mod support;

use support::{
    AUTHOR_TOKEN, EXPIRED_TOKEN, InMemoryCms, OTHER_READER_TOKEN, READER_ID, READER_TOKEN,
    assert_error_response, empty_request, fixed_now, json_request, make_test_router,
    make_test_router_with, make_test_router_with_options, read_json,
};

#[tokio::test]
async fn health_is_public() {
    let app = make_test_router();

    let resp = app
        .oneshot(empty_request(Method::GET, "/health", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn public_listings_need_no_token() {
    let store = Arc::new(InMemoryCms::seeded());
    store.seed_article("Listed", fixed_now());
    let app = make_test_router_with(store);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/articles", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body[0]["article"]["title"], "Listed");

    let resp = app
        .oneshot(empty_request(Method::GET, "/api/v1/categories", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await[0]["name"], "News");
}

#[tokio::test]
async fn details_require_a_valid_token() {
    let store = Arc::new(InMemoryCms::seeded());
    store.seed_article("Private", fixed_now());
    let app = make_test_router_with(store);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/articles/1", None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .oneshot(empty_request(Method::GET, "/api/v1/articles/1", Some(EXPIRED_TOKEN)))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn unknown_article_is_404() {
    let app = make_test_router();

    let resp = app
        .oneshot(empty_request(Method::GET, "/api/v1/articles/999", Some(READER_TOKEN)))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn reader_cannot_post_articles() {
    let app = make_test_router();
    let payload = json!({ "title": "Mine", "body": "text", "category_id": 1 });

    let resp = app
        .oneshot(json_request(Method::POST, "/api/v1/articles", Some(READER_TOKEN), payload))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn author_creates_then_reads_article() {
    let app = make_test_router();
    let payload = json!({ "title": "Fresh", "body": "text", "category_id": 2 });

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/articles", Some(AUTHOR_TOKEN), payload.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["version"], 1);
    let id = created["id"].as_i64().expect("numeric id");

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/v1/articles/{id}"),
            Some(READER_TOKEN),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let details = read_json(resp).await;
    assert_eq!(details["article"]["title"], "Fresh");
    assert_eq!(details["category_name"], "Tech");
    assert_eq!(details["like_count"], 0);

    let resp = app
        .oneshot(json_request(Method::POST, "/api/v1/articles", Some(AUTHOR_TOKEN), payload))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn stale_version_on_put_is_409() {
    let store = Arc::new(InMemoryCms::seeded());
    store.seed_article("Versioned", fixed_now());
    let app = make_test_router_with(store);
    let payload = json!({
        "title": "Versioned",
        "body": "changed",
        "category_id": 1,
        "version": 7
    });

    let resp = app
        .oneshot(json_request(Method::PUT, "/api/v1/articles/1", Some(AUTHOR_TOKEN), payload))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn comment_edit_rules_map_to_statuses() {
    let store = Arc::new(InMemoryCms::seeded());
    let article = store.seed_article("Discussed", fixed_now());
    store.seed_comment(article, READER_ID, "original");
    let app = make_test_router_with(store);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/comments/1",
            Some(READER_TOKEN),
            json!({ "body": "tiny" }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/v1/comments/1", Some(OTHER_READER_TOKEN)))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/comments",
            Some(OTHER_READER_TOKEN),
            json!({ "article_id": 1, "body": "ok" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let view = read_json(resp).await;
    assert_eq!(view["article_title"], "Discussed");
    assert_eq!(view["author"]["display_name"], "Reader Two");
}

#[tokio::test]
async fn like_round_trip_over_http() {
    let store = Arc::new(InMemoryCms::seeded());
    store.seed_article("Likeable", fixed_now());
    let app = make_test_router_with(store);

    let resp = app
        .clone()
        .oneshot(empty_request(Method::POST, "/api/v1/articles/1/like", Some(READER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let status = read_json(resp).await;
    assert_eq!(status["liked"], true);
    assert_eq!(status["like_count"], 1);

    let resp = app
        .oneshot(empty_request(Method::DELETE, "/api/v1/articles/1/like", Some(READER_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["like_count"], 0);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router();

    let resp = app
        .oneshot(empty_request(Method::GET, "/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"]["/api/v1/articles/{id}"].is_object());
}

#[tokio::test]
async fn write_routes_share_one_client_allowance() {
    let store = Arc::new(InMemoryCms::seeded());
    store.seed_article("Throttled", fixed_now());
    let app = make_test_router_with_options(
        store,
        RouterOptions {
            rate_limit: Some(WriteQuota {
                period_secs: 60,
                burst: 1,
            }),
            ..RouterOptions::default()
        },
    );
    let from_client = |mut req: axum::http::Request<axum::body::Body>| {
        req.headers_mut()
            .insert("x-forwarded-for", "203.0.113.7".parse().unwrap());
        req
    };

    let resp = app
        .clone()
        .oneshot(from_client(empty_request(
            Method::POST,
            "/api/v1/articles/1/like",
            Some(READER_TOKEN),
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // 別の書き込みルートでも同じ枠を消費する
    let resp = app
        .clone()
        .oneshot(from_client(json_request(
            Method::POST,
            "/api/v1/comments",
            Some(READER_TOKEN),
            json!({ "article_id": 1, "body": "hi" }),
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    let resp = app
        .oneshot(from_client(empty_request(Method::GET, "/api/v1/comments", None)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
