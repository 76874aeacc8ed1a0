// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, categories, comments},
    middleware::rate_limit::{WriteLimiter, WriteQuota, write_limiter},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{MethodRouter, get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Cross-cutting router settings that come from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// `None` leaves the write routes unthrottled.
    pub rate_limit: Option<WriteQuota>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            rate_limit: None,
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let limit = options.rate_limit.and_then(|quota| {
        let limiter = write_limiter(quota);
        if limiter.is_none() {
            tracing::warn!(?quota, "unusable rate limit quota, write routes are not throttled");
        }
        limiter
    });
    let limit = limit.as_ref();

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_recent_articles)
                .merge(throttled(post(articles::create_article), limit)),
        )
        .route("/api/v1/articles/search", get(articles::search_articles))
        .route(
            "/api/v1/articles/most-commented",
            get(articles::most_commented_articles),
        )
        .route(
            "/api/v1/articles/most-liked",
            get(articles::most_liked_articles),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article_details).merge(throttled(
                put(articles::update_article).delete(articles::delete_article),
                limit,
            )),
        )
        .route(
            "/api/v1/articles/{id}/like",
            throttled(
                post(articles::like_article).delete(articles::unlike_article),
                limit,
            ),
        )
        .route(
            "/api/v1/comments",
            get(comments::list_comments).merge(throttled(post(comments::create_comment), limit)),
        )
        .route(
            "/api/v1/comments/{id}",
            get(comments::get_comment).merge(throttled(
                put(comments::update_comment).delete(comments::delete_comment),
                limit,
            )),
        )
        .route("/api/v1/categories", get(categories::list_categories))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn throttled(route: MethodRouter, limiter: Option<&WriteLimiter>) -> MethodRouter {
    match limiter {
        Some(limiter) => route.layer(limiter.clone()),
        None => route,
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
