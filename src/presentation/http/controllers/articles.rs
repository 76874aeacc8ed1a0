// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, LikeArticleCommand, UpdateArticleCommand,
    },
    dto::{
        ArticleDetailsDto, ArticleDto, ArticleHighlightDto, ArticleSummaryDto, LikeStatusDto,
        LikedArticleDto,
    },
    queries::articles::{GetArticleDetailsQuery, RankArticlesQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_count() -> u32 {
    5
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-sensitive title fragment. Missing or empty matches every article.
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RankingParams {
    /// Number of articles to return, at most 100.
    #[serde(default = "default_count")]
    pub count: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_location: Option<String>,
    pub category_id: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_location: Option<String>,
    pub category_id: i64,
    /// Version the client last read; a mismatch yields 409.
    #[serde(default)]
    pub version: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "The five most recent articles.", body = [ArticleSummaryDto])
    ),
    tag = "Articles"
)]
pub async fn list_recent_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_recent_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Articles whose title contains the query.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery { query: params.q })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/most-commented",
    params(RankingParams),
    responses(
        (status = 200, description = "Articles ranked by comment count.", body = [ArticleHighlightDto])
    ),
    tag = "Articles"
)]
pub async fn most_commented_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RankingParams>,
) -> HttpResult<Json<Vec<ArticleHighlightDto>>> {
    state
        .services
        .article_queries
        .most_commented_articles(RankArticlesQuery {
            count: params.count,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/most-liked",
    params(RankingParams),
    responses(
        (status = 200, description = "Articles ranked by like count.", body = [LikedArticleDto])
    ),
    tag = "Articles"
)]
pub async fn most_liked_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RankingParams>,
) -> HttpResult<Json<Vec<LikedArticleDto>>> {
    state
        .services
        .article_queries
        .most_liked_articles(RankArticlesQuery {
            count: params.count,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with comments and like count.", body = ArticleDetailsDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn get_article_details(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDetailsDto>> {
    state
        .services
        .article_queries
        .get_article_details(&user, GetArticleDetailsQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Blank title or body.", body = ErrorResponse),
        (status = 401, description = "Caller may not create articles.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse),
        (status = 409, description = "Title already taken.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        image_location: payload.image_location,
        category_id: payload.category_id,
    };

    let created = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Blank title or body.", body = ErrorResponse),
        (status = 401, description = "Caller may not update articles.", body = ErrorResponse),
        (status = 404, description = "Unknown article or category.", body = ErrorResponse),
        (status = 409, description = "Title taken or article modified concurrently.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        image_location: payload.image_location,
        category_id: payload.category_id,
        expected_version: payload.version,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article and its comments and likes removed.", body = StatusResponse),
        (status = 401, description = "Caller may not delete articles.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article liked; repeated likes are ignored.", body = LikeStatusDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn like_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeStatusDto>> {
    state
        .services
        .article_commands
        .like_article(&user, LikeArticleCommand { article_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Like removed if present.", body = LikeStatusDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn unlike_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<LikeStatusDto>> {
    state
        .services
        .article_commands
        .unlike_article(&user, LikeArticleCommand { article_id: id })
        .await
        .into_http()
        .map(Json)
}
