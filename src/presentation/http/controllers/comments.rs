use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::{CommentDto, CommentViewDto},
    queries::comments::GetCommentQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub article_id: i64,
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    /// At least five characters.
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/comments",
    responses(
        (status = 200, description = "Every comment with its article title and author.", body = [CommentViewDto])
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CommentViewDto>>> {
    state
        .services
        .comment_queries
        .list_comments()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentViewDto),
        (status = 400, description = "Blank body.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentViewDto>)> {
    let command = CreateCommentCommand {
        article_id: payload.article_id,
        body: payload.body,
    };

    let created = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment with its article title and author.", body = CommentViewDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentViewDto>> {
    state
        .services
        .comment_queries
        .get_comment(&user, GetCommentQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = CommentDto),
        (status = 400, description = "Body shorter than five characters.", body = ErrorResponse),
        (status = 401, description = "Caller is neither the author nor an admin.", body = ErrorResponse),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .update_comment(
            &user,
            UpdateCommentCommand {
                id,
                body: payload.body,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The deleted comment.", body = CommentDto),
        (status = 401, description = "Caller is neither the author nor an admin.", body = ErrorResponse),
        (status = 404, description = "Unknown comment.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, DeleteCommentCommand { id })
        .await
        .into_http()
        .map(Json)
}
