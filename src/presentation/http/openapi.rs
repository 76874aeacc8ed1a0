// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_recent_articles,
        crate::presentation::http::controllers::articles::search_articles,
        crate::presentation::http::controllers::articles::most_commented_articles,
        crate::presentation::http::controllers::articles::most_liked_articles,
        crate::presentation::http::controllers::articles::get_article_details,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::like_article,
        crate::presentation::http::controllers::articles::unlike_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::get_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::categories::list_categories,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::comments::UpdateCommentRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleDetailsDto,
            crate::application::dto::ArticleHighlightDto,
            crate::application::dto::LikedArticleDto,
            crate::application::dto::LikeStatusDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentViewDto,
            crate::application::dto::CategoryDto
        )
    ),
    tags(
        (name = "Articles", description = "Articles, rankings and likes"),
        (name = "Comments", description = "Comments on articles"),
        (name = "Categories", description = "Category reference data"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "DGN API",
        description = "Articles, categories, comments and likes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                openapi.servers = Some(vec![Server::new(url)]);
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
