use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE: &str = "articles_title_key";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_LIKE_ARTICLE: &str = "article_likes_article_id_fkey";
const CNT_LIKE_USER: &str = "article_likes_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE => {
                        DomainError::DuplicateTitle("article title already exists".into())
                    }
                    CNT_ARTICLE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_COMMENT_ARTICLE | CNT_LIKE_ARTICLE => {
                        DomainError::NotFound("article not found".into())
                    }
                    CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR | CNT_LIKE_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
