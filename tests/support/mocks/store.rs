// tests/support/mocks/store.rs
//! In-memory stand-in for the Postgres repositories. A single store backs
//! every port so joins, cascades and rankings behave like the SQL versions.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

use dgn_core::domain::article::{
    Article, ArticleBody, ArticleHighlight, ArticleId, ArticleLikeRepository,
    ArticleReadRepository, ArticleSummary, ArticleTitle, ArticleUpdate, ArticleVersion,
    ArticleWriteRepository, LikedArticle, NewArticle,
};
use dgn_core::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use dgn_core::domain::comment::{
    Comment, CommentBody, CommentId, CommentReadRepository, CommentUpdate, CommentView,
    CommentWriteRepository, NewComment,
};
use dgn_core::domain::errors::{DomainError, DomainResult};
use dgn_core::domain::user::{DisplayName, Role, User, UserId, UserRepository};

use super::time::fixed_now;

pub const READER_ID: i64 = 1;
pub const AUTHOR_ID: i64 = 2;
pub const ADMIN_ID: i64 = 3;
pub const OTHER_READER_ID: i64 = 4;

pub const NEWS_CATEGORY: i64 = 1;
pub const TECH_CATEGORY: i64 = 2;

/// Something another request does right before the next write lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interference {
    DeleteArticle,
    BumpArticleVersion,
    DeleteComment,
}

#[derive(Default)]
struct State {
    users: BTreeMap<i64, User>,
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    likes: BTreeSet<(i64, i64)>,
    next_article_id: i64,
    next_comment_id: i64,
}

pub struct InMemoryCms {
    state: Mutex<State>,
    interference: Mutex<Option<Interference>>,
}

fn user(id: i64, name: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        display_name: DisplayName::new(name).unwrap(),
        image_location: Some(format!("/avatars/{id}.png")),
        role,
        created_at: fixed_now(),
    }
}

fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
    }
}

impl InMemoryCms {
    /// Four users (two readers, an author and an admin) and two categories.
    pub fn seeded() -> Self {
        let mut state = State {
            next_article_id: 1,
            next_comment_id: 1,
            ..State::default()
        };
        for u in [
            user(READER_ID, "Reader One", Role::Reader),
            user(AUTHOR_ID, "Author", Role::Author),
            user(ADMIN_ID, "Admin", Role::Admin),
            user(OTHER_READER_ID, "Reader Two", Role::Reader),
        ] {
            state.users.insert(u.id.into(), u);
        }
        // Inserted out of name order on purpose.
        for c in [category(TECH_CATEGORY, "Tech"), category(NEWS_CATEGORY, "News")] {
            state.categories.insert(c.id.into(), c);
        }
        Self {
            state: Mutex::new(state),
            interference: Mutex::new(None),
        }
    }

    pub fn interfere_with_next_write(&self, interference: Interference) {
        *self.interference.lock().unwrap() = Some(interference);
    }

    /// Insert an article directly, bypassing the services.
    pub fn seed_article(&self, title: &str, created_at: DateTime<Utc>) -> ArticleId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_article_id;
        state.next_article_id += 1;
        state.articles.insert(
            id,
            Article {
                id: ArticleId::new(id).unwrap(),
                title: ArticleTitle::new(title).unwrap(),
                body: ArticleBody::new(format!("body of {title}")).unwrap(),
                image_location: None,
                category_id: CategoryId::new(NEWS_CATEGORY).unwrap(),
                author_id: UserId::new(AUTHOR_ID).unwrap(),
                created_at,
                version: ArticleVersion::INITIAL,
            },
        );
        ArticleId::new(id).unwrap()
    }

    pub fn seed_comment(&self, article_id: ArticleId, author_id: i64, body: &str) -> CommentId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_comment_id;
        state.next_comment_id += 1;
        state.comments.insert(
            id,
            Comment {
                id: CommentId::new(id).unwrap(),
                body: CommentBody::new(body).unwrap(),
                article_id,
                author_id: UserId::new(author_id).unwrap(),
                created_at: fixed_now(),
            },
        );
        CommentId::new(id).unwrap()
    }

    pub fn seed_like(&self, article_id: ArticleId, user_id: i64) {
        let mut state = self.state.lock().unwrap();
        state.likes.insert((article_id.into(), user_id));
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn comment(&self, id: i64) -> Option<Comment> {
        self.state.lock().unwrap().comments.get(&id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn like_count(&self) -> usize {
        self.state.lock().unwrap().likes.len()
    }

    fn take_interference(&self) -> Option<Interference> {
        self.interference.lock().unwrap().take()
    }
}

impl State {
    fn summary(&self, article: &Article) -> DomainResult<ArticleSummary> {
        let category = self
            .categories
            .get(&i64::from(article.category_id))
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        let author = self
            .users
            .get(&i64::from(article.author_id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        Ok(ArticleSummary {
            article: article.clone(),
            category_name: category.name.clone(),
            author_name: author.display_name.clone(),
            author_image: author.image_location.clone(),
        })
    }

    fn comment_view(&self, comment: &Comment) -> DomainResult<CommentView> {
        let article = self
            .articles
            .get(&i64::from(comment.article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let author = self
            .users
            .get(&i64::from(comment.author_id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        Ok(CommentView {
            comment: comment.clone(),
            article_title: article.title.clone(),
            author_name: author.display_name.clone(),
            author_image: author.image_location.clone(),
        })
    }

    fn title_taken(&self, title: &ArticleTitle, except: Option<i64>) -> bool {
        self.articles
            .iter()
            .any(|(id, a)| Some(*id) != except && &a.title == title)
    }

    fn likers(&self, article_id: i64) -> Vec<UserId> {
        self.likes
            .iter()
            .filter(|(a, _)| *a == article_id)
            .map(|(_, u)| UserId::new(*u).unwrap())
            .collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryCms {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&i64::from(id)).cloned())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCms {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.state.lock().unwrap().categories.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.state.lock().unwrap().categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryCms {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.title_taken(&article.title, None) {
            return Err(DomainError::DuplicateTitle("article title already exists".into()));
        }
        if !state.categories.contains_key(&i64::from(article.category_id)) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let id = state.next_article_id;
        state.next_article_id += 1;
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            image_location: article.image_location,
            category_id: article.category_id,
            author_id: article.author_id,
            created_at: article.created_at,
            version: ArticleVersion::INITIAL,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let interference = self.take_interference();
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);

        match interference {
            Some(Interference::DeleteArticle) => {
                state.articles.remove(&id);
            }
            Some(Interference::BumpArticleVersion) => {
                if let Some(article) = state.articles.get_mut(&id) {
                    article.version = article.version.next();
                }
            }
            _ => {}
        }

        let current_version = match state.articles.get(&id) {
            Some(article) => article.version,
            None => return Err(DomainError::Conflict("article update conflict".into())),
        };
        if current_version != update.expected_version {
            return Err(DomainError::Conflict("article update conflict".into()));
        }
        if state.title_taken(&update.title, Some(id)) {
            return Err(DomainError::DuplicateTitle("article title already exists".into()));
        }

        let article = state
            .articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::Conflict("article update conflict".into()))?;
        article.revise(
            update.title,
            update.body,
            update.image_location,
            update.category_id,
        );
        article.version = article.version.next();
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(id);
        if state.articles.remove(&id).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|_, c| i64::from(c.article_id) != id);
        state.likes.retain(|(a, _)| *a != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryCms {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.lock().unwrap().articles.get(&i64::from(id)).cloned())
    }

    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        state
            .articles
            .get(&i64::from(id))
            .map(|article| state.summary(article))
            .transpose()
    }

    async fn exists_with_title(&self, title: &ArticleTitle) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().title_taken(title, None))
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        let mut articles: Vec<&Article> = state.articles.values().collect();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        articles
            .into_iter()
            .take(limit as usize)
            .map(|article| state.summary(article))
            .collect()
    }

    async fn search_by_title(&self, fragment: &str) -> DomainResult<Vec<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .filter(|a| a.title.as_str().contains(fragment))
            .cloned()
            .collect())
    }

    async fn most_commented(&self, limit: u32) -> DomainResult<Vec<ArticleHighlight>> {
        let state = self.state.lock().unwrap();
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for comment in state.comments.values() {
            *counts.entry(comment.article_id.into()).or_default() += 1;
        }
        let mut ranked: Vec<(i64, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .filter_map(|(id, _)| state.articles.get(&id))
            .map(|a| ArticleHighlight {
                id: a.id,
                title: a.title.clone(),
                image_location: a.image_location.clone(),
            })
            .collect())
    }

    async fn most_liked(&self, limit: u32) -> DomainResult<Vec<LikedArticle>> {
        let state = self.state.lock().unwrap();
        let mut ranked: Vec<LikedArticle> = state
            .articles
            .values()
            .map(|a| LikedArticle {
                article: a.clone(),
                liked_by: state.likers(a.id.into()),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.like_count()
                .cmp(&a.like_count())
                .then(a.article.id.cmp(&b.article.id))
        });
        ranked.truncate(limit as usize);
        Ok(ranked)
    }
}

#[async_trait]
impl ArticleLikeRepository for InMemoryCms {
    async fn like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.likes.insert((article_id.into(), user_id.into()));
        Ok(())
    }

    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .likes
            .remove(&(i64::from(article_id), i64::from(user_id)));
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let state = self.state.lock().unwrap();
        Ok(state.likers(article_id.into()).len() as u64)
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryCms {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.articles.contains_key(&i64::from(comment.article_id)) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let id = state.next_comment_id;
        state.next_comment_id += 1;
        let created = Comment {
            id: CommentId::new(id)?,
            body: comment.body,
            article_id: comment.article_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
        };
        state.comments.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let interference = self.take_interference();
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);
        if interference == Some(Interference::DeleteComment) {
            state.comments.remove(&id);
        }
        let comment = state
            .comments
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        // Stored as text and rebuilt, the way a row comes back from the database.
        comment.set_body(CommentBody::from_stored(update.body.into_inner()));
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .comments
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryCms {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.state.lock().unwrap().comments.get(&i64::from(id)).cloned())
    }

    async fn find_view(&self, id: CommentId) -> DomainResult<Option<CommentView>> {
        let state = self.state.lock().unwrap();
        state
            .comments
            .get(&i64::from(id))
            .map(|c| state.comment_view(c))
            .transpose()
    }

    async fn list_views(&self) -> DomainResult<Vec<CommentView>> {
        let state = self.state.lock().unwrap();
        state
            .comments
            .values()
            .map(|c| state.comment_view(c))
            .collect()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentView>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<&Comment> = state
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        comments.into_iter().map(|c| state.comment_view(c)).collect()
    }
}
