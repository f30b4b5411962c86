//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use journal_core::domain::{Post, PostStatus, User};
use journal_core::error::RepoError;
use journal_core::ports::{PostFilter, PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();

        query = match filter {
            PostFilter::All => query,
            PostFilter::Published => {
                query.filter(post::Column::Status.eq(PostStatus::Published.as_str()))
            }
            PostFilter::ByAuthor(author) => query.filter(post::Column::Author.eq(author)),
            PostFilter::PublishedByAuthor(author) => query
                .filter(post::Column::Author.eq(author))
                .filter(post::Column::Status.eq(PostStatus::Published.as_str())),
        };

        let result = query
            .order_by_desc(post::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), RepoError> {
        // Single UPDATE so concurrent bumps never lose a count.
        let result = PostEntity::update_many()
            .col_expr(post::Column::Views, Expr::col(post::Column::Views).add(1))
            .filter(post::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
