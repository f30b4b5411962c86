#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::database::entity::{post, user};
    use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
    use journal_core::domain::{Post, User};
    use journal_core::ports::BaseRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let author = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                author,
                author_name: "amy".to_owned(),
                title: "Test Post".to_owned(),
                content: "Content".to_owned(),
                image_url: None,
                status: "published".to_owned(),
                views: 0,
                likes: serde_json::json!([]),
                comments: serde_json::json!([]),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
        assert_eq!(found.author_name, "amy");
        assert!(found.likes.is_empty());
    }

    #[tokio::test]
    async fn test_save_new_user_inserts() {
        // Domain entities carry a pre-generated id, so persisting a
        // fresh one must still hit the INSERT path (upserting on the
        // primary key), not an UPDATE against a missing row.
        let amy = User::new("amy".to_owned(), "hash".to_owned());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: amy.id,
                username: amy.username.clone(),
                password_hash: amy.password_hash.clone(),
                created_at: amy.created_at.into(),
            }]])
            .into_connection();

        let repo = PostgresUserRepository::new(Arc::new(db));

        let saved: User = repo.save(amy.clone()).await.unwrap();
        assert_eq!(saved.id, amy.id);
        assert_eq!(saved.username, "amy");

        let db = Arc::try_unwrap(repo.db).unwrap_or_else(|_| panic!("connection still shared"));
        let statements = format!("{:?}", db.into_transaction_log());
        assert!(statements.contains("INSERT INTO"));
        assert!(statements.contains("ON CONFLICT"));
        assert!(!statements.contains("UPDATE \"users\""));
    }
}
