//! Post entity for SeaORM.
//!
//! Likes and comments are embedded documents stored as JSONB columns,
//! mirroring the document shape the domain works with.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author: Uuid,
    pub author_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image_url: Option<String>,
    pub status: String,
    pub views: i64,
    pub likes: Json,
    pub comments: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::Author",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for journal_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            author: model.author,
            author_name: model.author_name,
            status: model.status.parse().unwrap_or_default(),
            views: model.views,
            likes: serde_json::from_value(model.likes).unwrap_or_default(),
            comments: serde_json::from_value(model.comments).unwrap_or_default(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<journal_core::domain::Post> for ActiveModel {
    fn from(post: journal_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            author: Set(post.author),
            author_name: Set(post.author_name),
            title: Set(post.title),
            content: Set(post.content),
            image_url: Set(post.image_url),
            status: Set(post.status.as_str().to_string()),
            views: Set(post.views),
            likes: Set(serde_json::to_value(&post.likes).unwrap_or_default()),
            comments: Set(serde_json::to_value(&post.comments).unwrap_or_default()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
