//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for journal_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<journal_core::domain::User> for ActiveModel {
    fn from(user: journal_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.into()),
        }
    }
}
