use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DbConn, EntityTrait, IdenStatic, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait,
};

use journal_core::error::RepoError;
use journal_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
///
/// The connection pool is shared across repositories via `Arc` rather
/// than cloning the connection handle.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();

        // Domain entities arrive with their id already generated, so a
        // plain ActiveModel save would issue an UPDATE against a row
        // that does not exist yet. Upsert on the primary key instead:
        // fresh ids insert, existing rows update in place.
        let pk_cols: Vec<E::Column> = E::PrimaryKey::iter()
            .map(|pk| pk.into_column())
            .collect();
        let pk_names: Vec<&str> = pk_cols.iter().map(|c| c.as_str()).collect();
        let on_conflict = OnConflict::columns(E::PrimaryKey::iter().map(|pk| pk.into_column()))
            .update_columns(E::Column::iter().filter(|c| !pk_names.contains(&c.as_str())))
            .to_owned();

        let model = E::insert(active_model)
            .on_conflict(on_conflict)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("duplicate") || err_str.contains("unique") {
                    RepoError::Constraint("Entity already exists".to_string())
                } else {
                    RepoError::Query(err_str)
                }
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
