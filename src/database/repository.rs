use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewRecord, Table};
use crate::database::query_builder::{self, QueryBuilder};

/// Typed read/insert access to one table
pub struct Repository<T> {
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Table> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        QueryBuilder::<T>::new().select_all(&self.pool).await
    }

    pub async fn select_id(&self, id: i32) -> Result<Option<T>, DatabaseError> {
        QueryBuilder::<T>::new()
            .where_id(id)
            .select_optional(&self.pool)
            .await
    }

    /// Like `select_id`, but a missing row is an error
    pub async fn select_404(&self, id: i32) -> Result<T, DatabaseError> {
        self.select_id(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} {} not found", T::LABEL, id)))
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        QueryBuilder::<T>::new().count(&self.pool).await
    }

    pub async fn create<N>(&self, record: &N) -> Result<T, DatabaseError>
    where
        N: NewRecord<Output = T>,
    {
        query_builder::insert_returning(record, &self.pool).await
    }
}
