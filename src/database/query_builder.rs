use rust_decimal::Decimal;
use sqlx::{self, postgres::PgArguments, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::models::{NewRecord, Table};

/// A bound query parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
    Decimal(Decimal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}

/// Builds parameterized statements against a single `Table`
pub struct QueryBuilder<T> {
    where_id: Option<i32>,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Table> QueryBuilder<T> {
    pub fn new() -> Self {
        Self {
            where_id: None,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn where_id(mut self, id: i32) -> Self {
        self.where_id = Some(id);
        self
    }

    pub fn to_sql(&self) -> SqlResult {
        let mut query = format!(
            "SELECT {} FROM {}",
            column_list(T::COLUMNS),
            quote_identifier(T::TABLE_NAME)
        );
        let mut params = Vec::new();

        if let Some(id) = self.where_id {
            query.push_str(" WHERE \"id\" = $1");
            params.push(SqlParam::Int(id));
        }
        query.push_str(" ORDER BY \"id\"");

        SqlResult { query, params }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        SqlResult {
            query: format!("SELECT COUNT(*) FROM {}", quote_identifier(T::TABLE_NAME)),
            params: vec![],
        }
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_all(pool).await?)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let sql_result = self.to_sql();
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_optional(pool).await?)
    }

    pub async fn count(self, pool: &PgPool) -> Result<i64, DatabaseError> {
        let sql_result = self.to_count_sql();
        let count: i64 = sqlx::query_scalar(&sql_result.query).fetch_one(pool).await?;
        Ok(count)
    }
}

impl<T: Table> Default for QueryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `INSERT ... RETURNING` for a new record, returning every column of the row
pub fn insert_sql<N: NewRecord>(record: &N) -> SqlResult {
    let values = record.values();
    let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
    let placeholders: Vec<String> = (1..=values.len()).map(|i| format!("${}", i)).collect();

    SqlResult {
        query: format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quote_identifier(N::Output::TABLE_NAME),
            column_list(&columns),
            placeholders.join(", "),
            column_list(N::Output::COLUMNS),
        ),
        params: values.into_iter().map(|(_, param)| param).collect(),
    }
}

pub async fn insert_returning<N: NewRecord>(
    record: &N,
    pool: &PgPool,
) -> Result<N::Output, DatabaseError> {
    let sql_result = insert_sql(record);
    let mut q = sqlx::query_as::<_, N::Output>(&sql_result.query);
    for p in sql_result.params.iter() {
        q = bind_param_query_as(q, p);
    }
    Ok(q.fetch_one(pool).await?)
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| quote_identifier(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote SQL identifier to prevent injection
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Decimal(d) => q.bind(*d),
    }
}
