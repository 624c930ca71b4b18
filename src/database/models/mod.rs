use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow};

use crate::database::query_builder::SqlParam;

pub mod county;
pub mod district;
pub mod school;

pub use county::County;
pub use district::{District, NewDistrict};
pub use school::{NewSchool, School};

/// A table whose rows map one-to-one onto a model struct
pub trait Table: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + Serialize + 'static {
    const TABLE_NAME: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Singular name used in client-facing messages
    const LABEL: &'static str;
}

/// Column values for inserting a new row of `Output`
pub trait NewRecord {
    type Output: Table;

    fn values(&self) -> Vec<(&'static str, SqlParam)>;
}
