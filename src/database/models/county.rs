use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Table;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct County {
    pub id: i32,
    pub name: String,
    pub county_code: String,
}

impl Table for County {
    const TABLE_NAME: &'static str = "counties";
    const COLUMNS: &'static [&'static str] = &["id", "name", "county_code"];
    const LABEL: &'static str = "County";
}
