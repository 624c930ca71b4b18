use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{NewRecord, Table};
use crate::database::query_builder::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct District {
    pub id: i32,
    pub name: String,
    pub district_code: String,
    pub county_id: i32,
}

impl Table for District {
    const TABLE_NAME: &'static str = "districts";
    const COLUMNS: &'static [&'static str] = &["id", "name", "district_code", "county_id"];
    const LABEL: &'static str = "District";
}

/// Validated input for a district insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewDistrict {
    pub name: String,
    pub district_code: String,
    pub county_id: i32,
}

impl NewRecord for NewDistrict {
    type Output = District;

    fn values(&self) -> Vec<(&'static str, SqlParam)> {
        vec![
            ("name", SqlParam::Text(self.name.clone())),
            ("district_code", SqlParam::Text(self.district_code.clone())),
            ("county_id", SqlParam::Int(self.county_id)),
        ]
    }
}
