use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{NewRecord, Table};
use crate::database::query_builder::SqlParam;

/// A school row. Decimal columns go out as JSON numbers, not strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct School {
    pub id: i32,
    pub name: String,
    pub school_code: String,
    pub student_count: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub teacher_count: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub student_teacher_ratio: Decimal,
    pub district_id: i32,
}

impl Table for School {
    const TABLE_NAME: &'static str = "schools";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "school_code",
        "student_count",
        "teacher_count",
        "student_teacher_ratio",
        "district_id",
    ];
    const LABEL: &'static str = "School";
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name: String,
    pub school_code: String,
    pub student_count: i32,
    pub teacher_count: Decimal,
    pub student_teacher_ratio: Decimal,
    pub district_id: i32,
}

impl NewRecord for NewSchool {
    type Output = School;

    fn values(&self) -> Vec<(&'static str, SqlParam)> {
        vec![
            ("name", SqlParam::Text(self.name.clone())),
            ("school_code", SqlParam::Text(self.school_code.clone())),
            ("student_count", SqlParam::Int(self.student_count)),
            ("teacher_count", SqlParam::Decimal(self.teacher_count)),
            ("student_teacher_ratio", SqlParam::Decimal(self.student_teacher_ratio)),
            ("district_id", SqlParam::Int(self.district_id)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_decimals_as_numbers() {
        let school = School {
            id: 2,
            name: "ALAMOSA HIGH SCHOOL".to_string(),
            school_code: "118".to_string(),
            student_count: 598,
            teacher_count: Decimal::new(3302, 2),
            student_teacher_ratio: Decimal::new(1811, 2),
            district_id: 3,
        };

        let value = serde_json::to_value(&school).unwrap();
        assert!(value["teacher_count"].is_number());
        assert!((value["teacher_count"].as_f64().unwrap() - 33.02).abs() < 1e-9);
        assert!((value["student_teacher_ratio"].as_f64().unwrap() - 18.11).abs() < 1e-9);
        assert_eq!(value["student_count"], json!(598));
    }
}
