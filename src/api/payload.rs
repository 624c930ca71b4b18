use serde::Deserialize;

use super::fields::{FieldCheck, Scalar};
use crate::database::models::{NewDistrict, NewSchool};
use crate::error::ApiError;

/// Body of `POST /api/v1/authentication`
#[derive(Debug, Default, Deserialize)]
pub struct AuthenticationPayload {
    pub email: Option<Scalar>,
    #[serde(rename = "appName")]
    pub app_name: Option<Scalar>,
}

/// Caller identity requested in a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub email: String,
    pub app_name: String,
}

impl AuthenticationPayload {
    pub fn validate(self) -> Result<TokenRequest, ApiError> {
        let mut check = FieldCheck::new();
        let email = check.email("email", self.email);
        let app_name = check.text("appName", self.app_name);

        match (email, app_name) {
            (Some(email), Some(app_name)) => Ok(TokenRequest { email, app_name }),
            _ => Err(check.into_error()),
        }
    }
}

/// Body of `POST /api/v1/districts`
#[derive(Debug, Default, Deserialize)]
pub struct DistrictPayload {
    pub name: Option<Scalar>,
    pub district_code: Option<Scalar>,
    pub county_id: Option<Scalar>,
}

impl DistrictPayload {
    pub fn validate(self) -> Result<NewDistrict, ApiError> {
        let mut check = FieldCheck::new();
        let name = check.text("name", self.name);
        let district_code = check.text("district_code", self.district_code);
        let county_id = check.integer("county_id", self.county_id);

        match (name, district_code, county_id) {
            (Some(name), Some(district_code), Some(county_id)) => Ok(NewDistrict {
                name,
                district_code,
                county_id,
            }),
            _ => Err(check.into_error()),
        }
    }
}

/// Body of `POST /api/v1/schools`
#[derive(Debug, Default, Deserialize)]
pub struct SchoolPayload {
    pub name: Option<Scalar>,
    pub school_code: Option<Scalar>,
    pub student_count: Option<Scalar>,
    pub teacher_count: Option<Scalar>,
    pub student_teacher_ratio: Option<Scalar>,
    pub district_id: Option<Scalar>,
}

impl SchoolPayload {
    pub fn validate(self) -> Result<NewSchool, ApiError> {
        let mut check = FieldCheck::new();
        let name = check.text("name", self.name);
        let school_code = check.text("school_code", self.school_code);
        let student_count = check.non_negative_integer("student_count", self.student_count);
        let teacher_count = check.decimal("teacher_count", self.teacher_count);
        let student_teacher_ratio = check.decimal("student_teacher_ratio", self.student_teacher_ratio);
        let district_id = check.integer("district_id", self.district_id);

        match (name, school_code, student_count, teacher_count, student_teacher_ratio, district_id) {
            (
                Some(name),
                Some(school_code),
                Some(student_count),
                Some(teacher_count),
                Some(student_teacher_ratio),
                Some(district_id),
            ) => Ok(NewSchool {
                name,
                school_code,
                student_count,
                teacher_count,
                student_teacher_ratio,
                district_id,
            }),
            _ => Err(check.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn district_payload_accepts_string_ids() {
        let payload: DistrictPayload = serde_json::from_value(json!({
            "name": "Denver",
            "district_code": "0034",
            "county_id": "1"
        }))
        .unwrap();

        assert_eq!(
            payload.validate().unwrap(),
            NewDistrict {
                name: "Denver".to_string(),
                district_code: "0034".to_string(),
                county_id: 1,
            }
        );
    }

    #[test]
    fn school_payload_coerces_every_numeric_field() {
        let payload: SchoolPayload = serde_json::from_value(json!({
            "name": "School for the Dans",
            "school_code": "1234",
            "student_count": "2",
            "teacher_count": "1",
            "student_teacher_ratio": ".5",
            "district_id": "1"
        }))
        .unwrap();

        let school = payload.validate().unwrap();
        assert_eq!(school.student_count, 2);
        assert_eq!(school.teacher_count, Decimal::new(1, 0));
        assert_eq!(school.student_teacher_ratio, Decimal::new(5, 1));
        assert_eq!(school.district_id, 1);
    }

    #[test]
    fn school_payload_takes_float_shaped_counts() {
        let payload: SchoolPayload = serde_json::from_value(json!({
            "name": "School for the Dans",
            "school_code": 1234,
            "student_count": 2.0,
            "teacher_count": 1,
            "student_teacher_ratio": 0.5,
            "district_id": 1.0
        }))
        .unwrap();

        let school = payload.validate().unwrap();
        assert_eq!(school.school_code, "1234");
        assert_eq!(school.student_count, 2);
        assert_eq!(school.district_id, 1);
    }

    #[test]
    fn school_payload_lists_missing_fields() {
        let payload: SchoolPayload = serde_json::from_value(json!({
            "name": "Half a school",
            "student_count": 10,
            "district_id": null
        }))
        .unwrap();

        let err = payload.validate().unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let fields = err.to_json()["field_errors"].as_object().unwrap().clone();
        let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["district_id", "school_code", "student_teacher_ratio", "teacher_count"]
        );
    }

    #[test]
    fn authentication_payload_uses_camel_case_app_name() {
        let payload: AuthenticationPayload =
            serde_json::from_value(json!({ "email": "sam@turing.io", "appName": "byob" })).unwrap();
        let request = payload.validate().unwrap();
        assert_eq!(request.email, "sam@turing.io");
        assert_eq!(request.app_name, "byob");

        let payload: AuthenticationPayload =
            serde_json::from_value(json!({ "email": "sam@turing.io", "app_name": "byob" })).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_scalar_values_fail_to_deserialize() {
        let parsed = serde_json::from_value::<DistrictPayload>(json!({
            "name": ["Denver"],
            "district_code": "0034",
            "county_id": 1
        }));
        assert!(parsed.is_err());
    }
}
