//! Table definitions and the reference seed data.
//!
//! `seed` wipes all three tables and reloads the same rows every time, so
//! tests can rely on fixed ids and counts.

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool};
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{County, District, School};

const SCHEMA_SQL: &str = include_str!("../../fixtures/schema.sql");

/// Create the tables if they do not exist yet
pub async fn install_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    pool.execute(SCHEMA_SQL).await?;
    info!("Installed schema (counties, districts, schools)");
    Ok(())
}

pub fn counties() -> Vec<County> {
    vec![
        County { id: 1, name: "ADAMS".to_string(), county_code: "1".to_string() },
        County { id: 2, name: "ALAMOSA".to_string(), county_code: "2".to_string() },
    ]
}

pub fn districts() -> Vec<District> {
    vec![
        District {
            id: 1,
            name: "MAPLETON 1".to_string(),
            district_code: "10".to_string(),
            county_id: 1,
        },
        District {
            id: 2,
            name: "ADAMS 12 FIVE STAR SCHOOLS".to_string(),
            district_code: "20".to_string(),
            county_id: 1,
        },
        District {
            id: 3,
            name: "ALAMOSA RE-11J".to_string(),
            district_code: "100".to_string(),
            county_id: 2,
        },
        District {
            id: 4,
            name: "SANGRE DE CRISTO RE-22J".to_string(),
            district_code: "110".to_string(),
            county_id: 2,
        },
    ]
}

pub fn schools() -> Vec<School> {
    vec![
        School {
            id: 1,
            name: "MAPLETON EARLY COLLEGE HIGH SCHOOL".to_string(),
            school_code: "5".to_string(),
            student_count: 334,
            teacher_count: Decimal::new(1650, 2),
            student_teacher_ratio: Decimal::new(2024, 2),
            district_id: 1,
        },
        School {
            id: 2,
            name: "ALAMOSA HIGH SCHOOL".to_string(),
            school_code: "118".to_string(),
            student_count: 598,
            teacher_count: Decimal::new(3302, 2),
            student_teacher_ratio: Decimal::new(1811, 2),
            district_id: 3,
        },
    ]
}

/// Truncate every table and load the reference rows in one transaction
pub async fn seed(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE schools, districts, counties RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    for county in counties() {
        sqlx::query("INSERT INTO counties (id, name, county_code) VALUES ($1, $2, $3)")
            .bind(county.id)
            .bind(&county.name)
            .bind(&county.county_code)
            .execute(&mut *tx)
            .await?;
    }

    for district in districts() {
        sqlx::query(
            "INSERT INTO districts (id, name, district_code, county_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(district.id)
        .bind(&district.name)
        .bind(&district.district_code)
        .bind(district.county_id)
        .execute(&mut *tx)
        .await?;
    }

    for school in schools() {
        sqlx::query(
            "INSERT INTO schools \
             (id, name, school_code, student_count, teacher_count, student_teacher_ratio, district_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(school.id)
        .bind(&school.name)
        .bind(&school.school_code)
        .bind(school.student_count)
        .bind(school.teacher_count)
        .bind(school.student_teacher_ratio)
        .bind(school.district_id)
        .execute(&mut *tx)
        .await?;
    }

    // Explicit ids leave the sequences behind; move them past the seeded rows
    for table in ["counties", "districts", "schools"] {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
        );
        sqlx::query(&sql).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!(
        "Seeded {} counties, {} districts, {} schools",
        counties().len(),
        districts().len(),
        schools().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_reference_existing_parents() {
        let county_ids: Vec<i32> = counties().iter().map(|c| c.id).collect();
        let district_ids: Vec<i32> = districts().iter().map(|d| d.id).collect();

        assert!(districts().iter().all(|d| county_ids.contains(&d.county_id)));
        assert!(schools().iter().all(|s| district_ids.contains(&s.district_id)));
    }

    #[test]
    fn seed_counts_match_reference_fixture() {
        assert_eq!(counties().len(), 2);
        assert_eq!(districts().len(), 4);
        assert_eq!(schools().len(), 2);
    }
}
