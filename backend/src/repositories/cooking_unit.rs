//! Cooking unit repository - database operations for the cooking_units table
//!
//! Same contract shape as the ingredient store over its own table. Cooking
//! units are a standalone catalog: nothing references them yet.

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use recipes_catalog_shared::models::CookingUnit;
use sqlx::SqlitePool;

/// Cooking unit row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct CookingUnitRow {
    pub id: i64,
    pub name: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl CookingUnitRow {
    /// Storage row -> domain entity
    pub(crate) fn into_entity(self) -> CookingUnit {
        CookingUnit {
            id: self.id,
            name: self.name,
        }
    }
}

/// Input for creating a new cooking unit
#[derive(Debug, Clone)]
pub struct NewCookingUnit {
    pub name: String,
}

/// Equality filter; a `None` name matches every row
#[derive(Debug, Clone, Default)]
pub struct CookingUnitFilter {
    pub name: Option<String>,
}

/// Cooking unit repository
pub struct CookingUnitRepository;

impl CookingUnitRepository {
    /// Find cooking unit by ID
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> RepoResult<CookingUnit> {
        let row = sqlx::query_as::<_, CookingUnitRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM cooking_units
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        Ok(row.into_entity())
    }

    /// List cooking units matching the filter
    pub async fn find_by_filter(
        db: &SqlitePool,
        filter: &CookingUnitFilter,
    ) -> RepoResult<Vec<CookingUnit>> {
        let rows = sqlx::query_as::<_, CookingUnitRow>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM cooking_units
            WHERE (?1 IS NULL OR name = ?1)
            ORDER BY id ASC
            "#,
        )
        .bind(&filter.name)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(CookingUnitRow::into_entity).collect())
    }

    /// Count cooking units matching the filter
    pub async fn count_by_filter(db: &SqlitePool, filter: &CookingUnitFilter) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM cooking_units
            WHERE (?1 IS NULL OR name = ?1)
            "#,
        )
        .bind(&filter.name)
        .fetch_one(db)
        .await?;

        Ok(count)
    }

    /// Create a new cooking unit; the store assigns the id
    pub async fn create(db: &SqlitePool, input: NewCookingUnit) -> RepoResult<CookingUnit> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, CookingUnitRow>(
            r#"
            INSERT INTO cooking_units (name, created_at, updated_at)
            VALUES (?, ?, ?)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await?;

        Ok(row.into_entity())
    }

    /// Replace all fields of the row matching the entity's id
    pub async fn update(db: &SqlitePool, unit: &CookingUnit) -> RepoResult<CookingUnit> {
        let row = sqlx::query_as::<_, CookingUnitRow>(
            r#"
            UPDATE cooking_units
            SET name = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(&unit.name)
        .bind(Utc::now())
        .bind(unit.id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        Ok(row.into_entity())
    }

    /// Delete a cooking unit by id
    pub async fn delete(db: &SqlitePool, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM cooking_units WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
