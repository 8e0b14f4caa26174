//! Ingredient repository - database operations for the ingredients table

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use recipes_catalog_shared::models::Ingredient;
use sqlx::SqlitePool;

/// Ingredient row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct IngredientRow {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl IngredientRow {
    /// Storage row -> domain entity
    pub(crate) fn into_entity(self) -> Ingredient {
        Ingredient {
            id: self.id,
            name: self.name,
            kind: self.kind,
        }
    }
}

/// Input for creating a new ingredient
#[derive(Debug, Clone)]
pub struct NewIngredient {
    pub name: String,
    pub kind: String,
}

/// Equality filter; `None` fields match every row
#[derive(Debug, Clone, Default)]
pub struct IngredientFilter {
    pub name: Option<String>,
    pub kind: Option<String>,
}

/// Ingredient repository
pub struct IngredientRepository;

impl IngredientRepository {
    /// Find ingredient by ID
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> RepoResult<Ingredient> {
        let row = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM ingredients
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        Ok(row.into_entity())
    }

    /// List ingredients matching the filter
    pub async fn find_by_filter(
        db: &SqlitePool,
        filter: &IngredientFilter,
    ) -> RepoResult<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM ingredients
            WHERE (?1 IS NULL OR name = ?1)
              AND (?2 IS NULL OR type = ?2)
            ORDER BY id ASC
            "#,
        )
        .bind(&filter.name)
        .bind(&filter.kind)
        .fetch_all(db)
        .await?;

        Ok(rows.into_iter().map(IngredientRow::into_entity).collect())
    }

    /// Count ingredients matching the filter
    pub async fn count_by_filter(db: &SqlitePool, filter: &IngredientFilter) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM ingredients
            WHERE (?1 IS NULL OR name = ?1)
              AND (?2 IS NULL OR type = ?2)
            "#,
        )
        .bind(&filter.name)
        .bind(&filter.kind)
        .fetch_one(db)
        .await?;

        Ok(count)
    }

    /// Create a new ingredient; the store assigns the id
    pub async fn create(db: &SqlitePool, input: NewIngredient) -> RepoResult<Ingredient> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, IngredientRow>(
            r#"
            INSERT INTO ingredients (name, type, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, type, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.kind)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await?;

        Ok(row.into_entity())
    }

    /// Replace all fields of the row matching the entity's id
    pub async fn update(db: &SqlitePool, ingredient: &Ingredient) -> RepoResult<Ingredient> {
        let row = sqlx::query_as::<_, IngredientRow>(
            r#"
            UPDATE ingredients
            SET name = ?, type = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, type, created_at, updated_at
            "#,
        )
        .bind(&ingredient.name)
        .bind(&ingredient.kind)
        .bind(Utc::now())
        .bind(ingredient.id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        Ok(row.into_entity())
    }

    /// Delete an ingredient by id, unlinking it from any recipes first
    ///
    /// Deleting a linked ingredient is valid; the link rows go with it,
    /// the recipes themselves stay.
    pub async fn delete(db: &SqlitePool, id: i64) -> RepoResult<()> {
        let mut tx = db.begin().await?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE ingredient_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM ingredients WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }
}
