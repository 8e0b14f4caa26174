//! Ingredient service
//!
//! Boundary validation and partial-update merging in front of the
//! ingredient store.

use crate::error::ApiError;
use crate::repositories::{IngredientFilter, IngredientRepository, NewIngredient};
use recipes_catalog_shared::models::Ingredient;
use recipes_catalog_shared::types::{
    CreateIngredientRequest, IngredientQuery, UpdateIngredientRequest,
};
use sqlx::SqlitePool;

/// Ingredient service
pub struct IngredientService;

impl IngredientService {
    /// Create an ingredient; name and type must be non-empty
    pub async fn create(
        db: &SqlitePool,
        req: CreateIngredientRequest,
    ) -> Result<Ingredient, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::Validation(
                "ingredient name must not be empty".to_string(),
            ));
        }
        if req.kind.trim().is_empty() {
            return Err(ApiError::Validation(
                "ingredient type must not be empty".to_string(),
            ));
        }

        Ok(IngredientRepository::create(
            db,
            NewIngredient {
                name: req.name,
                kind: req.kind,
            },
        )
        .await?)
    }

    /// Fetch an ingredient by id
    pub async fn get(db: &SqlitePool, id: i64) -> Result<Ingredient, ApiError> {
        Ok(IngredientRepository::find_by_id(db, id).await?)
    }

    /// List ingredients matching the query
    pub async fn list(db: &SqlitePool, query: IngredientQuery) -> Result<Vec<Ingredient>, ApiError> {
        let filter = IngredientFilter {
            name: query.name,
            kind: query.kind,
        };
        Ok(IngredientRepository::find_by_filter(db, &filter).await?)
    }

    /// Count ingredients matching the query
    pub async fn count(db: &SqlitePool, query: IngredientQuery) -> Result<i64, ApiError> {
        let filter = IngredientFilter {
            name: query.name,
            kind: query.kind,
        };
        Ok(IngredientRepository::count_by_filter(db, &filter).await?)
    }

    /// Apply a partial update: absent fields keep their stored value
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        req: UpdateIngredientRequest,
    ) -> Result<Ingredient, ApiError> {
        let mut current = IngredientRepository::find_by_id(db, id).await?;
        if let Some(name) = req.name {
            current.name = name;
        }
        if let Some(kind) = req.kind {
            current.kind = kind;
        }

        Ok(IngredientRepository::update(db, &current).await?)
    }

    /// Delete an ingredient by id
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), ApiError> {
        Ok(IngredientRepository::delete(db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::testutil::memory_pool;

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        let err = IngredientService::create(
            &pool,
            CreateIngredientRequest {
                name: "  ".to_string(),
                kind: "vegetable".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_kind() {
        let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        let err = IngredientService::create(
            &pool,
            CreateIngredientRequest {
                name: "tomato".to_string(),
                kind: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let pool = memory_pool().await;
        let created = IngredientService::create(
            &pool,
            CreateIngredientRequest {
                name: "tomato".to_string(),
                kind: "vegetable".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = IngredientService::update(
            &pool,
            created.id,
            UpdateIngredientRequest {
                name: Some("roma tomato".to_string()),
                kind: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "roma tomato");
        assert_eq!(updated.kind, "vegetable");
    }
}
