//! Cooking unit service

use crate::error::ApiError;
use crate::repositories::{CookingUnitFilter, CookingUnitRepository, NewCookingUnit};
use recipes_catalog_shared::models::CookingUnit;
use recipes_catalog_shared::types::{
    CookingUnitQuery, CreateCookingUnitRequest, UpdateCookingUnitRequest,
};
use sqlx::SqlitePool;

/// Cooking unit service
pub struct CookingUnitService;

impl CookingUnitService {
    /// Create a cooking unit; the name must be non-empty
    pub async fn create(
        db: &SqlitePool,
        req: CreateCookingUnitRequest,
    ) -> Result<CookingUnit, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::Validation(
                "cooking unit name must not be empty".to_string(),
            ));
        }

        Ok(CookingUnitRepository::create(db, NewCookingUnit { name: req.name }).await?)
    }

    /// Fetch a cooking unit by id
    pub async fn get(db: &SqlitePool, id: i64) -> Result<CookingUnit, ApiError> {
        Ok(CookingUnitRepository::find_by_id(db, id).await?)
    }

    /// List cooking units matching the query
    pub async fn list(
        db: &SqlitePool,
        query: CookingUnitQuery,
    ) -> Result<Vec<CookingUnit>, ApiError> {
        let filter = CookingUnitFilter { name: query.name };
        Ok(CookingUnitRepository::find_by_filter(db, &filter).await?)
    }

    /// Count cooking units matching the query
    pub async fn count(db: &SqlitePool, query: CookingUnitQuery) -> Result<i64, ApiError> {
        let filter = CookingUnitFilter { name: query.name };
        Ok(CookingUnitRepository::count_by_filter(db, &filter).await?)
    }

    /// Apply a partial update: absent fields keep their stored value
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        req: UpdateCookingUnitRequest,
    ) -> Result<CookingUnit, ApiError> {
        let mut current = CookingUnitRepository::find_by_id(db, id).await?;
        if let Some(name) = req.name {
            current.name = name;
        }

        Ok(CookingUnitRepository::update(db, &current).await?)
    }

    /// Delete a cooking unit by id
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), ApiError> {
        Ok(CookingUnitRepository::delete(db, id).await?)
    }
}
