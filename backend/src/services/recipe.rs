//! Recipe service
//!
//! Boundary validation and partial-update merging for the recipe
//! aggregate. Merging happens here so the store only ever sees full
//! replacement state; edits are last-write-wins by design.

use crate::error::ApiError;
use crate::repositories::{NewRecipe, RecipeFilter, RecipeRepository, UpdateRecipe};
use recipes_catalog_shared::models::Recipe;
use recipes_catalog_shared::types::{CreateRecipeRequest, RecipeQuery, UpdateRecipeRequest};
use sqlx::SqlitePool;

/// Recipe service
pub struct RecipeService;

impl RecipeService {
    /// Create a recipe aggregate; the name must be non-empty and every
    /// referenced ingredient must already exist
    pub async fn create(db: &SqlitePool, req: CreateRecipeRequest) -> Result<Recipe, ApiError> {
        if req.name.trim().is_empty() {
            return Err(ApiError::Validation(
                "recipe name must not be empty".to_string(),
            ));
        }

        Ok(RecipeRepository::create(
            db,
            NewRecipe {
                name: req.name,
                description: req.description,
                ingredient_ids: req.ingredients.iter().map(|r| r.id).collect(),
                steps: req.steps,
            },
        )
        .await?)
    }

    /// Fetch a recipe aggregate by id
    pub async fn get(db: &SqlitePool, id: i64) -> Result<Recipe, ApiError> {
        Ok(RecipeRepository::find_by_id(db, id).await?)
    }

    /// List recipes matching the query; an empty query matches all
    pub async fn list(db: &SqlitePool, query: RecipeQuery) -> Result<Vec<Recipe>, ApiError> {
        let filter = RecipeFilter { id: query.id };
        Ok(RecipeRepository::find_by_filter(db, &filter).await?)
    }

    /// Count recipes matching the query
    pub async fn count(db: &SqlitePool, query: RecipeQuery) -> Result<i64, ApiError> {
        let filter = RecipeFilter { id: query.id };
        Ok(RecipeRepository::count_by_filter(db, &filter).await?)
    }

    /// Apply a partial update: absent fields keep their stored value; a
    /// present step list replaces the whole sequence and is reconciled
    /// against the persisted rows by the store
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        req: UpdateRecipeRequest,
    ) -> Result<Recipe, ApiError> {
        let current = RecipeRepository::find_by_id(db, id).await?;

        let name = req.name.unwrap_or(current.name);
        if name.trim().is_empty() {
            return Err(ApiError::Validation(
                "recipe name must not be empty".to_string(),
            ));
        }
        let description = req.description.or(current.description);
        let ingredient_ids = match req.ingredients {
            Some(refs) => refs.iter().map(|r| r.id).collect(),
            None => current.ingredients.iter().map(|i| i.id).collect(),
        };
        let steps = req.steps.unwrap_or(current.steps);

        Ok(RecipeRepository::update(
            db,
            id,
            UpdateRecipe {
                name,
                description,
                ingredient_ids,
                steps,
            },
        )
        .await?)
    }

    /// Delete a recipe aggregate by id
    pub async fn delete(db: &SqlitePool, id: i64) -> Result<(), ApiError> {
        Ok(RecipeRepository::delete(db, id).await?)
    }
}
