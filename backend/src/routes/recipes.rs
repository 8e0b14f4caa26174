//! Recipe API routes
//!
//! The recipe endpoints expose the aggregate as one resource: responses
//! always carry the steps in cooking order and the ingredients resolved
//! to full records.

use crate::error::ApiError;
use crate::services::RecipeService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    routing::post,
    Json, Router,
};
use recipes_catalog_shared::types::{
    CountResponse, CreateRecipeRequest, RecipeQuery, RecipeResponse, UpdateRecipeRequest,
};

/// Create recipe routes
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_recipe).get(list_recipes))
        .route("/count", get(count_recipes))
        .route(
            "/:id",
            get(get_recipe).patch(edit_recipe).delete(delete_recipe),
        )
}

/// POST /api/v1/recipes - Create a recipe with steps and ingredient links
async fn create_recipe(
    State(state): State<AppState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let recipe = RecipeService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// GET /api/v1/recipes/:id - Fetch a recipe aggregate by id
async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = RecipeService::get(state.db(), id).await?;
    Ok(Json(recipe.into()))
}

/// GET /api/v1/recipes - List recipes; an empty query lists the catalog
async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let recipes = RecipeService::list(state.db(), query).await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

/// GET /api/v1/recipes/count - Count recipes matching the filter
async fn count_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = RecipeService::count(state.db(), query).await?;
    Ok(Json(CountResponse { count }))
}

/// PATCH /api/v1/recipes/:id - Partially update a recipe
///
/// A present `steps` list replaces the whole sequence (reconciled against
/// the stored rows); a present `ingredients` list replaces the link set.
async fn edit_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = RecipeService::update(state.db(), id, req).await?;
    Ok(Json(recipe.into()))
}

/// DELETE /api/v1/recipes/:id - Delete a recipe and its steps
async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    RecipeService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
