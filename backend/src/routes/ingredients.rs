//! Ingredient API routes

use crate::error::ApiError;
use crate::services::IngredientService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    routing::post,
    Json, Router,
};
use recipes_catalog_shared::types::{
    CountResponse, CreateIngredientRequest, IngredientQuery, IngredientResponse,
    UpdateIngredientRequest,
};

/// Create ingredient routes
pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ingredient).get(list_ingredients))
        .route("/count", get(count_ingredients))
        .route(
            "/:id",
            get(get_ingredient)
                .patch(edit_ingredient)
                .delete(delete_ingredient),
        )
}

/// POST /api/v1/ingredients - Create an ingredient
async fn create_ingredient(
    State(state): State<AppState>,
    Json(req): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<IngredientResponse>), ApiError> {
    let ingredient = IngredientService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(ingredient.into())))
}

/// GET /api/v1/ingredients/:id - Fetch an ingredient by id
async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<IngredientResponse>, ApiError> {
    let ingredient = IngredientService::get(state.db(), id).await?;
    Ok(Json(ingredient.into()))
}

/// GET /api/v1/ingredients - List ingredients matching the query filter
async fn list_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Result<Json<Vec<IngredientResponse>>, ApiError> {
    let ingredients = IngredientService::list(state.db(), query).await?;
    Ok(Json(
        ingredients.into_iter().map(IngredientResponse::from).collect(),
    ))
}

/// GET /api/v1/ingredients/count - Count ingredients matching the filter
async fn count_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = IngredientService::count(state.db(), query).await?;
    Ok(Json(CountResponse { count }))
}

/// PATCH /api/v1/ingredients/:id - Partially update an ingredient
async fn edit_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateIngredientRequest>,
) -> Result<Json<IngredientResponse>, ApiError> {
    let ingredient = IngredientService::update(state.db(), id, req).await?;
    Ok(Json(ingredient.into()))
}

/// DELETE /api/v1/ingredients/:id - Delete an ingredient
async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    IngredientService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
