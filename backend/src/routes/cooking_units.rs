//! Cooking unit API routes

use crate::error::ApiError;
use crate::services::CookingUnitService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    routing::post,
    Json, Router,
};
use recipes_catalog_shared::types::{
    CookingUnitQuery, CookingUnitResponse, CountResponse, CreateCookingUnitRequest,
    UpdateCookingUnitRequest,
};

/// Create cooking unit routes
pub fn cooking_unit_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cooking_unit).get(list_cooking_units))
        .route("/count", get(count_cooking_units))
        .route(
            "/:id",
            get(get_cooking_unit)
                .patch(edit_cooking_unit)
                .delete(delete_cooking_unit),
        )
}

/// POST /api/v1/cooking-units - Create a cooking unit
async fn create_cooking_unit(
    State(state): State<AppState>,
    Json(req): Json<CreateCookingUnitRequest>,
) -> Result<(StatusCode, Json<CookingUnitResponse>), ApiError> {
    let unit = CookingUnitService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(unit.into())))
}

/// GET /api/v1/cooking-units/:id - Fetch a cooking unit by id
async fn get_cooking_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CookingUnitResponse>, ApiError> {
    let unit = CookingUnitService::get(state.db(), id).await?;
    Ok(Json(unit.into()))
}

/// GET /api/v1/cooking-units - List cooking units matching the query filter
async fn list_cooking_units(
    State(state): State<AppState>,
    Query(query): Query<CookingUnitQuery>,
) -> Result<Json<Vec<CookingUnitResponse>>, ApiError> {
    let units = CookingUnitService::list(state.db(), query).await?;
    Ok(Json(
        units.into_iter().map(CookingUnitResponse::from).collect(),
    ))
}

/// GET /api/v1/cooking-units/count - Count cooking units matching the filter
async fn count_cooking_units(
    State(state): State<AppState>,
    Query(query): Query<CookingUnitQuery>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = CookingUnitService::count(state.db(), query).await?;
    Ok(Json(CountResponse { count }))
}

/// PATCH /api/v1/cooking-units/:id - Partially update a cooking unit
async fn edit_cooking_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCookingUnitRequest>,
) -> Result<Json<CookingUnitResponse>, ApiError> {
    let unit = CookingUnitService::update(state.db(), id, req).await?;
    Ok(Json(unit.into()))
}

/// DELETE /api/v1/cooking-units/:id - Delete a cooking unit
async fn delete_cooking_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    CookingUnitService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
