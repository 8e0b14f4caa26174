//! API request and response types

use crate::models::{CookingUnit, Ingredient, Recipe};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Count response for the `/count` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

// ============================================================================
// Ingredient types
// ============================================================================

/// Create a new ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Partial update of an ingredient; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIngredientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Equality filter for ingredient listing; absent fields match all rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Ingredient view returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            kind: ingredient.kind,
        }
    }
}

// ============================================================================
// Cooking unit types
// ============================================================================

/// Create a new cooking unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCookingUnitRequest {
    pub name: String,
}

/// Partial update of a cooking unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCookingUnitRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Equality filter for cooking unit listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookingUnitQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Cooking unit view returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingUnitResponse {
    pub id: i64,
    pub name: String,
}

impl From<CookingUnit> for CookingUnitResponse {
    fn from(unit: CookingUnit) -> Self {
        Self {
            id: unit.id,
            name: unit.name,
        }
    }
}

// ============================================================================
// Recipe types
// ============================================================================

/// Reference to an existing ingredient by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: i64,
}

/// Create a new recipe with its steps and ingredient links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ingredients must already exist; they are linked, not created.
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
    /// Step contents in cooking order.
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Partial update of a recipe; absent fields keep their stored value
///
/// A present `steps` list replaces the whole step sequence; a present
/// `ingredients` list replaces the whole link set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientRef>>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

/// Equality filter for recipe listing
///
/// An absent `id` matches every row, so `GET /recipes` with no query
/// parameters lists the full catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Recipe view returned by the API: steps in order, ingredients resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<IngredientResponse>,
    pub steps: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(IngredientResponse::from)
                .collect(),
            steps: recipe.steps,
        }
    }
}
