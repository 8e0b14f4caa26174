//! Business logic services
//!
//! Thin layer between the HTTP handlers and the stores: boundary
//! validation and partial-update merging. Everything touching more than
//! one table stays in the repositories.

pub mod cooking_unit;
pub mod ingredient;
pub mod recipe;

pub use cooking_unit::CookingUnitService;
pub use ingredient::IngredientService;
pub use recipe::RecipeService;
