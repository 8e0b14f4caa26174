//! Recipes Catalog Shared Library
//!
//! This crate contains the domain records and API types shared between the
//! backend and any future clients.

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::{CookingUnit, Ingredient, Recipe};
pub use types::*;
