//! Database repositories
//!
//! The stores behind the API: each hides its table layout behind the
//! domain records from the shared crate. Storage rows and the pure
//! row/entity conversions live next to the repository that owns them.

use thiserror::Error;

pub mod cooking_unit;
pub mod ingredient;
pub mod recipe;

pub use cooking_unit::{CookingUnitFilter, CookingUnitRepository, NewCookingUnit};
pub use ingredient::{IngredientFilter, IngredientRepository, NewIngredient};
pub use recipe::{NewRecipe, RecipeFilter, RecipeRepository, UpdateRecipe};

/// Store-level error taxonomy
///
/// `NotFound` is raised only when the requested row is absent; every other
/// storage failure passes through unchanged. Failures are treated as
/// non-transient (embedded single-node store), so nothing here retries.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("entity not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result type alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
