//! Domain records for the recipes catalog
//!
//! Plain entities as the stores hand them to the API layer. They carry no
//! persistence details; storage rows and their conversions live next to
//! each repository.

use serde::{Deserialize, Serialize};

/// An ingredient in the catalog
///
/// Referenced by recipes, never owned by them: deleting a recipe leaves
/// its ingredients in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Category of the ingredient ("vegetable", "pasta", ...).
    /// Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A unit of measure ("gram", "cup")
///
/// Standalone catalog entry; nothing references it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingUnit {
    pub id: i64,
    pub name: String,
}

/// A recipe together with its ordered steps and linked ingredients
///
/// Steps are exclusively owned by the recipe and returned in cooking order.
/// Ingredients are shared references, resolved to full records on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    /// Step contents, first step first.
    pub steps: Vec<String>,
}
