//! Recipe aggregate repository
//!
//! Persists a recipe together with its ordered steps and its ingredient
//! links as one consistency unit, hiding the multi-table layout behind the
//! `Recipe` entity. Every operation that touches more than one row runs
//! inside a single transaction; a dropped transaction rolls back, so a
//! partially written aggregate is never observable.

use super::ingredient::IngredientRow;
use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use recipes_catalog_shared::models::{Ingredient, Recipe};
use sqlx::{SqliteConnection, SqlitePool};

/// Recipe row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)]
    pub updated_at: DateTime<Utc>,
}

impl RecipeRow {
    /// Storage row -> domain entity, with the eager-loaded children
    pub(crate) fn into_recipe(self, steps: Vec<String>, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            description: self.description,
            ingredients,
            steps,
        }
    }
}

/// Recipe step row from the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct RecipeStepRow {
    pub id: i64,
    #[allow(dead_code)]
    pub recipe_id: i64,
    pub content: String,
    pub position: i64,
}

/// Input for creating a new recipe aggregate
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub description: Option<String>,
    /// Ids of existing ingredients to link; the rows are referenced,
    /// never created here.
    pub ingredient_ids: Vec<i64>,
    /// Step contents in cooking order; position is assigned from the
    /// 1-based index.
    pub steps: Vec<String>,
}

/// Full replacement state for an existing recipe
#[derive(Debug, Clone)]
pub struct UpdateRecipe {
    pub name: String,
    pub description: Option<String>,
    pub ingredient_ids: Vec<i64>,
    pub steps: Vec<String>,
}

/// Equality filter; a `None` id matches every row
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub id: Option<i64>,
}

/// Reconciliation plan for a recipe's step rows
///
/// Computed from the persisted rows (ordered 1..M) and the desired content
/// sequence (length N), then applied inside the surrounding transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StepPlan {
    /// `(row id, new content)` for each retained row, in position order.
    /// Row id and position are preserved; only the content is overwritten.
    updates: Vec<(i64, String)>,
    /// When shrinking, delete rows with a position above this threshold.
    truncate_after: Option<i64>,
    /// `(position, content)` for rows appended when growing.
    inserts: Vec<(i64, String)>,
}

/// Compute the step reconciliation plan.
///
/// The first min(M, N) rows keep their identity and position and have
/// their content overwritten; surplus rows are bulk-deleted by position
/// threshold; missing positions are appended. This deliberately trades
/// step-identity stability for simplicity: inserting in the middle of the
/// list shifts *content* across the retained row identities, not the rows
/// themselves.
fn plan_step_reconciliation(current: &[RecipeStepRow], desired: &[String]) -> StepPlan {
    let retained = current.len().min(desired.len());

    let updates = current[..retained]
        .iter()
        .zip(desired)
        .map(|(row, content)| (row.id, content.clone()))
        .collect();

    let truncate_after = if current.len() > desired.len() {
        Some(desired.len() as i64)
    } else {
        None
    };

    let inserts = desired
        .iter()
        .enumerate()
        .skip(current.len())
        .map(|(i, content)| ((i + 1) as i64, content.clone()))
        .collect();

    StepPlan {
        updates,
        truncate_after,
        inserts,
    }
}

/// Recipe repository
pub struct RecipeRepository;

impl RecipeRepository {
    /// Load the full aggregate: base row, steps ascending by position,
    /// ingredients resolved to full records.
    ///
    /// Fails with `NotFound` when the base row is absent; never returns an
    /// empty or partial recipe.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> RepoResult<Recipe> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM recipes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)?;

        let mut conn = db.acquire().await?;
        let steps = load_steps(&mut conn, id).await?;
        let ingredients = load_ingredients(&mut conn, id).await?;

        Ok(row.into_recipe(steps, ingredients))
    }

    /// List recipes matching the filter, each eager-loaded like
    /// `find_by_id`. A filter with `id: None` matches every row.
    pub async fn find_by_filter(db: &SqlitePool, filter: &RecipeFilter) -> RepoResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM recipes
            WHERE (?1 IS NULL OR id = ?1)
            ORDER BY id ASC
            "#,
        )
        .bind(filter.id)
        .fetch_all(db)
        .await?;

        let mut conn = db.acquire().await?;
        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            let steps = load_steps(&mut conn, row.id).await?;
            let ingredients = load_ingredients(&mut conn, row.id).await?;
            recipes.push(row.into_recipe(steps, ingredients));
        }

        Ok(recipes)
    }

    /// Count recipes matching the filter
    pub async fn count_by_filter(db: &SqlitePool, filter: &RecipeFilter) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM recipes
            WHERE (?1 IS NULL OR id = ?1)
            "#,
        )
        .bind(filter.id)
        .fetch_one(db)
        .await?;

        Ok(count)
    }

    /// Persist the full aggregate atomically: recipe row, then steps
    /// (position = 1-based input index), then ingredient links.
    pub async fn create(db: &SqlitePool, input: NewRecipe) -> RepoResult<Recipe> {
        let now = Utc::now();
        let mut tx = db.begin().await?;

        let recipe_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO recipes (name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        for (i, content) in input.steps.iter().enumerate() {
            sqlx::query(
                "INSERT INTO recipe_steps (recipe_id, content, position) VALUES (?, ?, ?)",
            )
            .bind(recipe_id)
            .bind(content)
            .bind((i + 1) as i64)
            .execute(&mut *tx)
            .await?;
        }

        insert_ingredient_links(&mut tx, recipe_id, &input.ingredient_ids).await?;

        tx.commit().await?;

        Self::find_by_id(db, recipe_id).await
    }

    /// Replace name/description, reconcile the step collection, and replace
    /// the ingredient link set - all inside one transaction.
    ///
    /// Fails with `NotFound` (and writes nothing) when the recipe row does
    /// not exist.
    pub async fn update(db: &SqlitePool, id: i64, input: UpdateRecipe) -> RepoResult<Recipe> {
        let mut tx = db.begin().await?;

        let updated = sqlx::query(
            "UPDATE recipes SET name = ?, description = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(RepoError::NotFound);
        }

        let current = sqlx::query_as::<_, RecipeStepRow>(
            r#"
            SELECT id, recipe_id, content, position
            FROM recipe_steps
            WHERE recipe_id = ?
            ORDER BY position ASC
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let plan = plan_step_reconciliation(&current, &input.steps);

        if let Some(threshold) = plan.truncate_after {
            sqlx::query("DELETE FROM recipe_steps WHERE recipe_id = ? AND position > ?")
                .bind(id)
                .bind(threshold)
                .execute(&mut *tx)
                .await?;
        }

        for (step_id, content) in &plan.updates {
            sqlx::query("UPDATE recipe_steps SET content = ? WHERE id = ?")
                .bind(content)
                .bind(step_id)
                .execute(&mut *tx)
                .await?;
        }

        for (position, content) in &plan.inserts {
            sqlx::query(
                "INSERT INTO recipe_steps (recipe_id, content, position) VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(content)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }

        // Replace the link set wholesale; ingredients themselves are
        // untouched.
        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_ingredient_links(&mut tx, id, &input.ingredient_ids).await?;

        tx.commit().await?;

        Self::find_by_id(db, id).await
    }

    /// Delete the aggregate: steps, links, then the recipe row.
    ///
    /// Referenced ingredients are shared, not owned, and are left intact.
    pub async fn delete(db: &SqlitePool, id: i64) -> RepoResult<()> {
        let mut tx = db.begin().await?;

        sqlx::query("DELETE FROM recipe_steps WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Steps ascending by position, regardless of storage order
async fn load_steps(conn: &mut SqliteConnection, recipe_id: i64) -> RepoResult<Vec<String>> {
    let rows = sqlx::query_as::<_, RecipeStepRow>(
        r#"
        SELECT id, recipe_id, content, position
        FROM recipe_steps
        WHERE recipe_id = ?
        ORDER BY position ASC
        "#,
    )
    .bind(recipe_id)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(|row| row.content).collect())
}

/// Linked ingredients, resolved through the ingredient store's row format
async fn load_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
) -> RepoResult<Vec<Ingredient>> {
    let rows = sqlx::query_as::<_, IngredientRow>(
        r#"
        SELECT i.id, i.name, i.type, i.created_at, i.updated_at
        FROM ingredients i
        JOIN recipe_ingredients ri ON ri.ingredient_id = i.id
        WHERE ri.recipe_id = ?
        ORDER BY i.id ASC
        "#,
    )
    .bind(recipe_id)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(IngredientRow::into_entity).collect())
}

async fn insert_ingredient_links(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    recipe_id: i64,
    ingredient_ids: &[i64],
) -> RepoResult<()> {
    for ingredient_id in ingredient_ids {
        sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES (?, ?)")
            .bind(recipe_id)
            .bind(ingredient_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
