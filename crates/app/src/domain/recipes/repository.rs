//! Recipes Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};
use tracing::debug;

use crate::domain::recipes::{
    data::RecipeDraft,
    errors::RecipesRepositoryError,
    records::{Recipe, RecipeId},
};

const LIST_RECIPES_SQL: &str = include_str!("sql/list_recipes.sql");
const GET_RECIPE_SQL: &str = include_str!("sql/get_recipe.sql");
const CREATE_RECIPE_SQL: &str = include_str!("sql/create_recipe.sql");
const UPDATE_RECIPE_SQL: &str = include_str!("sql/update_recipe.sql");
const DELETE_RECIPE_SQL: &str = include_str!("sql/delete_recipe.sql");

#[derive(Debug, Clone)]
pub struct PgRecipesRepository {
    pool: PgPool,
}

impl PgRecipesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Recipe {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RecipeId::new(row.try_get("id")?),
            title: row.try_get("title")?,
            making_time: row.try_get("making_time")?,
            serves: row.try_get("serves")?,
            ingredients: row.try_get("ingredients")?,
            cost: row.try_get("cost")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl RecipesRepository for PgRecipesRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipesRepositoryError> {
        query_as::<Postgres, Recipe>(LIST_RECIPES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, RecipesRepositoryError> {
        query_as::<Postgres, Recipe>(GET_RECIPE_SQL)
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, RecipesRepositoryError> {
        let created = query_as::<Postgres, Recipe>(CREATE_RECIPE_SQL)
            .bind(draft.title)
            .bind(draft.making_time)
            .bind(draft.serves)
            .bind(draft.ingredients)
            .bind(draft.cost)
            .fetch_one(&self.pool)
            .await?;

        debug!(recipe_id = %created.id, "inserted recipe row");

        Ok(created)
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipesRepositoryError> {
        query_as::<Postgres, Recipe>(UPDATE_RECIPE_SQL)
            .bind(recipe.id.into_inner())
            .bind(recipe.title)
            .bind(recipe.making_time)
            .bind(recipe.serves)
            .bind(recipe.ingredients)
            .bind(recipe.cost)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_recipe(&self, recipe: Recipe) -> Result<(), RecipesRepositoryError> {
        let rows_affected = query(DELETE_RECIPE_SQL)
            .bind(recipe.id.into_inner())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(RecipesRepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Storage boundary for recipes.
#[automock]
#[async_trait]
pub trait RecipesRepository: Send + Sync {
    /// Retrieves every recipe, ordered by id.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipesRepositoryError>;

    /// Retrieves a single recipe.
    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, RecipesRepositoryError>;

    /// Inserts a recipe and returns it with its assigned id.
    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, RecipesRepositoryError>;

    /// Saves every business field of a previously fetched recipe.
    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, RecipesRepositoryError>;

    /// Hard-deletes a previously fetched recipe.
    async fn delete_recipe(&self, recipe: Recipe) -> Result<(), RecipesRepositoryError>;
}
