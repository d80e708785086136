//! List Recipes Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    recipes::{errors::RecipeError, responses::RecipesResponse},
    state::State,
};

/// List Recipes Handler
///
/// Returns every recipe, ordered by id.
#[endpoint(tags("recipes"), summary = "List Recipes")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<RecipesResponse>, RecipeError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let recipes = state.app.recipes.list_recipes().await?;

    Ok(Json(RecipesResponse {
        recipes: recipes.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use recipebook_app::domain::recipes::{MockRecipesRepository, RecipesRepositoryError};

    use crate::test_helpers::{make_recipe, recipes_service};

    use super::*;

    fn make_service(repo: MockRecipesRepository) -> Service {
        recipes_service(repo, Router::with_path("recipes").get(handler))
    }

    #[tokio::test]
    async fn test_list_recipes_success() -> TestResult {
        let mut repo = MockRecipesRepository::new();

        repo.expect_list_recipes()
            .once()
            .return_once(|| Ok(vec![make_recipe(1), make_recipe(2)]));

        repo.expect_get_recipe().never();
        repo.expect_create_recipe().never();
        repo.expect_update_recipe().never();
        repo.expect_delete_recipe().never();

        let mut res = TestClient::get("http://example.com/recipes")
            .send(&make_service(repo))
            .await;

        let body: RecipesResponse = res.take_json().await?;
        let ids: Vec<i64> = body.recipes.iter().map(|recipe| recipe.id).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_recipes_empty() -> TestResult {
        let mut repo = MockRecipesRepository::new();

        repo.expect_list_recipes()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/recipes")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, serde_json::json!({ "recipes": [] }));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_recipes_store_failure_returns_422() -> TestResult {
        let mut repo = MockRecipesRepository::new();

        repo.expect_list_recipes()
            .once()
            .return_once(|| Err(RecipesRepositoryError::InvalidData));

        let mut res = TestClient::get("http://example.com/recipes")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            body["message"],
            RecipesRepositoryError::InvalidData.to_string()
        );

        Ok(())
    }
}
