//! Create Recipe Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use recipebook_app::domain::recipes::{data::RecipeDraft, validation::validate};

use crate::{
    extensions::*,
    recipes::{
        errors::{RecipeError, RecipeWrite},
        payload,
        responses::{CREATED_MESSAGE, RecipeCreatedResponse},
    },
    state::State,
};

/// Create Recipe Handler
///
/// Accepts a JSON or form body. All five fields are required and a cost of
/// `0` counts as missing.
#[endpoint(tags("recipes"), summary = "Create Recipe")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<RecipeCreatedResponse>, RecipeError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let draft = payload::parse(req)
        .await
        .map_err(|source| RecipeError::Undecodable {
            operation: RecipeWrite::Create,
            source,
        })?
        .apply_to(RecipeDraft::default());

    validate(&draft).map_err(|required| RecipeError::Invalid {
        operation: RecipeWrite::Create,
        required,
    })?;

    let recipe = state
        .app
        .recipes
        .create_recipe(draft)
        .await
        .map_err(RecipeError::NotCreated)?;

    info!(recipe_id = %recipe.id, "recipe created");

    Ok(Json(RecipeCreatedResponse {
        message: CREATED_MESSAGE.to_string(),
        recipe: recipe.into(),
    }))
}
