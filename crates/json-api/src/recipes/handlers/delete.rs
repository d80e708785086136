//! Delete Recipe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use recipebook_app::domain::recipes::records::RecipeId;

use crate::{
    extensions::*,
    recipes::{
        errors::RecipeError,
        responses::{MessageResponse, REMOVED_MESSAGE},
    },
    state::State,
};

/// Delete Recipe Handler
///
/// Permanently removes a recipe.
#[endpoint(tags("recipes"), summary = "Delete Recipe")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, RecipeError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner().parse::<RecipeId>()?;

    let recipe = state.app.recipes.get_recipe(id).await?;

    state.app.recipes.delete_recipe(recipe).await?;

    info!(recipe_id = %id, "recipe removed");

    Ok(Json(MessageResponse {
        message: REMOVED_MESSAGE.to_string(),
    }))
}
