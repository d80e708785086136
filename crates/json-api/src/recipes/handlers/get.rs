//! Get Recipe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use recipebook_app::domain::recipes::records::RecipeId;

use crate::{
    extensions::*,
    recipes::{
        errors::RecipeError,
        responses::{DETAILS_MESSAGE, RecipeDetailsResponse},
    },
    state::State,
};

/// Get Recipe Handler
///
/// Returns a single recipe, wrapped in a one-element list.
#[endpoint(tags("recipes"), summary = "Get Recipe")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RecipeDetailsResponse>, RecipeError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner().parse::<RecipeId>()?;

    let recipe = state.app.recipes.get_recipe(id).await?;

    Ok(Json(RecipeDetailsResponse {
        message: DETAILS_MESSAGE.to_string(),
        recipe: vec![recipe.into()],
    }))
}
