//! Update Recipe Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use recipebook_app::domain::recipes::{records::RecipeId, validation::validate};

use crate::{
    extensions::*,
    recipes::{
        errors::{RecipeError, RecipeWrite},
        payload,
        responses::{RecipeUpdatedResponse, UPDATED_MESSAGE},
    },
    state::State,
};

/// Update Recipe Handler
///
/// Fields present in the body overwrite the stored values; absent fields are
/// left as they are. The merged recipe must still pass validation.
#[endpoint(tags("recipes"), summary = "Update Recipe")]
#[tracing::instrument(
    name = "recipes.update",
    skip(id, req, depot),
    fields(
        recipe_id = tracing::field::Empty,
        changed = tracing::field::Empty
    )
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<RecipeUpdatedResponse>, RecipeError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner().parse::<RecipeId>()?;

    let span = tracing::Span::current();

    span.record("recipe_id", tracing::field::display(id));

    let mut recipe = state.app.recipes.get_recipe(id).await?;

    let patch = payload::parse(req)
        .await
        .map_err(|source| RecipeError::Undecodable {
            operation: RecipeWrite::Update,
            source,
        })?;

    span.record("changed", !patch.is_empty());

    let draft = patch.apply_to(recipe.to_draft());

    validate(&draft).map_err(|required| RecipeError::Invalid {
        operation: RecipeWrite::Update,
        required,
    })?;

    recipe.overwrite(draft);

    let recipe = state.app.recipes.update_recipe(recipe).await?;

    tracing::info!(recipe_id = %recipe.id, "updated recipe");

    Ok(Json(RecipeUpdatedResponse {
        message: UPDATED_MESSAGE.to_string(),
        recipe: vec![recipe.into()],
    }))
}
