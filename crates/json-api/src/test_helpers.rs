//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use recipebook_app::{
    context::AppContext,
    domain::recipes::{
        MockRecipesRepository,
        records::{Recipe, RecipeId},
    },
};

use crate::state::State;

pub(crate) fn make_recipe(id: i64) -> Recipe {
    Recipe {
        id: RecipeId::new(id),
        title: format!("Recipe {id}"),
        making_time: "10 min".to_string(),
        serves: "2".to_string(),
        ingredients: "x,y".to_string(),
        cost: 5,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_recipes(recipes: MockRecipesRepository) -> Arc<State> {
    State::from_app_context(AppContext {
        recipes: Arc::new(recipes),
    })
}

pub(crate) fn recipes_service(recipes: MockRecipesRepository, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_recipes(recipes)))
            .push(route),
    )
}
