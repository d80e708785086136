//! Recipe Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use recipebook_app::domain::recipes::records::Recipe;

pub(crate) const DETAILS_MESSAGE: &str = "Recipe details by id";
pub(crate) const CREATED_MESSAGE: &str = "Recipe successfully created!";
pub(crate) const UPDATED_MESSAGE: &str = "Recipe successfully updated!";
pub(crate) const REMOVED_MESSAGE: &str = "Recipe successfully removed!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Recipe title
    pub title: String,

    /// How long the recipe takes to make
    pub making_time: String,

    /// How many people it serves
    pub serves: String,

    /// Comma separated ingredients
    pub ingredients: String,

    /// Cost of the ingredients
    pub cost: i64,

    /// The date and time the recipe was created
    pub created_at: String,

    /// The date and time the recipe was last updated
    pub updated_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id.into_inner(),
            title: recipe.title,
            making_time: recipe.making_time,
            serves: recipe.serves,
            ingredients: recipe.ingredients,
            cost: recipe.cost,
            created_at: recipe.created_at.to_string(),
            updated_at: recipe.updated_at.to_string(),
        }
    }
}

/// Recipes List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipesResponse {
    pub recipes: Vec<RecipeResponse>,
}

/// Recipe Details Response
///
/// The recipe is wrapped in a single-element list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeDetailsResponse {
    pub message: String,
    pub recipe: Vec<RecipeResponse>,
}

/// Recipe Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeCreatedResponse {
    pub message: String,
    pub recipe: RecipeResponse,
}

/// Recipe Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipeUpdatedResponse {
    pub message: String,
    pub recipe: Vec<RecipeResponse>,
}

/// Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub message: String,
}

/// Validation Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    pub message: String,

    /// Names of the missing fields, comma separated
    pub required: String,
}

/// Store Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoreErrorResponse {
    pub message: String,
    pub error: String,
}
