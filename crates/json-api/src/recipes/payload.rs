//! Recipe request bodies.
//!
//! JSON bodies and HTML form bodies both decode into a [`RecipePatch`]. A JSON
//! key that is missing is absent; a form field left blank is absent.

use std::num::ParseIntError;

use salvo::{
    http::{ParseError, header::CONTENT_TYPE},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use recipebook_app::domain::recipes::{data::RecipePatch, fields::RecipeField};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPES: [&str; 2] = ["application/x-www-form-urlencoded", "multipart/form-data"];

/// Raised when a request body cannot be decoded into recipe fields.
#[derive(Debug, Error)]
pub(crate) enum PayloadError {
    #[error("could not read request body: {0}")]
    Body(#[source] ParseError),

    #[error("could not decode JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported content type \"{0}\"")]
    UnsupportedContentType(String),

    #[error("Cost must be an integer.")]
    InvalidCost(#[source] ParseIntError),
}

/// Recipe Request
///
/// Every field is optional; omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecipePayload {
    pub title: Option<String>,
    pub making_time: Option<String>,
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    pub cost: Option<i64>,
}

impl From<RecipePayload> for RecipePatch {
    fn from(payload: RecipePayload) -> Self {
        RecipePatch {
            title: payload.title,
            making_time: payload.making_time,
            serves: payload.serves,
            ingredients: payload.ingredients,
            cost: payload.cost,
        }
    }
}

/// Decode the request body into a patch, choosing the decoder by content type.
pub(crate) async fn parse(req: &mut Request) -> Result<RecipePatch, PayloadError> {
    let content_type = req.header::<String>(CONTENT_TYPE).unwrap_or_default();
    let media_type = media_type(&content_type);

    if FORM_CONTENT_TYPES.contains(&media_type.as_str()) {
        let form = req.form_data().await.map_err(PayloadError::Body)?;

        return patch_from_form(|field| form.fields.get(field.wire_name()).map(String::as_str));
    }

    // A missing content type is read as JSON.
    if !media_type.is_empty() && media_type != JSON_CONTENT_TYPE {
        return Err(PayloadError::UnsupportedContentType(content_type));
    }

    let body = req.payload().await.map_err(PayloadError::Body)?;

    Ok(serde_json::from_slice::<RecipePayload>(body)?.into())
}

fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn patch_from_form<'a, F>(value_of: F) -> Result<RecipePatch, PayloadError>
where
    F: Fn(RecipeField) -> Option<&'a str>,
{
    let present = |field| value_of(field).filter(|value| !value.is_empty());
    let text = |field| present(field).map(str::to_string);

    let cost = present(RecipeField::Cost)
        .map(|value| value.trim().parse::<i64>())
        .transpose()
        .map_err(PayloadError::InvalidCost)?;

    Ok(RecipePatch {
        title: text(RecipeField::Title),
        making_time: text(RecipeField::MakingTime),
        serves: text(RecipeField::Serves),
        ingredients: text(RecipeField::Ingredients),
        cost,
    })
}
