//! Recipe Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::recipes::data::RecipeDraft;

/// Store-assigned recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(i64);

impl RecipeId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Raised when a path segment is not a valid recipe id.
#[derive(Debug, Error)]
#[error("invalid recipe id \"{value}\"")]
pub struct RecipeIdError {
    value: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for RecipeId {
    type Err = RecipeIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<i64>()
            .map(Self)
            .map_err(|source| RecipeIdError {
                value: value.to_string(),
                source,
            })
    }
}

/// Recipe Record
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Copy the business fields out of the record.
    #[must_use]
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            making_time: self.making_time.clone(),
            serves: self.serves.clone(),
            ingredients: self.ingredients.clone(),
            cost: self.cost,
        }
    }

    /// Overwrite every business field, keeping the id and timestamps.
    pub fn overwrite(&mut self, draft: RecipeDraft) {
        self.title = draft.title;
        self.making_time = draft.making_time;
        self.serves = draft.serves;
        self.ingredients = draft.ingredients;
        self.cost = draft.cost;
    }
}
