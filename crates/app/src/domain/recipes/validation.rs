//! Recipe validation.
//!
//! Every field marked required must be populated before a recipe is
//! persisted. Strings fail when empty; the cost fails when it is zero, so a
//! legitimate zero cost cannot be told apart from a missing one.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

use crate::domain::recipes::{data::RecipeDraft, fields::RecipeField};

/// The required fields a draft failed to populate, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: SmallVec<[RecipeField; 5]>,
}

impl ValidationErrors {
    /// Failed fields, in schema-declaration order.
    #[must_use]
    pub fn fields(&self) -> &[RecipeField] {
        &self.fields
    }

    /// Failed fields' wire names joined with `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.to_string()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            f.write_str(field.wire_name())?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check every required field of `draft`.
///
/// # Errors
///
/// Returns the failed fields when any required field is missing.
pub fn validate(draft: &RecipeDraft) -> Result<(), ValidationErrors> {
    let fields: SmallVec<[RecipeField; 5]> = RecipeField::ALL
        .into_iter()
        .filter(|field| field.is_required() && is_missing(draft, *field))
        .collect();

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { fields })
    }
}

fn is_missing(draft: &RecipeDraft, field: RecipeField) -> bool {
    match field {
        RecipeField::Title => draft.title.is_empty(),
        RecipeField::MakingTime => draft.making_time.is_empty(),
        RecipeField::Serves => draft.serves.is_empty(),
        RecipeField::Ingredients => draft.ingredients.is_empty(),
        RecipeField::Cost => draft.cost == 0,
    }
}
