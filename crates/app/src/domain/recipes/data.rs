//! Recipe Data

/// The business fields of a recipe, without store-assigned values.
///
/// A default draft holds zero values: empty strings and a cost of `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub making_time: String,
    pub serves: String,
    pub ingredients: String,
    pub cost: i64,
}

/// Incoming field values for a create or update.
///
/// `None` marks a field absent from the payload; applying the patch leaves
/// such fields at their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub making_time: Option<String>,
    pub serves: Option<String>,
    pub ingredients: Option<String>,
    pub cost: Option<i64>,
}

impl RecipePatch {
    /// Overlay every present field onto `draft`.
    #[must_use]
    pub fn apply_to(self, mut draft: RecipeDraft) -> RecipeDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }

        if let Some(making_time) = self.making_time {
            draft.making_time = making_time;
        }

        if let Some(serves) = self.serves {
            draft.serves = serves;
        }

        if let Some(ingredients) = self.ingredients {
            draft.ingredients = ingredients;
        }

        if let Some(cost) = self.cost {
            draft.cost = cost;
        }

        draft
    }

    /// True when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
