//! Recipe Fields

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A business field of a recipe, declared in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecipeField {
    Title,
    MakingTime,
    Serves,
    Ingredients,
    Cost,
}

impl RecipeField {
    /// Every business field, in schema-declaration order.
    pub const ALL: [RecipeField; 5] = [
        RecipeField::Title,
        RecipeField::MakingTime,
        RecipeField::Serves,
        RecipeField::Ingredients,
        RecipeField::Cost,
    ];

    /// The name used for this field in JSON and form payloads.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            RecipeField::Title => "title",
            RecipeField::MakingTime => "making_time",
            RecipeField::Serves => "serves",
            RecipeField::Ingredients => "ingredients",
            RecipeField::Cost => "cost",
        }
    }

    /// Whether the field must be populated before a recipe is persisted.
    #[must_use]
    pub const fn is_required(self) -> bool {
        match self {
            RecipeField::Title
            | RecipeField::MakingTime
            | RecipeField::Serves
            | RecipeField::Ingredients
            | RecipeField::Cost => true,
        }
    }
}

impl Display for RecipeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.wire_name())
    }
}
