//! Recipes

pub mod data;
pub mod errors;
pub mod fields;
pub mod records;
mod repository;
pub mod validation;

pub use errors::RecipesRepositoryError;
pub use repository::*;
