//! Recipebook Domain Concerns

pub mod recipes;
