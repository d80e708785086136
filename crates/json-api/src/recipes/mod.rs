//! Recipes

mod errors;
mod handlers;
mod payload;
mod responses;

pub(crate) use handlers::*;
