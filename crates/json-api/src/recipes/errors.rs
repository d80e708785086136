//! Recipe Errors

use salvo::{
    Scribe,
    http::StatusError,
    oapi::{self, Components, Content, EndpointOutRegister, ToSchema},
    prelude::*,
};
use thiserror::Error;
use tracing::{error, warn};

use recipebook_app::domain::recipes::{
    RecipesRepositoryError, records::RecipeIdError, validation::ValidationErrors,
};

use crate::recipes::{
    payload::PayloadError,
    responses::{ErrorResponse, StoreErrorResponse, ValidationErrorResponse},
};

/// The write a failed request was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecipeWrite {
    Create,
    Update,
}

impl RecipeWrite {
    pub(crate) const fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Recipe creation failed!",
            Self::Update => "Recipe update failed!",
        }
    }
}

/// Every way a recipe request can fail.
///
/// All variants except `Internal` render as a JSON body with status 422.
#[derive(Debug, Error)]
pub(crate) enum RecipeError {
    #[error(transparent)]
    InvalidId(#[from] RecipeIdError),

    #[error(transparent)]
    Store(#[from] RecipesRepositoryError),

    #[error("{}", .operation.failure_message())]
    Undecodable {
        operation: RecipeWrite,
        #[source]
        source: PayloadError,
    },

    #[error("{}", .operation.failure_message())]
    Invalid {
        operation: RecipeWrite,
        required: ValidationErrors,
    },

    #[error("Recipe creation failed!")]
    NotCreated(#[source] RecipesRepositoryError),

    #[error(transparent)]
    Internal(StatusError),
}

impl From<StatusError> for RecipeError {
    fn from(error: StatusError) -> Self {
        Self::Internal(error)
    }
}

impl RecipeError {
    fn log(&self) {
        match self {
            Self::Store(RecipesRepositoryError::Sql(source))
            | Self::NotCreated(RecipesRepositoryError::Sql(source)) => {
                error!("recipe store failure: {source}");
            }
            Self::Internal(status) => error!("internal error: {}", status.brief),
            Self::Undecodable { source, .. } => warn!("could not decode recipe payload: {source}"),
            other => warn!("recipe request failed: {other}"),
        }
    }
}

impl Scribe for RecipeError {
    fn render(self, res: &mut Response) {
        self.log();

        match self {
            Self::Internal(status) => {
                let message = status.brief;

                res.status_code(status.code);
                res.render(Json(ErrorResponse { message }));
            }
            Self::Invalid {
                operation,
                required,
            } => {
                res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
                res.render(Json(ValidationErrorResponse {
                    message: operation.failure_message().to_string(),
                    required: required.joined(),
                }));
            }
            Self::NotCreated(source) => {
                res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
                res.render(Json(StoreErrorResponse {
                    message: RecipeWrite::Create.failure_message().to_string(),
                    error: source.to_string(),
                }));
            }
            Self::Undecodable {
                source: source @ PayloadError::InvalidCost(_),
                ..
            } => {
                res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
                res.render(Json(ErrorResponse {
                    message: source.to_string(),
                }));
            }
            other => {
                res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
                res.render(Json(ErrorResponse {
                    message: other.to_string(),
                }));
            }
        }
    }
}

impl EndpointOutRegister for RecipeError {
    fn register(components: &mut Components, operation: &mut oapi::Operation) {
        operation.responses.insert(
            "422",
            oapi::Response::new("Recipe request failed").add_content(
                "application/json",
                Content::new(ErrorResponse::to_schema(components)),
            ),
        );

        operation.responses.insert(
            "500",
            oapi::Response::new("Internal Server Error"),
        );
    }
}
