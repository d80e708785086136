//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{healthcheck, observability, recipes, state::State};

pub(crate) fn recipes_router() -> Router {
    Router::with_path("recipes")
        .get(recipes::index::handler)
        .post(recipes::create::handler)
        .push(
            Router::with_path("{id}")
                .get(recipes::get::handler)
                .patch(recipes::update::handler)
                .delete(recipes::delete::handler),
        )
}

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(recipes_router())
}
