//! Depot lookups for handler state.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Handlers read the injected [`State`](crate::state::State) through this.
///
/// The state is injected once by the router, so a miss means the router was
/// built without it and the request fails with 500.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                state = std::any::type_name::<T>(),
                "handler state missing from depot"
            );

            StatusError::internal_server_error().brief("Internal Server Error")
        })
    }
}
