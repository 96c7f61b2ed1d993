//! Demo application routing.
//!
//! Mounts the example API under `/api/v1` and the documentation UI under
//! its configured base path.

pub mod v1;

use docs_ui::DocsEndpoint;
use poem::Route;
use poem_openapi::{OpenApi, OpenApiService};

pub(super) fn route<T: OpenApi + 'static>(service: OpenApiService<T, ()>, docs: DocsEndpoint) -> Route {
    docs.register(Route::new().nest("/api/v1", service))
}
