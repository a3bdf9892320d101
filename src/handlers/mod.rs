pub mod delete;
pub mod download;
pub mod health;
pub mod list;
pub mod upload;

use axum::response::{IntoResponse, Redirect, Response};

/// `303 See Other` back to the listing, with the header that tells the
/// htmx front end to re-render the whole page.
pub(crate) fn refresh_redirect() -> Response {
    ([("HX-Refresh", "true")], Redirect::to("/")).into_response()
}
