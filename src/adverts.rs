//! Job adverts: the public board and owner-managed postings.

use axum::{routing::get, Router};

use crate::app::App;

pub mod handlers;
pub mod payload;
pub mod repository;
pub mod view;

pub use payload::{AdvertPatch, CreateAdvert, NewAdvert, UpdateAdvert};
pub use view::AdvertView;

/// Advert routes, relative to the `/api` prefix.
pub fn routes() -> Router<App> {
    Router::new()
        .route("/adverts", get(handlers::index).post(handlers::create))
        .route(
            "/adverts/{id}",
            get(handlers::show)
                .put(handlers::update)
                .delete(handlers::destroy),
        )
}
