pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod queries;
pub mod services;
pub mod state;

pub use config::Config;
pub use database::{DbConn, DbPool};
pub use error::{Error, Result};
pub use state::AppState;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// Everything under `/api` except `/api/health` runs behind the session auth
/// middleware and answers 401 JSON when unauthenticated; the page routes
/// resolve the session themselves and redirect instead.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/books",
            get(handlers::books::list_books).post(handlers::books::create_book),
        )
        .route("/books/{id}", put(handlers::books::update_book))
        .route(
            "/schedule",
            get(handlers::schedule::list_schedule).post(handlers::schedule::create_schedule_item),
        )
        .route(
            "/schedule/{id}",
            get(handlers::schedule::get_schedule_item)
                .put(handlers::schedule::update_schedule_item)
                .delete(handlers::schedule::delete_schedule_item),
        )
        .route("/metrics", get(handlers::metrics::get_metrics))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::session_auth_middleware,
        ))
        .route("/health", get(handlers::health::health_check));

    Router::new()
        .route("/", get(handlers::auth::home))
        .route(
            "/register",
            get(handlers::auth::register_page).post(handlers::auth::register),
        )
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
