//! Route-Definitionen fuer die REST-API (/api/...)

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Erstellt den vollstaendigen /api/-Router
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health))
        // Auth
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/oauth-demo", post(handlers::auth::oauth_demo))
        .route("/api/auth/me", get(handlers::auth::me))
        // Beitraege
        .route(
            "/api/posts",
            get(handlers::posts::list_posts).post(handlers::posts::create_post),
        )
        .route(
            "/api/posts/:slug",
            get(handlers::posts::get_post)
                .put(handlers::posts::update_post)
                .delete(handlers::posts::delete_post),
        )
}
