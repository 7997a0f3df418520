// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{questions, quiz, secret_key},
    state::AppState,
    utils::auth::admin_auth,
};

/// Assembles the main application router.
///
/// * Public API: question reads, stats, result recording, key retrieval.
/// * Admin API: question mutations, stats clearing, key rotation and the
///   admin page, all behind the Basic-auth middleware. Question reads
///   stay public; everything that mutates quiz content is gated.
/// * Static fallback: the `public/` directory is served as-is, so the
///   admin page shell is also reachable at `/admin.html` without a
///   credential. The shell holds no secrets and every admin API call it
///   would make is still gated; only the `/admin` route challenges.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let public_routes = Router::new()
        .route("/api/questions", get(questions::list_questions))
        .route("/api/questions/{id}", get(questions::get_question))
        .route("/api/quiz-stats", get(quiz::get_quiz_stats))
        .route("/api/store-result", post(quiz::store_result))
        .route("/api/secret-key", post(secret_key::get_secret_key))
        .route_service("/", ServeFile::new("public/index.html"));

    let admin_routes = Router::new()
        .route("/api/questions", post(questions::create_question))
        .route(
            "/api/questions/{id}",
            put(questions::update_question).delete(questions::delete_question),
        )
        .route("/api/admin/clear-quiz-stats", delete(quiz::clear_quiz_stats))
        .route("/api/update-secret-key", post(secret_key::update_secret_key))
        .route_service("/admin", ServeFile::new("public/admin.html"))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback_service(ServeDir::new("public"))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
