//! API routes configuration module

use crate::api::handlers::{
    create_drink, delete_drink, delete_question, get_categories, get_drink_details, get_drinks,
    get_questions, get_questions_by_category, play_quiz, post_questions, update_drink,
};
use crate::auth::AuthGate;
use crate::db::Database;
use axum::{
    routing::{delete, get, patch, post},
    Extension, Router,
};

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
/// * `gate` - Auth gate consulted by the permission-protected handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(database: Database, gate: AuthGate) -> Router {
    Router::new()
        .route("/drinks", get(get_drinks).post(create_drink))
        .route("/drinks-detail", get(get_drink_details))
        .route("/drinks/:id", patch(update_drink).delete(delete_drink))
        .route("/categories", get(get_categories))
        .route("/categories/:id/questions", get(get_questions_by_category))
        .route("/questions", get(get_questions).post(post_questions))
        .route("/questions/:id", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .layer(Extension(database))
        .layer(Extension(gate))
}
