use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sleep/:value", post(handlers::sleep_form))
        .route("/ritual/:value", post(handlers::ritual_form))
        .route("/api/selection", get(handlers::get_selection))
        .route("/api/date", post(handlers::set_date))
        .route("/api/sleep", post(handlers::toggle_sleep))
        .route("/api/ritual", post(handlers::toggle_ritual))
        .route("/api/emoji/add", post(handlers::add_emoji))
        .route("/api/emoji/remove", post(handlers::remove_emoji))
        .route("/api/message", get(handlers::get_message))
        .with_state(state)
}
