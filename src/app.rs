use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/days/:day", get(handlers::get_day))
        .route("/api/days/:day/select", post(handlers::select_day))
        .route("/api/days/:day/sets", post(handlers::toggle_set))
        .route("/api/days/:day/notes", post(handlers::set_note))
        .route("/api/days/:day/exercises", post(handlers::add_exercise))
        .route("/api/days/:day/exercises/:index", delete(handlers::remove_exercise))
        .route("/api/edit-mode", post(handlers::edit_mode))
        .route("/api/reset", post(handlers::reset_tracking))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/modal/open", post(handlers::open_modal))
        .route("/api/modal/focus", post(handlers::move_modal_focus))
        .route("/api/modal/close", post(handlers::close_modal))
        .route("/api/timers", get(handlers::get_timers))
        .route("/api/stopwatch/toggle", post(handlers::toggle_stopwatch))
        .route("/api/stopwatch/reset", post(handlers::reset_stopwatch))
        .route("/api/rest/start", post(handlers::start_rest))
        .route("/api/rest/stop", post(handlers::stop_rest))
        .route("/api/rest/reset", post(handlers::reset_rest))
        .with_state(state)
}
