use crate::day::DayKey;
use crate::errors::AppError;
use crate::models::{
    AddExerciseRequest, CloseModalResponse, DayView, EditModeRequest, EditModeResponse,
    FocusRequest, FocusResponse, NoteRequest, OpenModalRequest, RemoveExerciseQuery, SessionView,
    TimersView, ToggleSetRequest, ToggleSetResponse, WeekSummary,
};
use crate::session::TimerKind;
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session.view()).into_string())
}

pub async fn get_state(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view())
}

pub async fn get_day(State(state): State<AppState>, Path(day): Path<DayKey>) -> Json<DayView> {
    let session = state.session.lock().await;
    Json(session.day_view(day))
}

pub async fn select_day(State(state): State<AppState>, Path(day): Path<DayKey>) -> Json<DayView> {
    let mut session = state.session.lock().await;
    Json(session.select_day(day))
}

pub async fn toggle_set(
    State(state): State<AppState>,
    Path(day): Path<DayKey>,
    Json(payload): Json<ToggleSetRequest>,
) -> Result<Json<ToggleSetResponse>, AppError> {
    let mut session = state.session.lock().await;
    let response = session.toggle_set(day, payload.exercise, payload.set, payload.checked)?;
    persist_store(&state.data_path, session.store()).await?;
    Ok(Json(response))
}

pub async fn set_note(
    State(state): State<AppState>,
    Path(day): Path<DayKey>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<DayView>, AppError> {
    let mut session = state.session.lock().await;
    let view = session.set_note(day, payload.exercise, payload.note)?;
    persist_store(&state.data_path, session.store()).await?;
    Ok(Json(view))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Path(day): Path<DayKey>,
    Json(payload): Json<AddExerciseRequest>,
) -> Result<Json<DayView>, AppError> {
    let mut session = state.session.lock().await;
    let view = session.add_exercise(
        day,
        &payload.name,
        payload.sets,
        payload.description.as_deref(),
    )?;
    persist_store(&state.data_path, session.store()).await?;
    Ok(Json(view))
}

pub async fn remove_exercise(
    State(state): State<AppState>,
    Path((day, index)): Path<(DayKey, usize)>,
    Query(query): Query<RemoveExerciseQuery>,
) -> Result<Json<DayView>, AppError> {
    let confirmed = query.confirm;
    let mut session = state.session.lock().await;
    let view = session.remove_exercise(day, index, &|_: &str| confirmed)?;
    persist_store(&state.data_path, session.store()).await?;
    Ok(Json(view))
}

/// Sets edit mode when `enabled` is given, toggles it otherwise.
pub async fn edit_mode(
    State(state): State<AppState>,
    Json(payload): Json<EditModeRequest>,
) -> Json<EditModeResponse> {
    let mut session = state.session.lock().await;
    let edit_mode = match payload.enabled {
        Some(enabled) => session.set_edit_mode(enabled),
        None => session.toggle_edit_mode(),
    };
    Json(EditModeResponse { edit_mode })
}

pub async fn reset_tracking(State(state): State<AppState>) -> Result<Json<WeekSummary>, AppError> {
    let mut session = state.session.lock().await;
    let summary = session.reset_tracking();
    persist_store(&state.data_path, session.store()).await?;
    Ok(Json(summary))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<WeekSummary> {
    let session = state.session.lock().await;
    Json(session.summary())
}

pub async fn open_modal(
    State(state): State<AppState>,
    Json(payload): Json<OpenModalRequest>,
) -> Result<Json<SessionView>, AppError> {
    if payload.return_focus.trim().is_empty() {
        return Err(AppError::bad_request("return_focus must name an element"));
    }
    let mut session = state.session.lock().await;
    session.open_modal(payload.modal, payload.return_focus, payload.focusables);
    Ok(Json(session.view()))
}

pub async fn move_modal_focus(
    State(state): State<AppState>,
    Json(payload): Json<FocusRequest>,
) -> Json<FocusResponse> {
    let mut session = state.session.lock().await;
    Json(FocusResponse {
        focused: session.move_modal_focus(payload.direction),
    })
}

pub async fn close_modal(State(state): State<AppState>) -> Json<CloseModalResponse> {
    let mut session = state.session.lock().await;
    Json(CloseModalResponse {
        restore_focus: session.close_modal(),
    })
}

pub async fn get_timers(State(state): State<AppState>) -> Json<TimersView> {
    let session = state.session.lock().await;
    Json(session.timers())
}

pub async fn toggle_stopwatch(State(state): State<AppState>) -> Json<TimersView> {
    let mut session = state.session.lock().await;
    if session.toggle_stopwatch() {
        session.attach_ticker(TimerKind::Stopwatch, state.spawn_ticker(TimerKind::Stopwatch));
    }
    Json(session.timers())
}

pub async fn reset_stopwatch(State(state): State<AppState>) -> Json<TimersView> {
    let mut session = state.session.lock().await;
    session.reset_stopwatch();
    Json(session.timers())
}

pub async fn start_rest(State(state): State<AppState>) -> Json<TimersView> {
    let mut session = state.session.lock().await;
    if session.start_rest() {
        session.attach_ticker(TimerKind::Rest, state.spawn_ticker(TimerKind::Rest));
    }
    Json(session.timers())
}

pub async fn stop_rest(State(state): State<AppState>) -> Json<TimersView> {
    let mut session = state.session.lock().await;
    session.stop_rest();
    Json(session.timers())
}

pub async fn reset_rest(State(state): State<AppState>) -> Json<TimersView> {
    let mut session = state.session.lock().await;
    session.reset_rest();
    Json(session.timers())
}
