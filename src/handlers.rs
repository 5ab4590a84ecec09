use crate::errors::AppError;
use crate::message::compose_message;
use crate::models::{
    DateRequest, EmojiRequest, MessageResponse, Ritual, RitualRequest, SelectionResponse, Sleep,
    SleepRequest,
};
use crate::selection::Selection;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let selection = state.selection.lock().await;
    Html(render_index(&selection))
}

pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let selection = state.selection.lock().await;
    Json(to_response(&selection))
}

pub async fn set_date(
    State(state): State<AppState>,
    Json(payload): Json<DateRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let raw = payload.date.trim();
    let date = if raw.is_empty() {
        None
    } else {
        Some(
            raw.parse::<NaiveDate>()
                .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?,
        )
    };

    let mut selection = state.selection.lock().await;
    selection.set_date(date);
    Ok(Json(to_response(&selection)))
}

pub async fn toggle_sleep(
    State(state): State<AppState>,
    Json(payload): Json<SleepRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let value = parse_sleep(&payload.value)?;
    let mut selection = state.selection.lock().await;
    selection.toggle_sleep(value);
    Ok(Json(to_response(&selection)))
}

pub async fn toggle_ritual(
    State(state): State<AppState>,
    Json(payload): Json<RitualRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let value = parse_ritual(&payload.value)?;
    let mut selection = state.selection.lock().await;
    selection.toggle_ritual(value);
    Ok(Json(to_response(&selection)))
}

pub async fn add_emoji(
    State(state): State<AppState>,
    Json(payload): Json<EmojiRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let token = payload.emoji.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("emoji must not be empty"));
    }

    let mut selection = state.selection.lock().await;
    selection.add_custom_emoji(token);
    Ok(Json(to_response(&selection)))
}

pub async fn remove_emoji(
    State(state): State<AppState>,
    Json(payload): Json<EmojiRequest>,
) -> Json<SelectionResponse> {
    let mut selection = state.selection.lock().await;
    selection.remove_custom_emoji(payload.emoji.trim());
    Json(to_response(&selection))
}

pub async fn get_message(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    let selection = state.selection.lock().await;
    let message = compose_message(&selection)
        .ok_or_else(|| AppError::bad_request("pick a date before sharing"))?;
    Ok(Json(MessageResponse { message }))
}

// No-JS fallbacks: toggle, then land back on the page.
pub async fn sleep_form(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Redirect, AppError> {
    let value = parse_sleep(&value)?;
    let mut selection = state.selection.lock().await;
    selection.toggle_sleep(value);
    Ok(Redirect::to("/"))
}

pub async fn ritual_form(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Redirect, AppError> {
    let value = parse_ritual(&value)?;
    let mut selection = state.selection.lock().await;
    selection.toggle_ritual(value);
    Ok(Redirect::to("/"))
}

fn parse_sleep(raw: &str) -> Result<Sleep, AppError> {
    Sleep::parse(raw.trim())
        .ok_or_else(|| AppError::bad_request("sleep must be 'great', 'ok', 'bad' or 'nightmare'"))
}

fn parse_ritual(raw: &str) -> Result<Ritual, AppError> {
    Ritual::parse(raw.trim()).ok_or_else(|| {
        AppError::bad_request("ritual must be 'coffee', 'learning', 'working' or 'fruit'")
    })
}

fn to_response(selection: &Selection) -> SelectionResponse {
    SelectionResponse {
        date: selection.date().map(|d| d.to_string()),
        sleep: selection.sleep().map(|s| s.as_str().to_string()),
        rituals: selection
            .rituals()
            .iter()
            .map(|r| r.as_str().to_string())
            .collect(),
        custom_emojis: selection.custom_emojis().to_vec(),
        shareable: selection.is_shareable(),
    }
}
