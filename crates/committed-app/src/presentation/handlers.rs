use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Datelike;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::{
    CreateHabitCommand, RecordEntryCommand, RecordEntryResult,
};
use crate::application::dtos::{
    CreateHabitInput, HabitAnalyticsDto, HabitCalendarDto, HabitDto, HabitWithProgressDto,
    RecordEntryInput,
};
use crate::application::utils::resolve_reference_date;
use crate::presentation::auth::CurrentUser;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;
use committed_domain::HabitProgressCalculator;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ReferenceDateParams {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn health() -> &'static str {
    "healthy server"
}

pub async fn create_habit(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    payload: Result<Json<CreateHabitInput>, JsonRejection>,
) -> ApiResult<HabitDto> {
    let Json(input) = payload?;

    let command = CreateHabitCommand {
        user_id: user.id().to_string(),
        name: input.name,
        description: input.description,
        target_frequency: input.target_frequency,
    };

    let habit = state.command_handlers.create_habit.handle(command).await?;
    Ok(Json(habit))
}

pub async fn list_habits(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> ApiResult<Vec<HabitDto>> {
    let habits = state.queries.habits.list_habits(user.id()).await?;
    Ok(Json(habits))
}

pub async fn list_habits_with_progress(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    params: Result<Query<ReferenceDateParams>, QueryRejection>,
) -> ApiResult<Vec<HabitWithProgressDto>> {
    let Query(params) = params?;
    let reference = resolve_reference_date(params.date.as_deref())?;

    let habits = state
        .queries
        .habits
        .list_habits_with_progress(user.id(), reference)
        .await?;
    Ok(Json(habits))
}

pub async fn record_entry(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    payload: Result<Json<RecordEntryInput>, JsonRejection>,
) -> ApiResult<RecordEntryResult> {
    let Json(input) = payload?;

    let command = RecordEntryCommand {
        user_id: user.id().to_string(),
        habit_id: input.habit_id,
        date: input.date,
        status: input.status,
    };

    let result = state.command_handlers.record_entry.handle(command).await?;
    Ok(Json(result))
}

pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(habit_id): Path<String>,
    params: Result<Query<ReferenceDateParams>, QueryRejection>,
) -> ApiResult<HabitAnalyticsDto> {
    let Query(params) = params?;
    let reference = resolve_reference_date(params.date.as_deref())?;

    let analytics = state
        .queries
        .habits
        .get_analytics(user.id(), &habit_id, reference)
        .await?;
    Ok(Json(analytics))
}

/// Defaults to the current month.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(habit_id): Path<String>,
    params: Result<Query<CalendarParams>, QueryRejection>,
) -> ApiResult<HabitCalendarDto> {
    let Query(params) = params?;
    let today = HabitProgressCalculator::today();

    let calendar = state
        .queries
        .habits
        .get_calendar(
            user.id(),
            &habit_id,
            params.year.unwrap_or_else(|| today.year()),
            params.month.unwrap_or_else(|| today.month()),
        )
        .await?;
    Ok(Json(calendar))
}
