//! Student CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::StudentPayload;
use crate::response::found_or_empty;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let student = state.students.create(body).await?;
    Ok(Json(student))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.students.list_all().await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.students.get_by_id(id).await?;
    Ok(found_or_empty(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = state.students.update(id, body).await?;
    Ok(found_or_empty(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let message = state.students.delete(id).await?;
    Ok(message)
}
