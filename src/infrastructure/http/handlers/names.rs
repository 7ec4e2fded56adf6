//! Name HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{AddName, ListNames};
use crate::infrastructure::http::dto::{AddNameRequest, MessageResponse, NamesResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub const NAME_STORED_MESSAGE: &str = "Name stored successfully";

/// 提交名字
///
/// 名字缺失、不是字符串或去除空白后为空时返回 400
pub async fn add_name(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddNameRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;

    state
        .add_name_handler
        .handle(AddName { name: request.name })
        .await?;

    Ok(Json(MessageResponse::success(NAME_STORED_MESSAGE)))
}

/// 列出所有名字（按提交顺序）
pub async fn list_names(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NamesResponse>, ApiError> {
    let response = state.list_names_handler.handle(ListNames).await?;

    Ok(Json(NamesResponse {
        success: true,
        names: response.names,
    }))
}
