//! Welcome Handler

use axum::Json;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to Hello Names API";

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// 根路径欢迎信息，与存储状态无关
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}
