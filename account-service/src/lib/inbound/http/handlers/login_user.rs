use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserSession;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login_user<US: UserServicePort>(
    State(state): State<AppState<US>>,
    body: Result<Json<LoginUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUserRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl LoginUserRequest {
    fn try_into_command(self) -> Result<LoginUserCommand, UserError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(LoginUserCommand::new(username, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub username: String,
    pub name: String,
    pub token: String,
}

impl From<UserSession> for LoginResponseData {
    fn from(session: UserSession) -> Self {
        Self {
            username: session.username.as_str().to_string(),
            name: session.name.as_str().to_string(),
            token: session.token,
        }
    }
}
