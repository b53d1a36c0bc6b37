use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::UserResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn get_current_user(
    Extension(AuthenticatedUser(profile)): Extension<AuthenticatedUser>,
) -> ApiSuccess<UserResponseData> {
    ApiSuccess::new(StatusCode::OK, (&profile).into())
}
