use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

/// Middleware that resolves the session token to a user and adds it to request extensions
pub async fn authenticate<US: UserServicePort>(
    State(state): State<AppState<US>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?.to_string();

    let profile = state.user_service.current_user(&token).await.map_err(|e| {
        tracing::warn!("Session token rejected: {}", e);
        ApiError::from(e).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser(profile));

    Ok(next.run(req).await)
}

/// Accepts both a bare token and `Bearer <token>`.
fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .unwrap_or(auth_str)
        .trim();

    if token.is_empty() {
        return Err(unauthorized("Unauthorized"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
