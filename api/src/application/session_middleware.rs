use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use calorie_tracker_core::domain::session::ports::SessionService;
use tracing::error;
use uuid::Uuid;

use crate::application::http::server::app_state::AppState;

pub const SESSION_COOKIE: &str = "calorie_tracker_session";

/// Session context stored in request extensions
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub session_id: Uuid,
}

/// Resolves the browser session from its cookie, creating one when the
/// cookie is missing, unknown or expired, and sets the cookie on the
/// response whenever the id changed.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let jar = CookieJar::from_headers(req.headers());
    let cookie_id = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let session = state
        .service
        .resolve_session(cookie_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve session: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    req.extensions_mut().insert(SessionContext {
        session_id: session.id,
    });

    let mut response = next.run(req).await;

    if cookie_id != Some(session.id) {
        let path = if state.args.server.root_path.is_empty() {
            "/".to_string()
        } else {
            state.args.server.root_path.clone()
        };

        let cookie = Cookie::build((SESSION_COOKIE, session.id.to_string()))
            .path(path)
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(state.args.session.secure_cookies)
            .build();

        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => error!("Failed to encode session cookie: {}", e),
        }
    }

    Ok(response)
}
