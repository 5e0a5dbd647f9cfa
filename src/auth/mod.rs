use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use chrono::{Days, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod login;

pub const ADMIN_COOKIE: &str = "admin_session";

/// Capability token proving an active admin session. Handlers that mutate
/// the store destructively take this as a parameter, so authorization is
/// visible in their signatures rather than checked ambiently.
pub struct Admin;

#[derive(Serialize, Deserialize)]
struct AdminSession {
    expiry: NaiveDateTime,
}

#[derive(Debug)]
pub enum AuthError {
    Unauthorized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let AuthError::Unauthorized = self;
        (StatusCode::FORBIDDEN, "Admin session required").into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        // The jar's own rejection is `Infallible`.
        let jar = match PrivateCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let cookie = match jar.get(ADMIN_COOKIE) {
            Some(cookie) => cookie,
            None => return Err(AuthError::Unauthorized),
        };

        match serde_json::from_str::<AdminSession>(cookie.value()) {
            Ok(session) if Utc::now().naive_utc() < session.expiry => Ok(Admin),
            _ => Err(AuthError::Unauthorized),
        }
    }
}

pub fn set_admin_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((
            ADMIN_COOKIE,
            serde_json::to_string(&AdminSession {
                expiry: Utc::now()
                    .naive_utc()
                    .checked_add_days(Days::new(1))
                    .unwrap(),
            })
            .unwrap(),
        ))
        .path("/"),
    )
}

pub fn clear_admin_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(Cookie::build(ADMIN_COOKIE).path("/"))
}
