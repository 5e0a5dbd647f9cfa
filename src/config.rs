use std::path::PathBuf;

use axum::{
    Router,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;

use crate::{
    auth::login::{admin_page, do_admin_login, do_admin_logout},
    calendar::calendar_page,
    filter::do_set_filter,
    state::AppState,
    tournaments::{
        admin::{do_delete_participant, do_delete_tournament},
        create::do_create_tournament,
        edit::do_edit_tournament,
        listing::{archive_page, upcoming_page},
        signup::do_signup,
    },
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub admin_password: String,
    pub data_path: PathBuf,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "adminpass".to_string()),
            data_path: std::env::var("DATA_FILE")
                .unwrap_or_else(|_| "data.json".to_string())
                .into(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8002),
        }
    }
}

/// Key for the private cookie jar (admin session, flash notice, filter).
///
/// Without `SECRET_KEY` set, sessions do not survive a restart.
pub fn secret_key() -> Key {
    match std::env::var("SECRET_KEY") {
        Ok(secret) => Key::derive_from(secret.as_bytes()),
        Err(_) if cfg!(test) => Key::derive_from(&[0; 64]),
        Err(_) => Key::generate(),
    }
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../assets/style.css"),
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        include_str!("../assets/app.js"),
    )
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(upcoming_page))
        .route("/archive", get(archive_page))
        .route("/calendar", get(calendar_page))
        .route("/create", post(do_create_tournament))
        .route("/signup/:tid", post(do_signup))
        .route("/edit/:tid", post(do_edit_tournament))
        .route("/filter", post(do_set_filter))
        .route("/admin", get(admin_page).post(do_admin_login))
        .route("/admin/logout", get(do_admin_logout))
        .route("/admin/delete_tournament/:tid", post(do_delete_tournament))
        .route(
            "/admin/delete_participant/:tid/:pid",
            post(do_delete_participant),
        )
        .route("/static/style.css", get(stylesheet))
        .route("/static/app.js", get(script))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
