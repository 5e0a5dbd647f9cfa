use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{config::AppConfig, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub key: Key,
    pub config: AppConfig,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}
