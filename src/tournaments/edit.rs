use axum::{
    extract::{Form, Path, State},
    http::HeaderMap,
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use serde::Deserialize;

use crate::{
    flash::set_notice,
    state::AppState,
    util_resp::{FailureResponse, back_to_referrer},
};

#[derive(Deserialize)]
pub struct EditTournamentForm {
    #[serde(default)]
    link: String,
    #[serde(default)]
    description: String,
}

/// Overwrites a tournament's link and description. Unknown ids are a silent
/// no-op.
#[tracing::instrument(skip_all, fields(tournament = %tid))]
pub async fn do_edit_tournament(
    State(state): State<AppState>,
    Path(tid): Path<String>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(form): Form<EditTournamentForm>,
) -> Result<(PrivateCookieJar, Redirect), FailureResponse> {
    let mut doc = state.store.load()?;

    if let Some(tournament) = doc.tournament_mut(&tid) {
        tournament.link = form.link.trim().to_string();
        tournament.description = form.description.trim().to_string();
        state.store.save(&doc)?;
    }

    Ok((
        set_notice(jar, "Details saved."),
        back_to_referrer(&headers, Some(&format!("tournament-{tid}"))),
    ))
}
