use std::collections::BTreeMap;

use axum::{
    extract::{Form, Path, State},
    http::HeaderMap,
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    flash::set_notice,
    state::AppState,
    tournaments::{DATE_FMT, Participant, Status},
    util_resp::{FailureResponse, back_to_referrer},
};

/// Sign-up form submission. Besides `player`, the form carries one
/// `status_<iso date>` select per tournament day, so the fields are walked
/// as raw pairs rather than deserialized into a struct.
#[tracing::instrument(skip_all, fields(tournament = %tid))]
pub async fn do_signup(
    State(state): State<AppState>,
    Path(tid): Path<String>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<(PrivateCookieJar, Redirect), FailureResponse> {
    let name = fields
        .iter()
        .find(|(key, _)| key == "player")
        .map(|(_, value)| value.trim())
        .unwrap_or_default();

    if name.is_empty() {
        return Ok((
            set_notice(jar, "Please enter a name."),
            back_to_referrer(&headers, None),
        ));
    }

    let statuses: BTreeMap<NaiveDate, Status> = fields
        .iter()
        .filter_map(|(key, value)| {
            let iso = key.strip_prefix("status_")?;
            let day = NaiveDate::parse_from_str(iso, DATE_FMT).ok()?;
            Some((day, Status::parse(value)?))
        })
        .collect();

    let mut doc = state.store.load()?;

    // An unknown tournament id is a silent no-op, matching the rest of the
    // unknown-id handling.
    if let Some(tournament) = doc.tournament_mut(&tid) {
        match tournament.participant_mut(name) {
            // Repeat signup under the same name (any casing) replaces the
            // whole status map and keeps the original spelling.
            Some(existing) => existing.statuses = statuses,
            None => tournament.participants.push(Participant {
                id: Uuid::new_v4().simple().to_string(),
                name: name.to_string(),
                statuses,
            }),
        }
        state.store.save(&doc)?;
    }

    Ok((
        set_notice(jar, "Sign-up saved."),
        back_to_referrer(&headers, Some(&format!("tournament-{tid}"))),
    ))
}
