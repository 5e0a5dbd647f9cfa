use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    flash::set_notice,
    state::AppState,
    tournaments::{DATE_FMT, Tournament},
    util_resp::{FailureResponse, back_to_referrer},
};

#[derive(Deserialize)]
pub struct CreateTournamentForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    description: String,
}

#[tracing::instrument(skip_all, fields(name = %form.name))]
pub async fn do_create_tournament(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(form): Form<CreateTournamentForm>,
) -> Result<(PrivateCookieJar, Redirect), FailureResponse> {
    let name = form.name.trim();
    let start_date = form.start_date.trim();
    let end_date = form.end_date.trim();

    if name.is_empty() || start_date.is_empty() {
        return Ok((
            set_notice(jar, "Please provide a name and a start date."),
            back_to_referrer(&headers, None),
        ));
    }

    // A missing end date means a one-day tournament.
    let end_date = if end_date.is_empty() { start_date } else { end_date };

    let parsed = NaiveDate::parse_from_str(start_date, DATE_FMT)
        .and_then(|start| {
            Ok((start, NaiveDate::parse_from_str(end_date, DATE_FMT)?))
        })
        .ok()
        .filter(|(start, end)| end >= start);

    let Some((start, end)) = parsed else {
        return Ok((
            set_notice(
                jar,
                "Invalid dates. The end date must not be before the start date.",
            ),
            back_to_referrer(&headers, None),
        ));
    };

    let tournament = Tournament {
        id: Uuid::new_v4().simple().to_string(),
        name: name.to_string(),
        start_date: start,
        end_date: end,
        location: form.location.trim().to_string(),
        link: form.link.trim().to_string(),
        description: form.description.trim().to_string(),
        participants: Vec::new(),
    };
    let anchor = format!("tournament-{}", tournament.id);

    let mut doc = state.store.load()?;
    doc.tournaments.push(tournament);
    state.store.save(&doc)?;

    tracing::info!("tournament created");

    Ok((
        set_notice(jar, "Tournament created."),
        back_to_referrer(&headers, Some(&anchor)),
    ))
}
