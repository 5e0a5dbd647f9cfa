use axum::extract::State;
use axum_extra::extract::PrivateCookieJar;
use chrono::{Days, Local, NaiveDate};
use hypertext::prelude::*;
use itertools::Itertools;

use crate::{
    filter::current_filter,
    flash::take_notice,
    state::AppState,
    template::{Page, Tab},
    tournaments::{DATE_FMT, Participant, Tournament},
    util_resp::{FailureResponse, SuccessResponse},
};

/// Days after a tournament's end date before it drops out of the upcoming
/// view. A tournament whose end date is exactly this far in the past is
/// already archived.
pub const ARCHIVE_AFTER_DAYS: u64 = 60;

pub struct Partitioned {
    pub upcoming: Vec<Tournament>,
    pub archive: Vec<Tournament>,
}

/// Splits tournaments into the two views and applies the display orderings:
/// upcoming ascending by start date, archive descending, participants
/// ascending by case-insensitive name.
pub fn partition(mut tournaments: Vec<Tournament>, today: NaiveDate) -> Partitioned {
    let border = today - Days::new(ARCHIVE_AFTER_DAYS);

    for t in &mut tournaments {
        t.participants.sort_by_key(|p| p.name.to_lowercase());
    }

    let (mut upcoming, mut archive): (Vec<_>, Vec<_>) = tournaments
        .into_iter()
        .partition(|t| t.end_date > border);

    upcoming.sort_by_key(|t| t.start_date);
    archive.sort_by_key(|t| std::cmp::Reverse(t.start_date));

    Partitioned { upcoming, archive }
}

pub fn apply_filter(
    tournaments: Vec<Tournament>,
    needle: Option<&str>,
) -> Vec<Tournament> {
    match needle {
        Some(needle) => tournaments
            .into_iter()
            .filter(|t| t.matches_filter(needle))
            .collect(),
        None => tournaments,
    }
}

pub async fn upcoming_page(
    state: State<AppState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, SuccessResponse), FailureResponse> {
    listing_page(state, jar, Tab::Upcoming).await
}

pub async fn archive_page(
    state: State<AppState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, SuccessResponse), FailureResponse> {
    listing_page(state, jar, Tab::Archive).await
}

async fn listing_page(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    tab: Tab,
) -> Result<(PrivateCookieJar, SuccessResponse), FailureResponse> {
    let doc = state.store.load()?;

    let player_names: Vec<String> = doc
        .tournaments
        .iter()
        .flat_map(|t| t.participants.iter().map(|p| p.name.clone()))
        .sorted()
        .dedup()
        .collect();

    let filter = current_filter(&jar);
    let (jar, notice) = take_notice(jar);

    let split = partition(doc.tournaments, Local::now().date_naive());
    let shown = apply_filter(
        if matches!(tab, Tab::Archive) {
            split.archive
        } else {
            split.upcoming
        },
        filter.as_deref(),
    );

    let page = Page::new()
        .tab(tab)
        .notice_opt(notice)
        .filter_opt(filter)
        .player_names(player_names)
        .body(maud! {
            @if matches!(tab, Tab::Upcoming) {
                div class="card" {
                    button type="button" class="btn-primary create-toggle" {
                        "New tournament"
                    }
                    div class="create-container" {
                        (CreateTournamentForm)
                    }
                }
            }
            div class="grid" {
                @for tournament in &shown {
                    TournamentCard tournament=(tournament);
                }
            }
        })
        .render();

    Ok((jar, SuccessResponse::Success(page)))
}

struct CreateTournamentForm;

impl Renderable for CreateTournamentForm {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            h2 { "New tournament" }
            form method="post" action="/create" {
                label class="form-label" for="name" { "Name" }
                input id="name" name="name" placeholder="Tournament name" required;
                label class="form-label" for="start_date" { "Start date" }
                input type="date" id="start_date" name="start_date" required;
                label class="form-label" for="end_date" { "End date " small { "(optional)" } }
                input type="date" id="end_date" name="end_date";
                label class="form-label" for="location" { "Location " small { "(optional)" } }
                input id="location" name="location" placeholder="Location";
                label class="form-label" for="link" { "Link " small { "(optional)" } }
                input id="link" name="link" placeholder="https://example.com";
                label class="form-label" for="description" { "Description " small { "(optional)" } }
                textarea id="description" name="description" rows="3" {}
                button class="btn-primary" type="submit" { "Save" }
            }
        }
        .render_to(buffer)
    }
}

pub struct TournamentCard<'a> {
    pub tournament: &'a Tournament,
}

impl Renderable for TournamentCard<'_> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        let t = self.tournament;
        let days = t.days();

        maud! {
            div class="card" id=(format!("tournament-{}", t.id)) {
                div class="card-header" {
                    div {
                        h2 { (t.name) }
                        small { (t.date_span()) }
                    }
                }
                div class="detail-container" {
                    @if !t.link.is_empty() {
                        small { a href=(t.link) target="_blank" { (t.link) } }
                    }
                    @if !t.description.is_empty() {
                        small class="description" { (t.description) }
                    }
                    button type="button" class="edit-toggle" { "Edit details" }
                    div class="edit-container" {
                        form method="post" action=(format!("/edit/{}", t.id)) {
                            label class="form-label" { "Link" }
                            input name="link" value=(t.link);
                            label class="form-label" { "Description" }
                            textarea name="description" rows="3" { (t.description) }
                            button class="btn-primary" type="submit" { "Save details" }
                        }
                    }
                }
                div class="card-body" {
                    div class="card-left" {
                        table class="status-table" {
                            thead {
                                tr {
                                    th { "Participant" }
                                    @for day in &days {
                                        th { (day.format(super::DISPLAY_FMT).to_string()) }
                                    }
                                    th { "Action" }
                                }
                            }
                            tbody {
                                @for p in &t.participants {
                                    ParticipantRow participant=(p) days=(days.as_slice());
                                }
                            }
                        }
                    }
                    div class="card-right" {
                        SignupForm tournament=(t) days=(days.as_slice());
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

struct ParticipantRow<'a> {
    participant: &'a Participant,
    days: &'a [NaiveDate],
}

impl Renderable for ParticipantRow<'_> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        let p = self.participant;

        maud! {
            tr {
                td { (p.name) }
                @for day in self.days {
                    @let status = p.status_on(*day);
                    td class=(status.css_class()) { (status.glyph()) }
                }
                td {
                    button type="button"
                           class="edit-btn"
                           data-name=(p.name)
                           data-statuses=(serde_json::to_string(&p.statuses).unwrap_or_default()) {
                        "Edit"
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

struct SignupForm<'a> {
    tournament: &'a Tournament,
    days: &'a [NaiveDate],
}

impl Renderable for SignupForm<'_> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            form method="post" action=(format!("/signup/{}", self.tournament.id)) {
                div class="form-group" {
                    input type="text"
                          name="player"
                          list="player_names"
                          placeholder="Your name"
                          required;
                }
                @for day in self.days {
                    @let iso = day.format(DATE_FMT);
                    div class="status-field" {
                        label class="form-label" for=(format!("select_{iso}")) {
                            (day.format(super::DISPLAY_FMT).to_string())
                        }
                        select name=(format!("status_{iso}")) id=(format!("select_{iso}")) {
                            option value="attending" { "Attending" }
                            option value="interested" { "Interested" }
                            option value="no" { "Not coming" }
                        }
                    }
                }
                button class="btn-primary" type="submit" { "Submit" }
            }
        }
        .render_to(buffer)
    }
}
