use axum::{
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use hypertext::prelude::*;

use crate::{
    auth::Admin,
    flash::set_notice,
    state::AppState,
    store::Document,
    util_resp::FailureResponse,
};

pub struct AdminPanel<'a> {
    pub doc: &'a Document,
}

impl Renderable for AdminPanel<'_> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            h2 { "Admin panel" }
            p {
                a href="/" { "Back" }
                " | "
                a href="/admin/logout" { "Logout" }
            }
            @for t in &self.doc.tournaments {
                fieldset class="admin-entry" {
                    legend { (t.name) " (" (t.date_span()) ")" }
                    form method="post"
                         action=(format!("/admin/delete_tournament/{}", t.id)) {
                        button class="btn-primary" { "Delete tournament" }
                    }
                    @if !t.participants.is_empty() {
                        h4 { "Participants" }
                        @for p in &t.participants {
                            form class="admin-participant"
                                 method="post"
                                 action=(format!("/admin/delete_participant/{}/{}", t.id, p.id)) {
                                (p.name) " "
                                button class="btn-primary" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

/// Deletes require the [`Admin`] capability; without a session the extractor
/// rejects with 403 before the store is touched.
#[tracing::instrument(skip_all, fields(tournament = %tid))]
pub async fn do_delete_tournament(
    _admin: Admin,
    State(state): State<AppState>,
    Path(tid): Path<String>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Redirect), FailureResponse> {
    let mut doc = state.store.load()?;
    doc.tournaments.retain(|t| t.id != tid);
    state.store.save(&doc)?;

    tracing::info!("tournament deleted");

    Ok((set_notice(jar, "Tournament deleted."), Redirect::to("/admin")))
}

#[tracing::instrument(skip_all, fields(tournament = %tid, participant = %pid))]
pub async fn do_delete_participant(
    _admin: Admin,
    State(state): State<AppState>,
    Path((tid, pid)): Path<(String, String)>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, Redirect), FailureResponse> {
    let mut doc = state.store.load()?;
    if let Some(tournament) = doc.tournament_mut(&tid) {
        tournament.participants.retain(|p| p.id != pid);
    }
    state.store.save(&doc)?;

    Ok((set_notice(jar, "Participant deleted."), Redirect::to("/admin")))
}
