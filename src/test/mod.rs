//! End-to-end tests driving the real router over a scratch store file.

use axum_test::TestServer;
use axum_extra::extract::cookie::Key;
use chrono::{Days, Local, NaiveDate};

use crate::{
    config::{AppConfig, create_app},
    state::AppState,
    store::Store,
    tournaments::{Status, Tournament},
};

fn scratch_state() -> AppState {
    let path = std::env::temp_dir()
        .join(format!("lineup-e2e-{}.json", uuid::Uuid::new_v4()));
    AppState {
        store: Store::new(&path),
        key: Key::derive_from(&[0; 64]),
        config: AppConfig {
            admin_password: "adminpass".to_string(),
            data_path: path,
            port: 0,
        },
    }
}

fn server(state: &AppState) -> TestServer {
    let mut server = TestServer::new(create_app(state.clone())).unwrap();
    server.do_save_cookies();
    server
}

fn seed(store: &Store, id: &str, name: &str, start: NaiveDate, end: NaiveDate) {
    let mut doc = store.load().unwrap();
    doc.tournaments.push(Tournament {
        id: id.to_string(),
        name: name.to_string(),
        start_date: start,
        end_date: end,
        location: String::new(),
        link: String::new(),
        description: String::new(),
        participants: Vec::new(),
    });
    store.save(&doc).unwrap();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[tokio::test]
async fn pages_render() {
    let state = scratch_state();
    let server = server(&state);

    for path in ["/", "/archive", "/calendar", "/admin"] {
        let res = server.get(path).await;
        assert_eq!(res.status_code(), 200, "GET {path}");
    }
}

#[tokio::test]
async fn created_tournament_is_persisted_and_listed() {
    let state = scratch_state();
    let server = server(&state);

    let res = server
        .post("/create")
        .form(&[
            ("name", "Sommercup"),
            ("start_date", "2099-06-01"),
            ("end_date", "2099-06-02"),
            ("location", "Aachen"),
            ("link", ""),
            ("description", ""),
        ])
        .await;
    assert_eq!(res.status_code(), 303);

    let doc = state.store.load().unwrap();
    assert_eq!(doc.tournaments.len(), 1);
    let t = &doc.tournaments[0];
    assert_eq!(t.name, "Sommercup");
    assert_eq!(t.days().len(), 2);
    assert!(t.participants.is_empty());

    let page = server.get("/").await.text();
    assert!(page.contains("Sommercup"));
    assert!(page.contains("Tournament created."));
}

#[tokio::test]
async fn create_without_end_date_makes_a_one_day_tournament() {
    let state = scratch_state();
    let server = server(&state);

    server
        .post("/create")
        .form(&[("name", "Blitz"), ("start_date", "2099-06-01")])
        .await;

    let doc = state.store.load().unwrap();
    assert_eq!(doc.tournaments[0].start_date, doc.tournaments[0].end_date);
}

#[tokio::test]
async fn create_with_end_before_start_does_not_mutate_the_store() {
    let state = scratch_state();
    let server = server(&state);

    let res = server
        .post("/create")
        .form(&[
            ("name", "Backwards"),
            ("start_date", "2099-06-02"),
            ("end_date", "2099-06-01"),
        ])
        .await;
    assert_eq!(res.status_code(), 303);
    assert!(state.store.load().unwrap().tournaments.is_empty());

    let page = server.get("/").await.text();
    assert!(page.contains("Invalid dates."));
}

#[tokio::test]
async fn create_requires_name_and_start_date() {
    let state = scratch_state();
    let server = server(&state);

    server.post("/create").form(&[("name", "No date")]).await;
    server
        .post("/create")
        .form(&[("name", ""), ("start_date", "2099-06-01")])
        .await;

    assert!(state.store.load().unwrap().tournaments.is_empty());
}

#[tokio::test]
async fn signup_upserts_by_case_insensitive_name() {
    let state = scratch_state();
    let server = server(&state);
    seed(
        &state.store,
        "cup",
        "Cup",
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2099, 6, 2).unwrap(),
    );

    server
        .post("/signup/cup")
        .form(&[
            ("player", "Ana"),
            ("status_2099-06-01", "attending"),
            ("status_2099-06-02", "interested"),
        ])
        .await;

    let doc = state.store.load().unwrap();
    let roster = &doc.tournaments[0].participants;
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Ana");
    assert_eq!(
        roster[0].status_on(NaiveDate::from_ymd_opt(2099, 6, 1).unwrap()),
        Status::Attending
    );
    assert_eq!(
        roster[0].status_on(NaiveDate::from_ymd_opt(2099, 6, 2).unwrap()),
        Status::Interested
    );

    // Same name, different casing: replaces the status map, keeps one entry
    // under the original spelling.
    server
        .post("/signup/cup")
        .form(&[("player", "ana"), ("status_2099-06-01", "no")])
        .await;

    let doc = state.store.load().unwrap();
    let roster = &doc.tournaments[0].participants;
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Ana");
    assert_eq!(
        roster[0].status_on(NaiveDate::from_ymd_opt(2099, 6, 1).unwrap()),
        Status::No
    );
    assert_eq!(
        roster[0].status_on(NaiveDate::from_ymd_opt(2099, 6, 2).unwrap()),
        Status::No,
        "day two was dropped from the resubmitted map"
    );
}

#[tokio::test]
async fn signup_with_empty_name_or_unknown_id_changes_nothing() {
    let state = scratch_state();
    let server = server(&state);
    seed(
        &state.store,
        "cup",
        "Cup",
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
    );

    server
        .post("/signup/cup")
        .form(&[("player", "  "), ("status_2099-06-01", "attending")])
        .await;
    let res = server
        .post("/signup/nosuch")
        .form(&[("player", "Ana"), ("status_2099-06-01", "attending")])
        .await;
    assert_eq!(res.status_code(), 303);

    let doc = state.store.load().unwrap();
    assert_eq!(doc.tournaments.len(), 1);
    assert!(doc.tournaments[0].participants.is_empty());
}

#[tokio::test]
async fn edit_overwrites_link_and_description() {
    let state = scratch_state();
    let server = server(&state);
    seed(
        &state.store,
        "cup",
        "Cup",
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
    );

    server
        .post("/edit/cup")
        .form(&[
            ("link", "https://example.com"),
            ("description", "Bring shoes"),
        ])
        .await;
    // Unknown id: silent no-op.
    server
        .post("/edit/nosuch")
        .form(&[("link", "x"), ("description", "y")])
        .await;

    let doc = state.store.load().unwrap();
    assert_eq!(doc.tournaments.len(), 1);
    assert_eq!(doc.tournaments[0].link, "https://example.com");
    assert_eq!(doc.tournaments[0].description, "Bring shoes");
}

#[tokio::test]
async fn archive_and_upcoming_views_split_by_end_date() {
    let state = scratch_state();
    let server = server(&state);

    let old_end = today() - Days::new(61);
    seed(&state.store, "old", "Altes Turnier", old_end, old_end);
    let soon = today() + Days::new(7);
    seed(&state.store, "new", "Neues Turnier", soon, soon);

    let upcoming = server.get("/").await.text();
    assert!(upcoming.contains("Neues Turnier"));
    assert!(!upcoming.contains("Altes Turnier"));

    let archive = server.get("/archive").await.text();
    assert!(archive.contains("Altes Turnier"));
    assert!(!archive.contains("Neues Turnier"));
}

#[tokio::test]
async fn filter_cookie_persists_until_cleared() {
    let state = scratch_state();
    let server = server(&state);

    let soon = today() + Days::new(7);
    seed(&state.store, "a", "Alpha Open", soon, soon);
    seed(&state.store, "b", "Beta Cup", soon, soon);

    server.post("/filter").form(&[("filter", "alpha")]).await;

    let page = server.get("/").await.text();
    assert!(page.contains("Alpha Open"));
    assert!(!page.contains("Beta Cup"));

    server
        .post("/filter")
        .form(&[("filter", ""), ("clear", "1")])
        .await;

    let page = server.get("/").await.text();
    assert!(page.contains("Alpha Open"));
    assert!(page.contains("Beta Cup"));
}

#[tokio::test]
async fn deletes_require_an_admin_session() {
    let state = scratch_state();
    let server = server(&state);
    seed(
        &state.store,
        "cup",
        "Cup",
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
    );

    let res = server.post("/admin/delete_tournament/cup").await;
    assert_eq!(res.status_code(), 403);
    assert_eq!(state.store.load().unwrap().tournaments.len(), 1);

    // A failed login grants nothing.
    server.post("/admin").form(&[("password", "wrong")]).await;
    let res = server.post("/admin/delete_tournament/cup").await;
    assert_eq!(res.status_code(), 403);
    assert_eq!(state.store.load().unwrap().tournaments.len(), 1);

    server.post("/admin").form(&[("password", "adminpass")]).await;
    let res = server.post("/admin/delete_tournament/cup").await;
    assert_eq!(res.status_code(), 303);
    assert!(state.store.load().unwrap().tournaments.is_empty());
}

#[tokio::test]
async fn admin_can_delete_a_single_participant() {
    let state = scratch_state();
    let server = server(&state);
    seed(
        &state.store,
        "cup",
        "Cup",
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2099, 6, 1).unwrap(),
    );
    server
        .post("/signup/cup")
        .form(&[("player", "Ana"), ("status_2099-06-01", "attending")])
        .await;
    server
        .post("/signup/cup")
        .form(&[("player", "Bob"), ("status_2099-06-01", "interested")])
        .await;

    let pid = state.store.load().unwrap().tournaments[0].participants[0]
        .id
        .clone();

    server.post("/admin").form(&[("password", "adminpass")]).await;
    server
        .post(&format!("/admin/delete_participant/cup/{pid}"))
        .await;

    let doc = state.store.load().unwrap();
    assert_eq!(doc.tournaments[0].participants.len(), 1);
    assert_ne!(doc.tournaments[0].participants[0].id, pid);
}

#[tokio::test]
async fn admin_panel_appears_only_after_login() {
    let state = scratch_state();
    let server = server(&state);

    let page = server.get("/admin").await.text();
    assert!(page.contains("Admin login"));
    assert!(!page.contains("Admin panel"));

    server.post("/admin").form(&[("password", "adminpass")]).await;
    let page = server.get("/admin").await.text();
    assert!(page.contains("Admin panel"));

    server.get("/admin/logout").await;
    let page = server.get("/admin").await.text();
    assert!(page.contains("Admin login"));
}
