//! Month-grid overview of all tournament dates.

use axum::extract::State;
use axum_extra::extract::PrivateCookieJar;
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use hypertext::prelude::*;

use crate::{
    flash::take_notice,
    state::AppState,
    template::{Page, Tab},
    tournaments::Tournament,
    util_resp::{FailureResponse, SuccessResponse},
};

/// How many month panels the overview shows.
pub const MONTH_PANELS: usize = 3;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    /// Id and name of a tournament whose range covers this day.
    pub tournament: Option<(String, String)>,
}

pub struct MonthPanel {
    pub first: NaiveDate,
    /// Monday-first rows; cells outside the month are padding.
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthPanel {
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// The grid starts at the month containing the nearest tournament that is
/// still upcoming or ongoing. An ongoing one is "contained" in the current
/// month; with no candidate at all the current month anchors the grid.
pub fn anchor_month(tournaments: &[Tournament], today: NaiveDate) -> NaiveDate {
    let nearest = tournaments
        .iter()
        .filter(|t| t.end_date >= today)
        .min_by_key(|t| t.start_date);

    match nearest {
        Some(t) if t.start_date > today => first_of_month(t.start_date),
        _ => first_of_month(today),
    }
}

pub fn build_months(
    tournaments: &[Tournament],
    today: NaiveDate,
) -> Vec<MonthPanel> {
    let mut first = anchor_month(tournaments, today);

    (0..MONTH_PANELS)
        .map(|_| {
            let panel = build_month(tournaments, first);
            first = first.checked_add_months(Months::new(1)).unwrap();
            panel
        })
        .collect()
}

fn build_month(tournaments: &[Tournament], first: NaiveDate) -> MonthPanel {
    let last = first
        .checked_add_months(Months::new(1))
        .unwrap()
        .pred_opt()
        .unwrap();

    let mut cursor =
        first - Days::new(u64::from(first.weekday().num_days_from_monday()));

    let mut weeks = Vec::new();
    while cursor <= last {
        let week = (0..7)
            .map(|_| {
                let date = cursor;
                cursor = date.succ_opt().unwrap();

                let in_month = date.month() == first.month();
                let tournament = in_month
                    .then(|| {
                        tournaments
                            .iter()
                            .find(|t| t.covers(date))
                            .map(|t| (t.id.clone(), t.name.clone()))
                    })
                    .flatten();

                DayCell {
                    date,
                    in_month,
                    tournament,
                }
            })
            .collect();
        weeks.push(week);
    }

    MonthPanel { first, weeks }
}

pub async fn calendar_page(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, SuccessResponse), FailureResponse> {
    let doc = state.store.load()?;
    let panels = build_months(&doc.tournaments, Local::now().date_naive());
    let (jar, notice) = take_notice(jar);

    let page = Page::new()
        .tab(Tab::Calendar)
        .notice_opt(notice)
        .body(maud! {
            div class="calendar" {
                @for panel in &panels {
                    div class="card month-panel" {
                        h3 { (panel.title()) }
                        table class="month-grid" {
                            thead {
                                tr {
                                    @for day in WEEKDAYS {
                                        th { (day) }
                                    }
                                }
                            }
                            tbody {
                                @for week in &panel.weeks {
                                    tr {
                                        @for cell in week {
                                            @if !cell.in_month {
                                                td class="other-month" {}
                                            } @else if let Some((id, name)) = &cell.tournament {
                                                td class="has-tournament" {
                                                    a href=(format!("/#tournament-{id}")) title=(name) {
                                                        (cell.date.day().to_string())
                                                    }
                                                }
                                            } @else {
                                                td { (cell.date.day().to_string()) }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
        .render();

    Ok((jar, SuccessResponse::Success(page)))
}
