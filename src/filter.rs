//! The persistent free-text filter, kept in a cookie so it applies to both
//! the upcoming and archive views until cleared.

use axum::{extract::Form, http::HeaderMap, response::Redirect};
use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};
use serde::Deserialize;

use crate::util_resp::back_to_referrer;

pub const FILTER_COOKIE: &str = "filter";

pub fn current_filter(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(FILTER_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
pub struct FilterForm {
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub clear: Option<String>,
}

pub async fn do_set_filter(
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(form): Form<FilterForm>,
) -> (PrivateCookieJar, Redirect) {
    let text = form.filter.trim();

    let jar = if form.clear.is_some() || text.is_empty() {
        jar.remove(Cookie::build(FILTER_COOKIE).path("/"))
    } else {
        jar.add(
            Cookie::build((FILTER_COOKIE, text.to_string()))
                .path("/")
                .permanent(),
        )
    };

    (jar, back_to_referrer(&headers, None))
}
