use std::io;

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use hypertext::Rendered;
use url::Url;

/// Sends the client back to the view it came from (upcoming, archive, or the
/// admin panel), optionally re-anchored on a fragment such as
/// `tournament-<id>`. Falls back to `/` when the Referer is absent or not a
/// URL we can parse.
pub fn back_to_referrer(headers: &HeaderMap, fragment: Option<&str>) -> Redirect {
    let base = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Url>().ok())
        .map(|url| url.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    match fragment {
        Some(fragment) => Redirect::to(&format!("{base}#{fragment}")),
        None => Redirect::to(&base),
    }
}

pub enum SuccessResponse {
    Success(Rendered<String>),
}

impl IntoResponse for SuccessResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Success(html) => Html(html.into_inner()).into_response(),
        }
    }
}

#[derive(Debug)]
pub enum FailureResponse {
    ServerError(()),
}

impl IntoResponse for FailureResponse {
    fn into_response(self) -> Response {
        match self {
            Self::ServerError(()) => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<io::Error> for FailureResponse {
    fn from(e: io::Error) -> Self {
        tracing::error!("store i/o failed: {e}");
        Self::ServerError(())
    }
}
