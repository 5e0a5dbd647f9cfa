use axum::{
    extract::{Form, State},
    response::Redirect,
};
use axum_extra::extract::PrivateCookieJar;
use hypertext::prelude::*;
use serde::Deserialize;

use crate::{
    auth::{Admin, clear_admin_cookie, set_admin_cookie},
    flash::{set_notice, take_notice},
    state::AppState,
    template::{Page, Tab},
    tournaments::admin::AdminPanel,
    util_resp::{FailureResponse, SuccessResponse},
};

pub async fn admin_page(
    State(state): State<AppState>,
    admin: Option<Admin>,
    jar: PrivateCookieJar,
) -> Result<(PrivateCookieJar, SuccessResponse), FailureResponse> {
    let (jar, notice) = take_notice(jar);

    let page = if admin.is_some() {
        let doc = state.store.load()?;
        Page::new()
            .tab(Tab::Admin)
            .notice_opt(notice)
            .body(maud! {
                AdminPanel doc=(&doc);
            })
            .render()
    } else {
        Page::new()
            .tab(Tab::Admin)
            .notice_opt(notice)
            .body(maud! {
                div class="card" {
                    h2 { "Admin login" }
                    form method="post" action="/admin" {
                        label class="form-label" for="password" { "Admin password" }
                        input type="password" id="password" name="password" required;
                        button class="btn-primary" type="submit" { "Login" }
                    }
                }
            })
            .render()
    };

    Ok((jar, SuccessResponse::Success(page)))
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    password: String,
}

#[tracing::instrument(skip_all)]
pub async fn do_admin_login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> (PrivateCookieJar, Redirect) {
    if form.password == state.config.admin_password {
        (set_admin_cookie(jar), Redirect::to("/admin"))
    } else {
        tracing::warn!("failed admin login attempt");
        (
            set_notice(jar, "Wrong password."),
            Redirect::to("/admin"),
        )
    }
}

pub async fn do_admin_logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Redirect) {
    (clear_admin_cookie(jar), Redirect::to("/"))
}
