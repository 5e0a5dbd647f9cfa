//! One-shot notices shown after a redirect.
//!
//! The message rides in the private cookie jar so its value is already
//! armored for the header; page handlers take it out again on render.

use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};

pub const NOTICE_COOKIE: &str = "notice";

pub fn set_notice(jar: PrivateCookieJar, msg: &str) -> PrivateCookieJar {
    jar.add(Cookie::build((NOTICE_COOKIE, msg.to_string())).path("/"))
}

/// Removes the notice from the jar. The returned jar must make it into the
/// response or the message shows again on the next page.
pub fn take_notice(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<String>) {
    match jar.get(NOTICE_COOKIE) {
        Some(cookie) => {
            let msg = cookie.value().to_string();
            (
                jar.remove(Cookie::build(NOTICE_COOKIE).path("/")),
                Some(msg),
            )
        }
        None => (jar, None),
    }
}
