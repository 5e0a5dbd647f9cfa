//! Templating code.
//!
//! This defines the [`Page`] item, which wraps every rendered view in the
//! shared chrome (header, tabs, filter box, flash notice).

use hypertext::prelude::*;

use crate::widgets::alert::NoticeAlert;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Upcoming,
    Archive,
    Calendar,
    Admin,
}

impl Tab {
    fn class_for(self, tab: Tab) -> &'static str {
        if self == tab { "active" } else { "" }
    }
}

pub struct Page<R: Renderable> {
    body: Option<R>,
    notice: Option<String>,
    filter: Option<String>,
    player_names: Vec<String>,
    tab: Tab,
}

impl<R: Renderable> Page<R> {
    pub fn new() -> Self {
        Self {
            body: None,
            notice: None,
            filter: None,
            player_names: Vec::new(),
            tab: Tab::Upcoming,
        }
    }

    pub fn body(mut self, body: R) -> Self {
        self.body = Some(body);
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }

    pub fn notice_opt(mut self, notice: Option<String>) -> Self {
        self.notice = notice;
        self
    }

    pub fn filter_opt(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    /// Feeds the datalist that autocompletes the signup name input.
    pub fn player_names(mut self, names: Vec<String>) -> Self {
        self.player_names = names;
        self
    }
}

impl<R: Renderable> Renderable for Page<R> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Tournament sign-up" }
                    link rel="stylesheet" href="/static/style.css";
                    script src="/static/app.js" defer {}
                }
                body {
                    header {
                        h1 class="headline" { "Tournament sign-up" }
                    }
                    nav class="tabs" {
                        a href="/" class=(self.tab.class_for(Tab::Upcoming)) { "Upcoming" }
                        a href="/archive" class=(self.tab.class_for(Tab::Archive)) { "Archive" }
                        a href="/calendar" class=(self.tab.class_for(Tab::Calendar)) { "Calendar" }
                        a href="/admin" class=(self.tab.class_for(Tab::Admin)) { "Admin" }
                        @if matches!(self.tab, Tab::Upcoming | Tab::Archive) {
                            form class="filter-form" method="post" action="/filter" {
                                input type="text"
                                      name="filter"
                                      placeholder="Filter by name, place, player"
                                      value=(self.filter.as_deref().unwrap_or(""));
                                button class="btn-primary" type="submit" { "Filter" }
                                @if self.filter.is_some() {
                                    button class="btn-primary"
                                           type="submit"
                                           name="clear"
                                           value="1" { "Clear" }
                                }
                            }
                        }
                    }
                    @if let Some(notice) = &self.notice {
                        NoticeAlert msg=(notice);
                    }
                    @if !self.player_names.is_empty() {
                        datalist id="player_names" {
                            @for name in &self.player_names {
                                option value=(name) {}
                            }
                        }
                    }
                    @if let Some(body) = &self.body {
                        (body)
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

impl<R: Renderable> Default for Page<R> {
    fn default() -> Self {
        Self::new()
    }
}
