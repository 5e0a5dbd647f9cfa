use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod admin;
pub mod create;
pub mod edit;
pub mod listing;
pub mod signup;

/// Wire and file format for dates.
pub const DATE_FMT: &str = "%Y-%m-%d";
/// Short format used everywhere dates are shown to people.
pub const DISPLAY_FMT: &str = "%d.%m.%y";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Tournament {
    /// Every day in the inclusive `start_date..=end_date` range.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// "01.06.25" for a one-day tournament, "01.06.25 – 02.06.25" otherwise.
    pub fn date_span(&self) -> String {
        let start = self.start_date.format(DISPLAY_FMT);
        if self.start_date == self.end_date {
            start.to_string()
        } else {
            format!("{start} – {}", self.end_date.format(DISPLAY_FMT))
        }
    }

    pub fn participant_mut(&mut self, name: &str) -> Option<&mut Participant> {
        let wanted = name.to_lowercase();
        self.participants
            .iter_mut()
            .find(|p| p.name.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match against name, location, or any
    /// participant name.
    pub fn matches_filter(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
            || self
                .participants
                .iter()
                .any(|p| p.name.to_lowercase().contains(&needle))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    /// Keyed by ISO date in the file; days absent from the map are [`Status::No`].
    #[serde(default)]
    pub statuses: BTreeMap<NaiveDate, Status>,
}

impl Participant {
    pub fn status_on(&self, day: NaiveDate) -> Status {
        self.statuses.get(&day).copied().unwrap_or(Status::No)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Attending,
    Interested,
    No,
}

impl Status {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "attending" => Some(Self::Attending),
            "interested" => Some(Self::Interested),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Attending => "✓",
            Self::Interested => "?",
            Self::No => "×",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Attending => "status-attending",
            Self::Interested => "status-interested",
            Self::No => "status-no",
        }
    }
}
