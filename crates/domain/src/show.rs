//! Scheduled shows.

use chrono::{DateTime, Utc};
use common::{LayoutId, ShowId};
use serde::{Deserialize, Serialize};

use crate::layout::TheaterLayout;

/// A scheduled screening. Each show owns its own copy of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieShow {
    pub id: ShowId,
    pub movie_name: String,
    pub theater_layout: TheaterLayout,
    /// Free-form time of day, e.g. `7:00 PM`.
    pub show_time: String,
    pub show_date: DateTime<Utc>,
    pub language: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl MovieShow {
    /// Returns a copy under a new show ID whose layout has a new ID and no bookings.
    pub fn duplicate(&self, id: ShowId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            theater_layout: self.theater_layout.duplicate(LayoutId::generate(), now),
            ..self.clone()
        }
    }
}

/// Fields to merge into an existing show. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShowUpdate {
    pub movie_name: Option<String>,
    pub theater_layout: Option<TheaterLayout>,
    pub show_time: Option<String>,
    pub show_date: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub genre: Option<String>,
    /// `Some(None)` clears the poster.
    pub poster_url: Option<Option<String>>,
}

impl ShowUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie_name(mut self, movie_name: impl Into<String>) -> Self {
        self.movie_name = Some(movie_name.into());
        self
    }

    pub fn theater_layout(mut self, layout: TheaterLayout) -> Self {
        self.theater_layout = Some(layout);
        self
    }

    pub fn show_time(mut self, show_time: impl Into<String>) -> Self {
        self.show_time = Some(show_time.into());
        self
    }

    pub fn show_date(mut self, show_date: DateTime<Utc>) -> Self {
        self.show_date = Some(show_date);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn poster_url(mut self, poster_url: Option<String>) -> Self {
        self.poster_url = Some(poster_url);
        self
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.movie_name.is_none()
            && self.theater_layout.is_none()
            && self.show_time.is_none()
            && self.show_date.is_none()
            && self.language.is_none()
            && self.genre.is_none()
            && self.poster_url.is_none()
    }

    /// Merges the provided fields into `show`.
    pub fn apply_to(self, show: &mut MovieShow) {
        if let Some(movie_name) = self.movie_name {
            show.movie_name = movie_name;
        }
        if let Some(layout) = self.theater_layout {
            show.theater_layout = layout;
        }
        if let Some(show_time) = self.show_time {
            show.show_time = show_time;
        }
        if let Some(show_date) = self.show_date {
            show.show_date = show_date;
        }
        if let Some(language) = self.language {
            show.language = language;
        }
        if let Some(genre) = self.genre {
            show.genre = genre;
        }
        if let Some(poster_url) = self.poster_url {
            show.poster_url = poster_url;
        }
    }
}
