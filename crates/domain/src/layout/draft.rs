//! Layout authoring.
//!
//! A [`LayoutDraft`] is the editable state behind a layout editor. It owns
//! the row list while it is being shaped and performs the checks a caller
//! must run before handing a new show to the ledger.

use chrono::{DateTime, Utc};
use common::{LayoutId, ShowId};

use super::{Row, ScreenSize, SeatType, TheaterLayout, generate_seats, row_label};
use crate::Money;
use crate::error::ValidationError;
use crate::show::MovieShow;

/// Rows seeded into a fresh draft, whatever the screen allows.
const DEFAULT_ROW_LIMIT: usize = 8;

/// Editable layout and show details.
#[derive(Debug, Clone)]
pub struct LayoutDraft {
    pub layout_name: String,
    pub movie_name: String,
    pub show_time: String,
    pub language: String,
    pub genre: String,
    pub poster_url: Option<String>,
    screen_size: ScreenSize,
    rows: Vec<Row>,
}

impl Default for LayoutDraft {
    fn default() -> Self {
        Self::for_screen(ScreenSize::default())
    }
}

impl LayoutDraft {
    /// Creates a draft seeded with the default rows for `screen_size`.
    pub fn for_screen(screen_size: ScreenSize) -> Self {
        Self {
            layout_name: String::new(),
            movie_name: String::new(),
            show_time: "19:00".to_string(),
            language: "English".to_string(),
            genre: "Action".to_string(),
            poster_url: None,
            screen_size,
            rows: default_rows(screen_size),
        }
    }

    pub fn screen_size(&self) -> ScreenSize {
        self.screen_size
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to a single row for editing its count, type, price or aisles.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Switches screen size and reseeds the default rows.
    pub fn set_screen_size(&mut self, screen_size: ScreenSize) {
        self.screen_size = screen_size;
        self.rows = default_rows(screen_size);
    }

    /// Appends a standard row while the screen has room for one.
    ///
    /// Returns true if a row was added.
    pub fn add_row(&mut self) -> bool {
        let config = self.screen_size.config();
        if self.rows.len() >= config.rows {
            return false;
        }
        let Some(label) = row_label(self.rows.len()) else {
            return false;
        };

        self.rows.push(
            Row::new(
                label,
                config.max_seats_per_row,
                SeatType::Standard,
                Money::from_units(150),
            )
            .with_aisles_after(self.screen_size.default_aisles()),
        );
        true
    }

    /// Removes the row at `index` and relabels the remaining rows from `A`.
    ///
    /// Returns the removed row, or `None` if `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);

        for (i, row) in self.rows.iter_mut().enumerate() {
            if let Some(label) = row_label(i) {
                row.label = label;
            }
        }
        Some(removed)
    }

    pub fn total_seats(&self) -> u32 {
        self.rows.iter().map(|row| row.seat_count).sum()
    }

    /// Seats the current rows would generate.
    pub fn preview(&self) -> Vec<super::Seat> {
        generate_seats(&self.rows)
    }

    /// Checks the draft is complete enough to become a show.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.layout_name.trim().is_empty() {
            return Err(ValidationError::EmptyLayoutName);
        }
        if self.movie_name.trim().is_empty() {
            return Err(ValidationError::EmptyMovieName);
        }
        if self.rows.is_empty() {
            return Err(ValidationError::NoRows);
        }
        Ok(())
    }

    /// Validates the draft and builds the show it describes.
    pub fn build_show(&self, now: DateTime<Utc>) -> Result<MovieShow, ValidationError> {
        self.validate()?;

        let layout = TheaterLayout::new(
            LayoutId::generate(),
            self.layout_name.trim(),
            self.screen_size,
            self.rows.clone(),
            now,
        );

        Ok(MovieShow {
            id: ShowId::generate(),
            movie_name: self.movie_name.trim().to_string(),
            theater_layout: layout,
            show_time: self.show_time.clone(),
            show_date: now,
            language: self.language.clone(),
            genre: self.genre.clone(),
            poster_url: self.poster_url.clone(),
        })
    }
}

/// Default rows for a screen: VIP front rows, then premium, then standard.
fn default_rows(screen_size: ScreenSize) -> Vec<Row> {
    let config = screen_size.config();
    let count = config.rows.min(DEFAULT_ROW_LIMIT);

    (0..count)
        .filter_map(|i| {
            let (seat_type, price) = match i {
                0..=1 => (SeatType::Vip, 350),
                2..=4 => (SeatType::Premium, 250),
                _ => (SeatType::Standard, 150),
            };
            let label = row_label(i)?;
            Some(
                Row::new(
                    label,
                    config.max_seats_per_row,
                    seat_type,
                    Money::from_units(price),
                )
                .with_aisles_after(screen_size.default_aisles()),
            )
        })
        .collect()
}

/// Parses a comma-separated aisle list such as `"3, 7"`.
///
/// Each trimmed entry must be a whole non-negative integer or it is dropped.
/// There is no prefix parsing: `"3x"` and `"7.5"` are dropped, not read as
/// 3 and 7.
pub fn parse_aisle_after(input: &str) -> Vec<u32> {
    input
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

/// Formats an aisle list as `"3, 7"`.
pub fn format_aisle_after(aisle_after: &[u32]) -> String {
    aisle_after
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
