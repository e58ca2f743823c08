//! Ledger configuration loaded from environment variables.

/// Details given to the placeholder show wrapped around a bare layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderShow {
    pub movie_name: String,
    pub show_time: String,
    pub language: String,
    pub genre: String,
}

impl Default for PlaceholderShow {
    fn default() -> Self {
        Self {
            movie_name: "Demo Movie".to_string(),
            show_time: "7:00 PM".to_string(),
            language: "English".to_string(),
            genre: "Action".to_string(),
        }
    }
}

/// Ledger configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `BOOKIT_SHOWS_KEY`: store key for the show collection (default: `"bookit_shows"`)
/// - `BOOKIT_BOOKINGS_KEY`: store key for the booking collection (default: `"bookit_bookings"`)
/// - `BOOKIT_PLACEHOLDER_MOVIE`: movie name for placeholder shows (default: `"Demo Movie"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub shows_key: String,
    pub bookings_key: String,
    pub placeholder: PlaceholderShow,
}

impl LedgerConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or blank values. Values are trimmed, since store keys may
    /// not carry surrounding whitespace.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(key) = read("BOOKIT_SHOWS_KEY") {
            config.shows_key = key;
        }
        if let Some(key) = read("BOOKIT_BOOKINGS_KEY") {
            config.bookings_key = key;
        }
        if let Some(movie_name) = read("BOOKIT_PLACEHOLDER_MOVIE") {
            config.placeholder.movie_name = movie_name;
        }

        config
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            shows_key: "bookit_shows".to_string(),
            bookings_key: "bookit_bookings".to_string(),
            placeholder: PlaceholderShow::default(),
        }
    }
}
