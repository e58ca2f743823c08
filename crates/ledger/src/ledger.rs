//! The booking ledger: shows, bookings and the seat-reservation transition.

use chrono::Utc;
use common::{SeatId, ShowId};
use domain::{Booking, MovieShow, ShowUpdate, TheaterLayout};
use serde::Serialize;
use store::KeyValueStore;
use tokio::sync::watch;

use crate::config::LedgerConfig;
use crate::seed::default_shows;
use crate::{LedgerError, Result, codec};

/// State container for shows and bookings.
///
/// The ledger owns both collections and is the only place seats move from
/// available to booked. Every mutation builds the new collection, writes it
/// to the store, then publishes it to subscribers. Store failures are
/// logged and never surface to callers; the in-memory state stays
/// authoritative for the rest of the session.
///
/// All operations are synchronous and take `&mut self`, so each one is
/// atomic from the caller's point of view.
pub struct BookingLedger<S: KeyValueStore> {
    store: S,
    config: LedgerConfig,
    shows: Vec<MovieShow>,
    bookings: Vec<Booking>,
    shows_tx: watch::Sender<Vec<MovieShow>>,
    bookings_tx: watch::Sender<Vec<Booking>>,
}

impl<S: KeyValueStore> BookingLedger<S> {
    /// Opens a ledger over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self::open(store, LedgerConfig::default())
    }

    /// Opens a ledger over `store`, loading both collections.
    ///
    /// Missing or unreadable shows fall back to the seed set; missing or
    /// unreadable bookings fall back to an empty list.
    #[tracing::instrument(skip(store, config), fields(shows_key = %config.shows_key))]
    pub fn open(store: S, config: LedgerConfig) -> Self {
        let shows = load_or_else(&store, &config.shows_key, || default_shows(Utc::now()));
        let bookings = load_or_else(&store, &config.bookings_key, Vec::new);

        tracing::info!(
            shows = shows.len(),
            bookings = bookings.len(),
            "ledger opened"
        );

        let (shows_tx, _) = watch::channel(shows.clone());
        let (bookings_tx, _) = watch::channel(bookings.clone());

        Self {
            store,
            config,
            shows,
            bookings,
            shows_tx,
            bookings_tx,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

// Subscriptions
impl<S: KeyValueStore> BookingLedger<S> {
    /// Subscribes to the show collection.
    ///
    /// The receiver holds the current collection immediately and sees every
    /// later change.
    pub fn subscribe_shows(&self) -> watch::Receiver<Vec<MovieShow>> {
        self.shows_tx.subscribe()
    }

    /// Subscribes to the booking collection.
    pub fn subscribe_bookings(&self) -> watch::Receiver<Vec<Booking>> {
        self.bookings_tx.subscribe()
    }
}

// Show methods
impl<S: KeyValueStore> BookingLedger<S> {
    pub fn shows(&self) -> &[MovieShow] {
        &self.shows
    }

    pub fn show(&self, id: &ShowId) -> Option<&MovieShow> {
        self.shows.iter().find(|show| &show.id == id)
    }

    /// Appends a show. IDs are not checked for uniqueness.
    #[tracing::instrument(skip(self, show), fields(show_id = %show.id))]
    pub fn add_show(&mut self, show: MovieShow) {
        let mut shows = self.shows.clone();
        shows.push(show);
        self.commit_shows(shows);
    }

    /// Merges `update` into the show with `id`.
    ///
    /// Returns false, changing nothing, if no show has that ID.
    #[tracing::instrument(skip(self, update))]
    pub fn update_show(&mut self, id: &ShowId, update: ShowUpdate) -> bool {
        let Some(index) = self.shows.iter().position(|show| &show.id == id) else {
            tracing::debug!("update ignored, show not found");
            return false;
        };

        let mut shows = self.shows.clone();
        update.apply_to(&mut shows[index]);
        self.commit_shows(shows);
        true
    }

    /// Removes the show with `id` and returns it.
    ///
    /// Bookings made against the show are kept.
    #[tracing::instrument(skip(self))]
    pub fn delete_show(&mut self, id: &ShowId) -> Option<MovieShow> {
        let index = self.shows.iter().position(|show| &show.id == id)?;

        let mut shows = self.shows.clone();
        let removed = shows.remove(index);
        self.commit_shows(shows);

        let orphaned = self.bookings.iter().filter(|b| &b.show_id == id).count();
        if orphaned > 0 {
            tracing::info!(orphaned, "show deleted, its bookings are kept");
        }
        Some(removed)
    }

    /// Copies a show under a new ID with every seat available.
    ///
    /// Returns the new show's ID, or `None` if the source doesn't exist.
    #[tracing::instrument(skip(self))]
    pub fn duplicate_show(&mut self, id: &ShowId) -> Option<ShowId> {
        let copy = self.show(id)?.duplicate(ShowId::generate(), Utc::now());
        let new_id = copy.id.clone();
        self.add_show(copy);
        Some(new_id)
    }

    /// Wraps `layout` in a placeholder show and adds it.
    ///
    /// Seats are regenerated from the layout's rows, all available. The
    /// placeholder's details come from [`LedgerConfig::placeholder`].
    #[tracing::instrument(skip(self, layout), fields(layout_id = %layout.id()))]
    pub fn create_theater_layout(&mut self, mut layout: TheaterLayout) -> ShowId {
        layout.release_all();

        let placeholder = &self.config.placeholder;
        let show = MovieShow {
            id: ShowId::generate(),
            movie_name: placeholder.movie_name.clone(),
            theater_layout: layout,
            show_time: placeholder.show_time.clone(),
            show_date: Utc::now(),
            language: placeholder.language.clone(),
            genre: placeholder.genre.clone(),
            poster_url: None,
        };

        let id = show.id.clone();
        self.add_show(show);
        id
    }
}

// Booking methods
impl<S: KeyValueStore> BookingLedger<S> {
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the bookings made against `show_id`, oldest first.
    pub fn bookings_by_show(&self, show_id: &ShowId) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| &booking.show_id == show_id)
            .collect()
    }

    /// Books `seat_ids` on the show with `show_id`.
    ///
    /// Every seat in the show's layout whose ID is listed becomes booked,
    /// including seats that were booked already; unknown IDs are ignored.
    /// The booking records the matched seats and their stored prices.
    ///
    /// Fails with [`LedgerError::ShowNotFound`] without touching either
    /// collection when the show doesn't exist.
    #[tracing::instrument(skip(self, seat_ids), fields(seats = seat_ids.len()))]
    pub fn book_seats(&mut self, show_id: &ShowId, seat_ids: &[SeatId]) -> Result<Booking> {
        let index = self
            .shows
            .iter()
            .position(|show| &show.id == show_id)
            .ok_or_else(|| LedgerError::ShowNotFound(show_id.clone()))?;

        let mut shows = self.shows.clone();
        let show = &mut shows[index];
        let booked = show.theater_layout.mark_booked(seat_ids);
        let booking = Booking::for_show(show, booked, Utc::now());
        self.commit_shows(shows);

        let mut bookings = self.bookings.clone();
        bookings.push(booking.clone());
        self.commit_bookings(bookings);

        metrics::counter!("ledger_bookings_created").increment(1);
        metrics::counter!("ledger_seats_booked").increment(booking.seat_count() as u64);
        tracing::info!(
            booking_id = %booking.id,
            seats = booking.seat_count(),
            total = %booking.total_price,
            "seats booked"
        );

        Ok(booking)
    }
}

// Reset
impl<S: KeyValueStore> BookingLedger<S> {
    /// Drops everything stored and resets to the seed shows and no bookings.
    #[tracing::instrument(skip(self))]
    pub fn clear_all_data(&mut self) {
        for key in [&self.config.shows_key, &self.config.bookings_key] {
            if let Err(error) = self.store.remove(key) {
                metrics::counter!("ledger_persistence_failures").increment(1);
                tracing::error!(%error, key = %key, "failed to remove stored collection");
            }
        }

        self.shows = default_shows(Utc::now());
        self.bookings = Vec::new();
        self.shows_tx.send_replace(self.shows.clone());
        self.bookings_tx.send_replace(self.bookings.clone());

        tracing::info!("ledger reset to defaults");
    }
}

// Persistence
impl<S: KeyValueStore> BookingLedger<S> {
    fn commit_shows(&mut self, shows: Vec<MovieShow>) {
        persist(&self.store, &self.config.shows_key, &shows);
        self.shows = shows;
        self.shows_tx.send_replace(self.shows.clone());
    }

    fn commit_bookings(&mut self, bookings: Vec<Booking>) {
        persist(&self.store, &self.config.bookings_key, &bookings);
        self.bookings = bookings;
        self.bookings_tx.send_replace(self.bookings.clone());
    }
}

/// Loads the collection under `key`, or `fallback()` if it is missing or unreadable.
fn load_or_else<S, T>(store: &S, key: &str, fallback: impl FnOnce() -> Vec<T>) -> Vec<T>
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned,
{
    match codec::load(store, key) {
        Ok(Some(items)) => items,
        Ok(None) => {
            tracing::debug!(key, "nothing stored, using defaults");
            fallback()
        }
        Err(error) => {
            metrics::counter!("ledger_persistence_failures").increment(1);
            tracing::error!(%error, key, "failed to load stored collection, using defaults");
            fallback()
        }
    }
}

/// Writes the collection under `key`, logging instead of failing.
fn persist<S, T>(store: &S, key: &str, items: &[T])
where
    S: KeyValueStore,
    T: Serialize,
{
    if let Err(error) = codec::save(store, key, items) {
        metrics::counter!("ledger_persistence_failures").increment(1);
        tracing::error!(%error, key, "failed to save collection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SEED_SHOW_ID;
    use domain::{Money, Row, ScreenSize, SeatStatus, SeatType};
    use store::InMemoryStore;

    fn seat_ids(ids: &[&str]) -> Vec<SeatId> {
        ids.iter().map(|id| SeatId::from(*id)).collect()
    }

    fn seed_id() -> ShowId {
        ShowId::new(SEED_SHOW_ID)
    }

    fn layout() -> TheaterLayout {
        TheaterLayout::new(
            common::LayoutId::new("layout-test"),
            "Test Screen",
            ScreenSize::Small,
            vec![Row::new("A", 2, SeatType::Standard, Money::from_units(100))],
            Utc::now(),
        )
    }

    #[test]
    fn opens_with_seed_when_store_is_empty() {
        let ledger = BookingLedger::new(InMemoryStore::new());
        assert_eq!(ledger.shows().len(), 1);
        assert_eq!(ledger.shows()[0].id, seed_id());
        assert!(ledger.bookings().is_empty());
    }

    #[test]
    fn book_seats_marks_only_requested_seats() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        ledger.book_seats(&seed_id(), &seat_ids(&["A1", "A2"])).unwrap();

        let layout = &ledger.show(&seed_id()).unwrap().theater_layout;
        assert_eq!(layout.booked_count(), 2);
        for seat in layout.seats() {
            let expected = if ["A1", "A2"].contains(&seat.id.as_str()) {
                SeatStatus::Booked
            } else {
                SeatStatus::Available
            };
            assert_eq!(seat.status, expected, "seat {}", seat.id);
        }
    }

    #[test]
    fn book_seats_unknown_show_changes_nothing() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        let before = ledger.shows().to_vec();

        let result = ledger.book_seats(&ShowId::new("missing"), &seat_ids(&["A1"]));

        assert!(matches!(result, Err(LedgerError::ShowNotFound(_))));
        assert_eq!(ledger.shows(), before.as_slice());
        assert!(ledger.bookings().is_empty());
    }

    #[test]
    fn rebooking_a_booked_seat_is_not_a_conflict() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        ledger.book_seats(&seed_id(), &seat_ids(&["C3"])).unwrap();
        let again = ledger.book_seats(&seed_id(), &seat_ids(&["C3"])).unwrap();

        assert_eq!(again.seat_count(), 1);
        assert_eq!(ledger.bookings().len(), 2);
        assert_eq!(ledger.show(&seed_id()).unwrap().theater_layout.booked_count(), 1);
    }

    #[test]
    fn unknown_seat_ids_are_ignored() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        let booking = ledger
            .book_seats(&seed_id(), &seat_ids(&["A1", "Z99"]))
            .unwrap();

        assert_eq!(booking.seat_count(), 1);
        assert_eq!(booking.total_price, Money::from_units(350));
    }

    #[test]
    fn update_show_merges_fields() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        assert!(ledger.update_show(&seed_id(), ShowUpdate::new().show_time("9:00 PM")));

        let show = ledger.show(&seed_id()).unwrap();
        assert_eq!(show.show_time, "9:00 PM");
        assert_eq!(show.movie_name, "Avengers: Endgame");
    }

    #[test]
    fn update_missing_show_is_noop() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        let before = ledger.shows().to_vec();

        assert!(!ledger.update_show(&ShowId::new("missing"), ShowUpdate::new().genre("Drama")));
        assert_eq!(ledger.shows(), before.as_slice());
    }

    #[test]
    fn delete_show_keeps_bookings() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        ledger.book_seats(&seed_id(), &seat_ids(&["A1"])).unwrap();

        let removed = ledger.delete_show(&seed_id()).unwrap();

        assert_eq!(removed.id, seed_id());
        assert!(ledger.shows().is_empty());
        assert_eq!(ledger.bookings_by_show(&seed_id()).len(), 1);
        assert!(ledger.delete_show(&seed_id()).is_none());
    }

    #[test]
    fn create_theater_layout_adds_placeholder_show() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        let mut layout = layout();
        layout.mark_booked(&seat_ids(&["A1"]));

        let id = ledger.create_theater_layout(layout);
        let show = ledger.show(&id).unwrap();

        assert_eq!(show.movie_name, "Demo Movie");
        assert_eq!(show.show_time, "7:00 PM");
        assert_eq!(show.theater_layout.total_seats(), 2);
        assert_eq!(show.theater_layout.available_count(), 2);
        assert_eq!(ledger.shows().len(), 2);
    }

    #[test]
    fn duplicate_show_starts_fresh() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        ledger.book_seats(&seed_id(), &seat_ids(&["A1"])).unwrap();

        let copy_id = ledger.duplicate_show(&seed_id()).unwrap();
        let copy = ledger.show(&copy_id).unwrap();

        assert_ne!(copy_id, seed_id());
        assert_eq!(copy.movie_name, "Avengers: Endgame");
        assert_eq!(copy.theater_layout.booked_count(), 0);
        assert!(ledger.duplicate_show(&ShowId::new("missing")).is_none());
    }

    #[test]
    fn bookings_by_show_in_insertion_order() {
        let mut ledger = BookingLedger::new(InMemoryStore::new());
        let other = ledger.create_theater_layout(layout());

        let first = ledger.book_seats(&seed_id(), &seat_ids(&["A1"])).unwrap();
        ledger.book_seats(&other, &seat_ids(&["A1"])).unwrap();
        let second = ledger.book_seats(&seed_id(), &seat_ids(&["B1"])).unwrap();

        let ids: Vec<_> = ledger
            .bookings_by_show(&seed_id())
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn mutations_are_persisted() {
        let store = InMemoryStore::new();
        let mut ledger = BookingLedger::new(store.clone());
        ledger.book_seats(&seed_id(), &seat_ids(&["A1"])).unwrap();

        let config = LedgerConfig::default();
        assert!(store.get(&config.shows_key).unwrap().is_some());
        assert!(store.get(&config.bookings_key).unwrap().is_some());
    }
}
