//! Default data used when nothing is stored yet and after a reset.

use chrono::{DateTime, Utc};
use common::{LayoutId, ShowId};
use domain::{Money, MovieShow, Row, ScreenSize, SeatType, TheaterLayout};

/// ID of the single seed show.
pub const SEED_SHOW_ID: &str = "demo-1";

/// ID of the seed show's layout.
pub const SEED_LAYOUT_ID: &str = "layout-1";

const SEED_POSTER_URL: &str = "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Returns the fixed seed show set, dated `now`.
///
/// One show on a medium screen: rows A-H of ten seats with aisles after
/// seats 3 and 7. A-B are VIP, C-E premium, F-H standard.
pub fn default_shows(now: DateTime<Utc>) -> Vec<MovieShow> {
    let rows = ["A", "B", "C", "D", "E", "F", "G", "H"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (seat_type, price) = match i {
                0..=1 => (SeatType::Vip, 350),
                2..=4 => (SeatType::Premium, 250),
                _ => (SeatType::Standard, 150),
            };
            Row::new(label, 10, seat_type, Money::from_units(price)).with_aisles_after([3, 7])
        })
        .collect();

    let layout = TheaterLayout::new(
        LayoutId::new(SEED_LAYOUT_ID),
        "Screen 1",
        ScreenSize::Medium,
        rows,
        now,
    );

    vec![MovieShow {
        id: ShowId::new(SEED_SHOW_ID),
        movie_name: "Avengers: Endgame".to_string(),
        theater_layout: layout,
        show_time: "7:00 PM".to_string(),
        show_date: now,
        language: "English".to_string(),
        genre: "Action".to_string(),
        poster_url: Some(SEED_POSTER_URL.to_string()),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SeatId;

    #[test]
    fn seed_has_one_medium_show() {
        let shows = default_shows(Utc::now());
        assert_eq!(shows.len(), 1);

        let show = &shows[0];
        assert_eq!(show.id.as_str(), SEED_SHOW_ID);
        assert_eq!(show.theater_layout.id().as_str(), SEED_LAYOUT_ID);
        assert_eq!(show.theater_layout.screen_size(), ScreenSize::Medium);
        assert_eq!(show.theater_layout.total_seats(), 80);
        assert_eq!(show.theater_layout.available_count(), 80);
    }

    #[test]
    fn seed_pricing_by_row() {
        let shows = default_shows(Utc::now());
        let layout = &shows[0].theater_layout;
        let price = |id: &str| layout.seat(&SeatId::from(id)).map(|seat| seat.price);

        assert_eq!(price("B5"), Some(Money::from_units(350)));
        assert_eq!(price("E5"), Some(Money::from_units(250)));
        assert_eq!(price("H10"), Some(Money::from_units(150)));
    }

    #[test]
    fn seed_aisles_after_three_and_seven() {
        let shows = default_shows(Utc::now());
        let aisles: Vec<u32> = shows[0]
            .theater_layout
            .seats()
            .iter()
            .filter(|seat| seat.row == "A" && seat.is_aisle)
            .map(|seat| seat.number)
            .collect();

        assert_eq!(aisles, vec![3, 7]);
    }
}
