//! Property-based tests for seat generation.
//!
//! # Properties Tested
//!
//! 1. **Count**: generated seat count equals the sum of row seat counts
//! 2. **Identity**: ids are unique and equal `label + number`
//! 3. **Aisles**: a seat is an aisle seat iff its number is in the row's aisle list
//! 4. **Determinism**: the same rows always give the same seats
//! 5. **Consistency**: a freshly built layout passes its own consistency check

use std::collections::HashSet;

use chrono::Utc;
use common::LayoutId;
use domain::layout::row_label;
use domain::{Money, Row, ScreenSize, SeatStatus, SeatType, TheaterLayout, generate_seats};
use proptest::prelude::*;

fn arb_seat_type() -> impl Strategy<Value = SeatType> {
    prop_oneof![
        Just(SeatType::Standard),
        Just(SeatType::Premium),
        Just(SeatType::Vip),
        Just(SeatType::Recliner),
    ]
}

/// Up to 26 rows labeled A.. in order, each with up to 20 seats.
fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            0u32..20,
            arb_seat_type(),
            0i64..1000,
            prop::collection::vec(0u32..25, 0..4),
        ),
        0..26,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .filter_map(|(i, (count, seat_type, price, aisles))| {
                let label = row_label(i)?;
                Some(
                    Row::new(label, count, seat_type, Money::from_units(price))
                        .with_aisles_after(aisles),
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_seat_count_matches_rows(rows in arb_rows()) {
        let expected: u32 = rows.iter().map(|row| row.seat_count).sum();
        prop_assert_eq!(generate_seats(&rows).len(), expected as usize);
    }

    #[test]
    fn prop_ids_unique_and_derived(rows in arb_rows()) {
        let seats = generate_seats(&rows);
        let unique: HashSet<_> = seats.iter().map(|seat| seat.id.clone()).collect();
        prop_assert_eq!(unique.len(), seats.len());

        for seat in &seats {
            prop_assert_eq!(seat.id.to_string(), format!("{}{}", seat.row, seat.number));
        }
    }

    #[test]
    fn prop_aisle_flag_matches_row_spec(rows in arb_rows()) {
        for seat in generate_seats(&rows) {
            let row = rows.iter().find(|row| row.label == seat.row).unwrap();
            prop_assert_eq!(seat.is_aisle, row.aisle_after.contains(&seat.number));
        }
    }

    #[test]
    fn prop_all_seats_start_available(rows in arb_rows()) {
        prop_assert!(generate_seats(&rows).iter().all(|seat| seat.status == SeatStatus::Available));
    }

    #[test]
    fn prop_generation_is_deterministic(rows in arb_rows()) {
        prop_assert_eq!(generate_seats(&rows), generate_seats(&rows));
    }

    #[test]
    fn prop_new_layout_is_consistent(rows in arb_rows()) {
        let layout = TheaterLayout::new(
            LayoutId::new("layout-prop"),
            "Prop",
            ScreenSize::Large,
            rows,
            Utc::now(),
        );
        prop_assert!(layout.is_consistent());
    }
}
