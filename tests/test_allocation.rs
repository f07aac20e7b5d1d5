use chain_booking::domain::id::{HolderName, RestaurantName};
use chain_booking::domain::restaurant::Restaurant;
use chain_booking::error::Error;

/// The capacity mix used throughout: two two-tops, two four-tops, one six-top.
fn bistro() -> Restaurant {
    Restaurant::new(RestaurantName::new("Italian Bistro"), &[2, 2, 4, 4, 6]).expect("valid capacities")
}

fn holder(name: &str) -> HolderName {
    HolderName::new(name)
}

#[test]
fn test_best_fit_selects_smallest_sufficient_table() {
    let restaurant = bistro();

    // A party of 3 must land on a four-top: the two-tops are too small and
    // the six-top wastes seats.
    let reservation = restaurant.reserve_table(3, holder("Alice")).unwrap();
    assert_eq!(reservation.table_id, 3);
    assert_eq!(reservation.party_size, 3);
    assert_eq!(reservation.restaurant_name, RestaurantName::new("Italian Bistro"));

    // Second party of 3 gets the other four-top, still not the six-top.
    let reservation = restaurant.reserve_table(3, holder("Bob")).unwrap();
    assert_eq!(reservation.table_id, 4);

    // Only now does a party of 3 spill onto the six-top.
    let reservation = restaurant.reserve_table(3, holder("Carol")).unwrap();
    assert_eq!(reservation.table_id, 5);
}

#[test]
fn test_tie_break_is_lowest_table_id_repeatably() {
    for _ in 0..10 {
        let restaurant = bistro();

        // Tables 1 and 2 both seat 2; the lower id must win every time.
        let reservation = restaurant.reserve_table(1, holder("Dana")).unwrap();
        assert_eq!(reservation.table_id, 1);

        let reservation = restaurant.reserve_table(1, holder("Eve")).unwrap();
        assert_eq!(reservation.table_id, 2);
    }
}

#[test]
fn test_oversized_party_mutates_nothing() {
    let restaurant = bistro();

    let result = restaurant.reserve_table(7, holder("Frank"));
    assert!(matches!(result, Err(Error::NoAvailableTable { party_size: 7, .. })), "Expected NoAvailableTable, got {:?}", result);

    // No table was touched by the failed attempt
    let snapshot = restaurant.describe();
    assert!(snapshot.tables.iter().all(|table| !table.occupied));
}

#[test]
fn test_invalid_party_size_is_rejected() {
    let restaurant = bistro();

    assert!(matches!(restaurant.reserve_table(0, holder("Grace")), Err(Error::InvalidPartySize(0))));
    assert!(matches!(restaurant.reserve_table(-4, holder("Grace")), Err(Error::InvalidPartySize(-4))));
    assert!(restaurant.describe().tables.iter().all(|table| !table.occupied));
}

#[test]
fn test_empty_holder_name_is_rejected() {
    let restaurant = bistro();

    let result = restaurant.reserve_table(2, holder(""));
    assert!(matches!(result, Err(Error::EmptyHolderName)), "Expected EmptyHolderName, got {:?}", result);
    assert!(restaurant.describe().tables.iter().all(|table| !table.occupied));
}

#[test]
fn test_exhausted_restaurant_has_no_availability_for_any_party() {
    let restaurant = Restaurant::new(RestaurantName::new("Tiny"), &[2, 4]).unwrap();
    restaurant.reserve_table(2, holder("A")).unwrap();
    restaurant.reserve_table(2, holder("B")).unwrap();

    for party_size in 1..=8 {
        assert!(!restaurant.has_available_tables(party_size));
        assert!(restaurant.available_tables_info(party_size).is_empty());
    }

    assert!(matches!(restaurant.reserve_table(1, holder("C")), Err(Error::NoAvailableTable { .. })));
}

#[test]
fn test_available_tables_info_order_matches_allocation_preference() {
    let restaurant = bistro();

    let info = restaurant.available_tables_info(3);
    assert_eq!(
        info.iter().map(|status| (status.capacity, status.id)).collect::<Vec<_>>(),
        vec![(4, 3), (4, 4), (6, 5)]
    );

    // The head of the listing is exactly what the allocator picks.
    let reservation = restaurant.reserve_table(3, holder("Heidi")).unwrap();
    assert_eq!(reservation.table_id, info[0].id);
}

#[test]
fn test_release_then_reserve_round_trip() {
    let restaurant = bistro();

    // Only the six-top seats a party of 5
    let first = restaurant.reserve_table(5, holder("Ivan")).unwrap();
    assert_eq!(first.table_id, 5);
    assert!(matches!(restaurant.reserve_table(5, holder("Judy")), Err(Error::NoAvailableTable { .. })));

    restaurant.release_table(first.table_id).unwrap();

    // The freed table is selectable again, for the same or a smaller party
    let second = restaurant.reserve_table(5, holder("Judy")).unwrap();
    assert_eq!(second.table_id, first.table_id);
    assert_ne!(second.confirmation, first.confirmation);
}
