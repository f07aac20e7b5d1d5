/// Unit tests for the table state machine and the best-fit scan in
/// `restaurant.rs`. These complement the integration-style tests under
/// `tests/`, which drive the same logic through the `Chain`.
#[cfg(test)]
mod tests {
    use crate::domain::id::{HolderName, RestaurantName};
    use crate::domain::restaurant::Restaurant;
    use crate::domain::table::Table;
    use crate::error::Error;

    fn holder(name: &str) -> HolderName {
        HolderName::new(name)
    }

    #[test]
    fn test_table_fits_respects_capacity_and_occupancy() {
        let mut table = Table::new(1, 4);
        assert!(table.fits(1));
        assert!(table.fits(4));
        assert!(!table.fits(5));

        table.occupy().unwrap();
        assert!(!table.fits(1));
    }

    #[test]
    fn test_table_occupy_twice_fails() {
        let mut table = Table::new(7, 2);
        table.occupy().unwrap();

        assert!(matches!(table.occupy(), Err(Error::AlreadyOccupied(7))));
        assert!(table.is_occupied());
    }

    #[test]
    fn test_table_release_is_idempotent() {
        let mut table = Table::new(3, 2);

        // Releasing a free table changes nothing
        assert!(!table.release());

        table.occupy().unwrap();
        assert!(table.release());
        assert!(!table.release());
        assert!(table.fits(2));
    }

    #[test]
    fn test_invalid_capacity_is_rejected_at_construction() {
        let result = Restaurant::new(RestaurantName::new("Broken"), &[4, 0]);
        assert!(matches!(result, Err(Error::InvalidTableCapacity { table_id: 2, capacity: 0, .. })));

        let result = Restaurant::new(RestaurantName::new("Broken"), &[-3]);
        assert!(matches!(result, Err(Error::InvalidTableCapacity { table_id: 1, capacity: -3, .. })));
    }

    #[test]
    fn test_best_fit_prefers_smallest_sufficient_capacity() {
        let restaurant = Restaurant::new(RestaurantName::new("Mixed"), &[6, 2, 4]).unwrap();

        // A party of 3: table 3 (seats 4) beats table 1 (seats 6)
        let reservation = restaurant.reserve_table(3, holder("A")).unwrap();
        assert_eq!(reservation.table_id, 3);

        // The next party of 3 falls back to the capacity-6 table
        let reservation = restaurant.reserve_table(3, holder("B")).unwrap();
        assert_eq!(reservation.table_id, 1);
    }

    #[test]
    fn test_describe_reflects_current_state() {
        let restaurant = Restaurant::new(RestaurantName::new("Live"), &[2, 4]).unwrap();
        assert!(restaurant.describe().tables.iter().all(|table| !table.occupied));

        let reservation = restaurant.reserve_table(2, holder("C")).unwrap();

        let snapshot = restaurant.describe();
        let occupied: Vec<_> = snapshot.tables.iter().filter(|table| table.occupied).map(|table| table.id).collect();
        assert_eq!(occupied, vec![reservation.table_id]);

        restaurant.release_table(reservation.table_id).unwrap();
        assert!(restaurant.describe().tables.iter().all(|table| !table.occupied));
    }

    #[test]
    fn test_release_of_free_or_unknown_table_is_reported() {
        let restaurant = Restaurant::new(RestaurantName::new("Strict"), &[2]).unwrap();

        assert!(matches!(restaurant.release_table(1), Err(Error::NotOccupied(1))));
        assert!(matches!(restaurant.release_table(99), Err(Error::NotOccupied(99))));
    }
}
