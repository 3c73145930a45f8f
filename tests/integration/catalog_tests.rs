//! Catalog scenarios and invariants through the public API

use library_of_stuff::{
    config::{AppConfig, ItemSeed, LendingConfig, SeedConfig, UserSeed},
    models::{Item, ItemFilter},
    services::{Catalog, UserSelection},
    AppError,
};

fn seeded() -> Catalog {
    Catalog::from_config(&AppConfig::default()).expect("default seed is valid")
}

/// Items as (id, available, borrower), users as (id, points, held)
type State = (Vec<(String, bool, Option<String>)>, Vec<(String, u32, Vec<String>)>);

fn state(catalog: &Catalog) -> State {
    let items = catalog
        .list_items()
        .into_iter()
        .map(|i| (i.id().to_string(), i.is_available(), i.borrower().map(str::to_string)))
        .collect();
    let users = catalog
        .list_users()
        .into_iter()
        .map(|u| {
            (
                u.id().to_string(),
                u.loyalty_points(),
                u.held_items().map(str::to_string).collect(),
            )
        })
        .collect();
    (items, users)
}

fn assert_availability_matches_borrower(catalog: &Catalog) {
    for item in catalog.list_items() {
        assert_eq!(!item.is_available(), item.borrower().is_some(), "item {}", item.id());
    }
    catalog.verify_integrity().expect("catalog is consistent");
}

#[test]
fn test_borrow_and_return_scenario() {
    let mut catalog = seeded();
    assert!(catalog.get_item("WT001").unwrap().is_available());

    let item = catalog.borrow_item("WT001", "U001").unwrap();
    assert!(!item.is_available());
    assert_eq!(catalog.get_user("U001").unwrap().loyalty_points(), 10);
    assert_availability_matches_borrower(&catalog);

    let before = state(&catalog);
    let result = catalog.borrow_item("WT001", "U002");
    assert!(matches!(result, Err(AppError::ItemUnavailable(_))));
    assert_eq!(state(&catalog), before);

    catalog.return_item("WT001", "U001").unwrap();
    assert!(catalog.get_item("WT001").unwrap().is_available());
    assert_eq!(catalog.get_user("U001").unwrap().held_count(), 0);
    assert_availability_matches_borrower(&catalog);
}

#[test]
fn test_borrow_unknown_item_changes_nothing() {
    let mut catalog = seeded();
    let before = state(&catalog);

    let result = catalog.borrow_item("BAD_ID", "U001");
    assert!(matches!(result, Err(AppError::ItemNotFound(id)) if id == "BAD_ID"));
    assert_eq!(state(&catalog), before);
}

#[test]
fn test_return_available_item_changes_nothing() {
    let mut catalog = seeded();
    catalog.borrow_item("KA001", "U003").unwrap();
    let before = state(&catalog);

    let result = catalog.return_item("GT001", "U003");
    assert!(matches!(result, Err(AppError::ItemNotOnLoan(_))));
    assert_eq!(state(&catalog), before);

    let result = catalog.return_item("NOPE", "U003");
    assert!(matches!(result, Err(AppError::ItemNotFound(_))));
    assert_eq!(state(&catalog), before);
}

#[test]
fn test_return_by_unknown_user_changes_nothing() {
    let mut catalog = seeded();
    catalog.borrow_item("KA001", "U002").unwrap();

    let before = state(&catalog);
    let result = catalog.return_item("KA001", "NOBODY");
    assert!(matches!(result, Err(AppError::UserNotFound(_))));
    assert_eq!(state(&catalog), before);
    assert_availability_matches_borrower(&catalog);
}

#[test]
fn test_round_trip_restores_item_and_keeps_points() {
    let mut catalog = seeded();

    for round in 1..=3u32 {
        let before = state(&catalog);
        catalog.borrow_item("GT001", "U002").unwrap();
        catalog.return_item("GT001", "U002").unwrap();
        let after = state(&catalog);

        // items are back to where they started
        assert_eq!(after.0, before.0);
        assert_eq!(catalog.get_user("U002").unwrap().loyalty_points(), 10 * round);
        assert_availability_matches_borrower(&catalog);
    }
}

#[test]
fn test_item_held_by_one_user_at_a_time() {
    let mut catalog = seeded();
    catalog.borrow_item("WT001", "U001").unwrap();
    let _ = catalog.borrow_item("WT001", "U002");
    let _ = catalog.borrow_item("WT001", "U003");

    let holders: Vec<&str> = catalog
        .list_users()
        .into_iter()
        .filter(|u| u.holds("WT001"))
        .map(|u| u.id())
        .collect();
    assert_eq!(holders, vec!["U001"]);
}

#[test]
fn test_unknown_user_selection_falls_back() {
    let mut catalog = seeded();
    catalog.set_active_user("U003");
    assert_eq!(catalog.set_active_user("U999"), UserSelection::Defaulted);
    assert_eq!(catalog.active_user().unwrap().id(), "U001");
}

#[test]
fn test_available_filter() {
    let mut catalog = seeded();
    catalog.borrow_item("WT001", "U001").unwrap();
    catalog.borrow_item("GT001", "U002").unwrap();

    let available: Vec<&str> = catalog
        .filter_items(ItemFilter::Available)
        .into_iter()
        .map(Item::id)
        .collect();
    assert_eq!(available, vec!["KA001"]);
}

#[test]
fn test_enforced_borrower_on_return() {
    let config = AppConfig {
        lending: LendingConfig {
            enforce_borrower_on_return: true,
            ..LendingConfig::default()
        },
        ..AppConfig::default()
    };
    let mut catalog = Catalog::from_config(&config).unwrap();
    catalog.borrow_item("KA001", "U002").unwrap();
    let before = state(&catalog);

    let result = catalog.return_item("KA001", "U001");
    assert!(matches!(result, Err(AppError::NotBorrower { .. })));
    assert_eq!(state(&catalog), before);
}

#[test]
fn test_custom_seed() {
    let seed = SeedConfig {
        items: vec![ItemSeed {
            kind: "garden".to_string(),
            id: "GT100".to_string(),
            name: "Wheelbarrow".to_string(),
            attribute: "Galvanised Steel".to_string(),
            accessories: Vec::new(),
        }],
        users: vec![UserSeed {
            id: "M01".to_string(),
            name: "Mia Wong".to_string(),
        }],
    };
    let mut catalog = Catalog::from_seed(&seed, LendingConfig::default()).unwrap();
    assert_eq!(catalog.active_user().unwrap().name(), "Mia Wong");

    catalog.borrow_item("gt100", "m01").unwrap();
    let description = catalog.get_item("GT100").unwrap().describe();
    assert!(description.contains("Material: Galvanised Steel"));
    assert!(description.contains("Status: On Loan"));
}
